use rocket::form::Form;
use rocket::http::Status;
use rocket::response::status::NotFound;
use rocket::response::Redirect;
use rocket::serde::json::Json;
use rocket::State;
use rocket_dyn_templates::{context, Template};

use crate::store::{NoteStore, StoreError};
use crate::structs::{EditNote, Note, NoteForm, NoteMap};

pub fn routes() -> Vec<rocket::Route> {
    routes![
        index,
        add_note,
        save_note,
        edit_note,
        update_note,
        delete_note_get,
        delete_note_post,
        api_list_notes,
        api_get_note,
        api_options,
    ]
}

fn not_found(err: StoreError, what: &str) -> NotFound<String> {
    log::warn!("{err}");
    NotFound(format!("Could not find the resource {what}"))
}

// Pages ///////////////////////////////////////////////////////////////////////////////////////////

#[get("/")]
fn index(store: &State<NoteStore>) -> Template {
    let notes = store.list();
    let count = notes.len();
    Template::render("index", context! { count, notes })
}

#[get("/notes/add")]
fn add_note() -> Template {
    Template::render("add", context! {})
}

#[post("/notes/save", data = "<form>")]
fn save_note(store: &State<NoteStore>, form: Form<NoteForm>) -> Redirect {
    let NoteForm { title, description } = form.into_inner();
    let key = store.create(title, description);
    log::info!("saved note {key}");
    Redirect::found(uri!(index))
}

#[get("/notes/edit/<id>")]
fn edit_note(store: &State<NoteStore>, id: &str) -> Result<Template, NotFound<String>> {
    let note = store.get(id).map_err(|e| not_found(e, "for edit."))?;
    let model = EditNote {
        id: id.to_string(),
        note,
    };
    Ok(Template::render("edit", context! { note: model }))
}

#[post("/notes/update/<id>", data = "<form>")]
fn update_note(
    store: &State<NoteStore>,
    id: &str,
    form: Form<NoteForm>,
) -> Result<Redirect, NotFound<String>> {
    let NoteForm { title, description } = form.into_inner();
    store
        .update(id, title, description)
        .map_err(|e| not_found(e, "to update"))?;
    log::info!("updated note {id}");
    Ok(Redirect::found(uri!(index)))
}

fn delete_note(store: &NoteStore, id: &str) -> Result<Redirect, NotFound<String>> {
    store.delete(id).map_err(|e| not_found(e, "to delete"))?;
    log::info!("deleted note {id}");
    Ok(Redirect::found(uri!(index)))
}

#[get("/notes/delete/<id>")]
fn delete_note_get(store: &State<NoteStore>, id: &str) -> Result<Redirect, NotFound<String>> {
    delete_note(store, id)
}

#[post("/notes/delete/<id>")]
fn delete_note_post(store: &State<NoteStore>, id: &str) -> Result<Redirect, NotFound<String>> {
    delete_note(store, id)
}

// JSON API ////////////////////////////////////////////////////////////////////////////////////////

#[get("/api/notes")]
fn api_list_notes(store: &State<NoteStore>) -> Json<NoteMap> {
    Json(store.list())
}

#[get("/api/notes/<id>")]
fn api_get_note(store: &State<NoteStore>, id: &str) -> Result<Json<Note>, NotFound<String>> {
    store
        .get(id)
        .map(Json)
        .map_err(|e| not_found(e, "to show"))
}

// Preflight requests from browser clients
#[options("/api/<_..>")]
fn api_options() -> Status {
    Status::Ok
}
