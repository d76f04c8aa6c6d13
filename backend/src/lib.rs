#[macro_use]
extern crate rocket;

use rocket::figment::Figment;
use rocket::fs::{FileServer, Options};
use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;

pub mod config;
pub mod fairings;
pub mod routes;
pub mod store;
pub mod structs;

pub use config::AppConfig;
pub use store::{IdGenerator, NoteStore, StoreError, StoreResult};
pub use structs::{EditNote, Note, NoteForm, NoteMap};

/// Rocket's own configuration with the app's address, port and template dir merged in.
pub fn figment(config: &AppConfig) -> Figment {
    rocket::Config::figment()
        .merge(("address", config.address))
        .merge(("port", config.port))
        .merge(("template_dir", config.template_dir.clone()))
}

/// Assembles the application: an empty note store, page and API routes,
/// static assets and the template fairing.
pub fn build_rocket(config: &AppConfig) -> Rocket<Build> {
    rocket::custom(figment(config))
        .attach(Template::fairing())
        .attach(fairings::Cors::new(config.allowed_origin.clone()))
        .manage(NoteStore::new())
        .mount("/", routes::routes())
        .mount(
            "/static",
            FileServer::new(&config.static_dir, Options::Index | Options::Missing),
        )
}
