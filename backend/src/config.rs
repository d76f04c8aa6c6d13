use anyhow::{Context, Result};
use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

const DEFAULT_ADDRESS: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_TEMPLATE_DIR: &str = "templates";
const DEFAULT_ALLOWED_ORIGIN: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub address: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub template_dir: PathBuf,
    pub allowed_origin: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads `NOTEAPP_*` variables from the process environment.
    /// Call `dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let address = lookup("NOTEAPP_ADDRESS").unwrap_or_else(|| DEFAULT_ADDRESS.to_string());
        let address: IpAddr = address
            .trim()
            .parse()
            .with_context(|| format!("NOTEAPP_ADDRESS is not an IP address: `{address}`"))?;

        let port = match lookup("NOTEAPP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("NOTEAPP_PORT is not a valid port: `{raw}`"))?,
            None => DEFAULT_PORT,
        };

        let static_dir = lookup("NOTEAPP_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let template_dir = lookup("NOTEAPP_TEMPLATE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_DIR));
        let allowed_origin =
            lookup("NOTEAPP_ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());

        Ok(Self {
            address,
            port,
            static_dir,
            template_dir,
            allowed_origin,
        })
    }
}
