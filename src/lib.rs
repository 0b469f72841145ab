mod classifier;
mod db;
mod error;
mod identity;
mod registry;
mod site;
mod types;

pub use classifier::Classifier;
pub use db::load_bad_bots;
pub use error::{Error, Result};
pub use registry::{BadBotRegistry, BAD_BOTS_PATH_ENV, DEFAULT_BAD_BOTS_PATH};
pub use site::get_from_site;
pub use types::*;
