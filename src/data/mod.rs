mod builtin;
mod catalog;
mod loader;

pub use builtin::{builtin_catalog, listen_phrases, repeat_phrases};
pub use catalog::Catalog;
pub use loader::load_catalog_from_json;
