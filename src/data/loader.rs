use std::fs;
use std::path::Path;

use log::info;

use crate::error::LoadError;
use crate::models::Quiz;

use super::Catalog;

/// Load and validate a quiz catalog from a JSON file.
pub fn load_catalog_from_json<P: AsRef<Path>>(path: P) -> Result<Catalog, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let quizzes: Vec<Quiz> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let catalog = Catalog::new(quizzes).map_err(|source| LoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;

    info!("loaded {} quizzes from {}", catalog.len(), path.display());
    Ok(catalog)
}
