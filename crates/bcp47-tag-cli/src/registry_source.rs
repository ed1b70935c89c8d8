use std::fs;
use std::path::Path;

use bcp47_tag_core::Registry;

use crate::error::CliError;

pub const DEFAULT_REGISTRY_PATH: &str = "language-subtag-registry";

pub fn load_registry(path: &Path) -> Result<Registry, CliError> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::RegistryUnavailable {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Registry::from_text(&contents))
}
