use std::collections::HashSet;

use serde::Deserialize;

use crate::errors::LoadError;
use crate::params::ParameterSet;
use crate::save::{FORMAT_ID, FORMAT_VERSION};

/// The top-level file structure for deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterFileRaw {
    pub format: String,
    pub version: u32,
    pub configurations: Vec<ParameterSet>,
}

/// Deserialize the parameter sets listed in a JSON document.
///
/// Validates the format identifier and version and rejects repeated names.
/// Field values are not checked here; that happens when each spiral is built.
pub fn load_parameter_sets(json: &str) -> Result<Vec<ParameterSet>, LoadError> {
    let raw: ParameterFileRaw =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    if raw.format != FORMAT_ID {
        return Err(LoadError::UnknownFormat(raw.format));
    }

    if raw.version > FORMAT_VERSION {
        return Err(LoadError::FutureVersion {
            file_version: raw.version,
            supported_version: FORMAT_VERSION,
        });
    }

    let mut seen = HashSet::new();
    for set in &raw.configurations {
        if !seen.insert(set.name.as_str()) {
            return Err(LoadError::DuplicateName {
                name: set.name.clone(),
            });
        }
    }

    Ok(raw.configurations)
}
