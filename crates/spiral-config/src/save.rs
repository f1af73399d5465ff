use serde::Serialize;

use crate::params::ParameterSet;

/// Format identifier written to every parameter file.
pub const FORMAT_ID: &str = "double-spiral";

/// Current parameter file version.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct ParameterFile<'a> {
    format: &'static str,
    version: u32,
    configurations: &'a [ParameterSet],
}

/// Serialize parameter sets to pretty-printed JSON.
pub fn save_parameter_sets(sets: &[ParameterSet]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ParameterFile {
        format: FORMAT_ID,
        version: FORMAT_VERSION,
        configurations: sets,
    })
}
