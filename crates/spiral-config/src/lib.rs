pub mod errors;
pub mod load;
pub mod params;
pub mod save;

pub use errors::LoadError;
pub use load::load_parameter_sets;
pub use params::{default_parameter_sets, ParameterSet, SpiralParams};
pub use save::{save_parameter_sets, FORMAT_ID, FORMAT_VERSION};
