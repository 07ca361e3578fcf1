//! Configuration: environment-driven settings plus the constants shared
//! by pagination, authentication and validation.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
