//! Custom extractors.

mod params;
mod validated_json;

pub use params::{Path, Query};
pub use validated_json::ValidatedJson;
