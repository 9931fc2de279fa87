use super::*;

pub mod initialize_vault;
pub mod create_city_metadata;

pub use initialize_vault::*;
pub use create_city_metadata::*;
