use super::*;

pub mod admin_vault;
pub mod city_config;

pub use admin_vault::*;
pub use city_config::*;
