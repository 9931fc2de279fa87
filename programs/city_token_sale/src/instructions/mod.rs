use super::*;

pub mod admin;
pub mod initialize;
pub mod buy;
pub mod preview_buy;

pub use admin::*;
pub use initialize::*;
pub use buy::*;
pub use preview_buy::*;
