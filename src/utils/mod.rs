pub mod files;
pub use files::*;

pub mod json;
pub use json::*;
