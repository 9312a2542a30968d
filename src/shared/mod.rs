pub mod error;
pub mod messages;
pub mod result;
pub mod security;

pub use result::Result;
