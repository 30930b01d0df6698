#![warn(clippy::pedantic)]

pub mod error;
pub mod record;

pub use error::WireError;
pub use record::{RECORD_SIZE, Record};
