pub mod book;
pub mod bridge;
pub mod domain;
pub mod error;
pub mod rules;

pub use book::{AddressBook, Lookup, Pages};
pub use bridge::{BookData, ImportMode, RecordData, NO_BIRTHDAY};
pub use domain::*;
pub use error::CoreError;
