pub mod field;
pub mod record;

pub use field::{Birthday, Email, Field, FieldKind, Name, Phone, BIRTHDAY_FORMAT};
pub use record::{Record, RecordField};
