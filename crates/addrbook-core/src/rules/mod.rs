pub mod dates;

pub use dates::{anniversary, is_leap_year, local_today, next_anniversary};
