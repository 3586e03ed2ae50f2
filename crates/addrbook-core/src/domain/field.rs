use crate::error::CoreError;
use crate::rules::dates::anniversary;
use chrono::NaiveDate;
use std::fmt;
use std::hash::{Hash, Hasher};

pub const BIRTHDAY_FORMAT: &str = "%d %B %Y";
pub const MIN_PHONE_LEN: usize = 6;

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Phone,
    Email,
    Birthday,
}

/// A validated string value attached to a contact.
///
/// Equality and hashing only look at [`Field::value`], so fields of
/// different kinds holding the same string compare equal.
pub trait Field: fmt::Display {
    fn kind(&self) -> FieldKind;
    fn value(&self) -> &str;
}

macro_rules! field_type {
    ($name:ident, $kind:expr) => {
        impl Field for $name {
            fn kind(&self) -> FieldKind {
                $kind
            }

            fn value(&self) -> &str {
                &self.value
            }
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.value
            }
        }

        impl<F: Field> PartialEq<F> for $name {
            fn eq(&self, other: &F) -> bool {
                self.value() == other.value()
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.value().hash(state);
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.value)
            }
        }
    };
}

#[derive(Debug, Clone)]
pub struct Name {
    value: String,
}

impl Name {
    pub fn new(value: &str) -> Result<Self, CoreError> {
        if value.is_empty() {
            return Err(CoreError::EmptyName);
        }
        Ok(Self {
            value: value.to_string(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Phone {
    value: String,
}

impl Phone {
    pub fn new(value: &str) -> Result<Self, CoreError> {
        validate_phone(value)?;
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Replaces the number, keeping the old one when the new one is invalid.
    pub fn set(&mut self, value: &str) -> Result<(), CoreError> {
        validate_phone(value)?;
        self.value = value.to_string();
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Email {
    value: String,
}

impl Email {
    pub fn new(value: &str) -> Result<Self, CoreError> {
        validate_email(value)?;
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Replaces the address, keeping the old one when the new one is invalid.
    pub fn set(&mut self, value: &str) -> Result<(), CoreError> {
        validate_email(value)?;
        self.value = value.to_string();
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Birthday {
    value: String,
    date: NaiveDate,
}

impl Birthday {
    pub fn new(value: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidBirthday(value.to_string());
        if !has_birthday_layout(value) {
            return Err(invalid());
        }
        let date = NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT).map_err(|_| invalid())?;
        Ok(Self {
            value: value.to_string(),
            date,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The birthday's day and month in `year`; 29 February falls on the
    /// 28th in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        anniversary(self.date, year)
    }
}

field_type!(Name, FieldKind::Name);
field_type!(Phone, FieldKind::Phone);
field_type!(Email, FieldKind::Email);
field_type!(Birthday, FieldKind::Birthday);

fn validate_phone(value: &str) -> Result<(), CoreError> {
    if value.chars().count() < MIN_PHONE_LEN {
        return Err(CoreError::InvalidPhone(value.to_string()));
    }
    Ok(())
}

/// `day monthname year` with a full month name and a four-digit year.
fn has_birthday_layout(value: &str) -> bool {
    if value.starts_with(char::is_whitespace) || value.ends_with(char::is_whitespace) {
        return false;
    }
    let parts: Vec<&str> = value.split_whitespace().collect();
    let [day, month, year] = parts.as_slice() else {
        return false;
    };
    (1..=2).contains(&day.len())
        && day.bytes().all(|b| b.is_ascii_digit())
        && MONTH_NAMES.contains(&month.to_ascii_lowercase().as_str())
        && year.len() == 4
        && year.bytes().all(|b| b.is_ascii_digit())
}

fn validate_email(value: &str) -> Result<(), CoreError> {
    if !value.contains('@') {
        return Err(CoreError::InvalidEmail(value.to_string()));
    }
    Ok(())
}
