//! Conversion between an [`AddressBook`] and its plain nested-mapping form.
//!
//! [`BookData`] is what gets persisted: a name-keyed mapping of
//! [`RecordData`] values that serializes as a JSON object with keys in
//! book order. Nothing here touches the filesystem.

use crate::book::AddressBook;
use crate::domain::record::MISSING;
use crate::domain::{Birthday, Email, Name, Phone, Record};
use crate::error::CoreError;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Stored `bday` value of a contact without a birthday.
pub const NO_BIRTHDAY: &str = MISSING;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordData {
    pub name: String,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    pub bday: String,
}

/// Which stored fields an import rebuilds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportMode {
    /// Name, phones and birthday. Stored emails are skipped.
    #[default]
    Legacy,
    /// Everything, emails included.
    Full,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookData {
    entries: Vec<(String, RecordData)>,
}

impl BookData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry for `key`, keeping its original position.
    pub fn insert(&mut self, key: String, data: RecordData) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = data,
            None => self.entries.push((key, data)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&RecordData> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, data)| data)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RecordData)> {
        self.entries.iter().map(|(key, data)| (key.as_str(), data))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

impl FromIterator<(String, RecordData)> for BookData {
    fn from_iter<I: IntoIterator<Item = (String, RecordData)>>(iter: I) -> Self {
        let mut data = BookData::new();
        for (key, value) in iter {
            data.insert(key, value);
        }
        data
    }
}

impl Serialize for BookData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for BookData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BookDataVisitor;

        impl<'de> Visitor<'de> for BookDataVisitor {
            type Value = BookData;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of contact names to records")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<BookData, A::Error> {
                let mut data = BookData::new();
                while let Some((key, value)) = access.next_entry::<String, RecordData>()? {
                    data.insert(key, value);
                }
                Ok(data)
            }
        }

        deserializer.deserialize_map(BookDataVisitor)
    }
}

pub fn record_to_data(record: &Record) -> RecordData {
    RecordData {
        name: record.name().to_string(),
        phones: record.phones().iter().map(ToString::to_string).collect(),
        emails: record.emails().iter().map(ToString::to_string).collect(),
        bday: record.birthday_text(),
    }
}

pub fn record_from_data(data: &RecordData, mode: ImportMode) -> Result<Record, CoreError> {
    let name = Name::new(&data.name)?;
    let phones = data
        .phones
        .iter()
        .map(|raw| Phone::new(raw))
        .collect::<Result<Vec<_>, _>>()?;
    let birthday = if data.bday == NO_BIRTHDAY {
        None
    } else {
        Some(Birthday::new(&data.bday)?)
    };
    let mut record = Record::new(name)
        .with_phones(phones)
        .with_birthday(birthday);
    if mode == ImportMode::Full {
        let emails = data
            .emails
            .iter()
            .map(|raw| Email::new(raw))
            .collect::<Result<Vec<_>, _>>()?;
        record = record.with_emails(emails);
    }
    Ok(record)
}

pub fn export(book: &AddressBook) -> BookData {
    book.records()
        .map(|record| (record.name().to_string(), record_to_data(record)))
        .collect()
}

/// Adds every stored record to `book`, returning one message per entry.
///
/// All entries are validated before any is added, so an invalid entry
/// leaves the book untouched.
pub fn import(
    book: &mut AddressBook,
    data: &BookData,
    mode: ImportMode,
) -> Result<Vec<String>, CoreError> {
    let records = data
        .iter()
        .map(|(_, entry)| record_from_data(entry, mode))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records
        .into_iter()
        .map(|record| book.add_record(record))
        .collect())
}
