use crate::bridge::{self, BookData, ImportMode};
use crate::domain::record::bracketed;
use crate::domain::Record;
use crate::error::CoreError;
use crate::rules::dates::local_today;
use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

/// Days past the window start that still get a weekday-named bucket.
pub const WEEK_AFTER_DAYS: i64 = 7;

/// Contacts keyed by name, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
}

#[derive(Debug)]
pub enum Lookup<'a> {
    Found(&'a Record),
    Absent(String),
}

impl Lookup<'_> {
    pub fn record(&self) -> Option<&Record> {
        match self {
            Lookup::Found(record) => Some(record),
            Lookup::Absent(_) => None,
        }
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|index| &self.records[index])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        let index = self.position(name)?;
        self.records.get_mut(index)
    }

    pub fn remove(&mut self, name: &str) -> Option<Record> {
        let index = self.position(name)?;
        Some(self.records.remove(index))
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name().as_str())
    }

    pub fn add_record(&mut self, record: Record) -> String {
        let name = record.name().as_str();
        if self.contains(name) {
            return format!("{} is already in contacts", name);
        }
        let message = format!(
            "{} with {} phone and birthday {} is successfully added in contacts",
            name,
            record,
            record.birthday_text()
        );
        self.records.push(record);
        message
    }

    pub fn lookup(&self, name: &str) -> Lookup<'_> {
        match self.get(name) {
            Some(record) => Lookup::Found(record),
            None => Lookup::Absent(format!("Contact {} is absent", name)),
        }
    }

    /// Lists contacts `page_size` at a time. A zero page size is rejected.
    pub fn paginate(&self, page_size: usize) -> Result<Pages<'_>, CoreError> {
        if page_size == 0 {
            return Err(CoreError::InvalidPageSize(page_size));
        }
        Ok(Pages {
            records: &self.records,
            page_size,
            start: 0,
        })
    }

    pub fn export(&self) -> BookData {
        bridge::export(self)
    }

    pub fn import_from(&mut self, data: &BookData) -> Result<Vec<String>, CoreError> {
        bridge::import(self, data, ImportMode::Legacy)
    }

    pub fn import_with(
        &mut self,
        data: &BookData,
        mode: ImportMode,
    ) -> Result<Vec<String>, CoreError> {
        bridge::import(self, data, mode)
    }

    pub fn birthdays_within(&self, days: u32) -> String {
        self.birthdays_within_on(local_today(), days)
    }

    /// Groups contacts whose birthday this year lands on `today + days`,
    /// the day after, or up to a week after that.
    pub fn birthdays_within_on(&self, today: NaiveDate, days: u32) -> String {
        let mut buckets: Vec<(String, Vec<&str>)> = Vec::new();
        if let Some(window_start) = today.checked_add_signed(Duration::days(i64::from(days))) {
            for record in &self.records {
                let Some(occurrence) = record
                    .birthday()
                    .and_then(|birthday| birthday.occurrence_in(today.year()))
                else {
                    continue;
                };
                let days_left = (occurrence - window_start).num_days();
                let label = match days_left {
                    0 => format!("In {} days from today", days),
                    1 => format!("Next day after {} days from today", days),
                    2..=WEEK_AFTER_DAYS => occurrence.format("%A, %d %B").to_string(),
                    _ => continue,
                };
                let name = record.name().as_str();
                match buckets.iter_mut().find(|(existing, _)| *existing == label) {
                    Some((_, names)) => names.push(name),
                    None => buckets.push((label, vec![name])),
                }
            }
        }

        if buckets.is_empty() {
            return format!(
                "There are no birthdays in {} days from today + 7 days after",
                days
            );
        }
        buckets
            .iter()
            .map(|(label, names)| format!("{}: {}\n", label, names.join(", ")))
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name().as_str() == name)
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .records
            .iter()
            .map(|record| format!("{} : {}", record.name(), record))
            .collect();
        f.write_str(&lines.join("\n"))
    }
}

/// Pages of the contact listing. Single pass: ask the book for a new
/// `Pages` to start over.
#[derive(Debug)]
pub struct Pages<'a> {
    records: &'a [Record],
    page_size: usize,
    start: usize,
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let remaining = self.records.get(self.start..)?;
        if remaining.is_empty() {
            return None;
        }
        let page = &remaining[..self.page_size.min(remaining.len())];
        self.start += page.len();
        let lines: Vec<String> = page.iter().map(listing_line).collect();
        Some(lines.join("\n"))
    }
}

fn listing_line(record: &Record) -> String {
    format!(
        "{} : {}, {}, {}",
        record.name(),
        bracketed(record.phones()),
        bracketed(record.emails()),
        record.birthday_text()
    )
}

#[cfg(test)]
mod tests {
    use super::{AddressBook, Lookup};
    use crate::domain::{Birthday, Email, Name, Phone, Record};
    use crate::error::CoreError;
    use chrono::NaiveDate;

    fn record(name: &str, phones: &[&str], bday: Option<&str>) -> Record {
        Record::new(Name::new(name).unwrap())
            .with_phones(phones.iter().map(|p| Phone::new(p).unwrap()).collect())
            .with_birthday(bday.map(|b| Birthday::new(b).unwrap()))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn add_record_reports_success() {
        let mut book = AddressBook::new();
        let message = book.add_record(record("Anna", &["0501234567"], Some("27 August 1987")));
        assert_eq!(
            message,
            "Anna with [0501234567] phone and birthday 27 August 1987 is successfully added in contacts"
        );
        let message = book.add_record(record("Bob", &[], None));
        assert_eq!(
            message,
            "Bob with [] phone and birthday None is successfully added in contacts"
        );
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn add_record_rejects_duplicate_name() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", &["0501234567"], None));
        let message = book.add_record(record("Anna", &["0679999999"], None));
        assert_eq!(message, "Anna is already in contacts");
        assert_eq!(book.len(), 1);
        assert_eq!(book.get("Anna").unwrap().phones()[0].as_str(), "0501234567");
    }

    #[test]
    fn lookup_is_soft() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", &["0501234567"], None));
        assert!(matches!(book.lookup("Anna"), Lookup::Found(r) if r.name().as_str() == "Anna"));
        match book.lookup("Bob") {
            Lookup::Absent(message) => assert_eq!(message, "Contact Bob is absent"),
            Lookup::Found(_) => panic!("unexpected record"),
        }
    }

    #[test]
    fn remove_and_get_mut() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", &[], None));
        book.get_mut("Anna")
            .unwrap()
            .add_email(Email::new("anna@example.com").unwrap());
        assert_eq!(book.get("Anna").unwrap().emails().len(), 1);
        assert!(book.remove("Anna").is_some());
        assert!(book.remove("Anna").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn paginate_splits_into_pages() {
        let mut book = AddressBook::new();
        for name in ["A", "B", "C", "D", "E"] {
            book.add_record(record(name, &["0501234567"], None));
        }
        let pages: Vec<String> = book.paginate(2).unwrap().collect();
        assert_eq!(pages.len(), 3);
        let sizes: Vec<usize> = pages.iter().map(|page| page.lines().count()).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
        assert_eq!(pages[2], "E : [0501234567], [], None");
    }

    #[test]
    fn paginate_formats_all_fields() {
        let mut book = AddressBook::new();
        let mut anna = record("Anna", &["0501234567"], Some("27 August 1987"));
        anna.add_email(Email::new("anna@example.com").unwrap());
        book.add_record(anna);
        let mut pages = book.paginate(10).unwrap();
        assert_eq!(
            pages.next().as_deref(),
            Some("Anna : [0501234567], [anna@example.com], 27 August 1987")
        );
        assert_eq!(pages.next(), None);
        assert_eq!(pages.next(), None);
    }

    #[test]
    fn paginate_empty_book_yields_nothing() {
        let book = AddressBook::new();
        assert_eq!(book.paginate(3).unwrap().count(), 0);
    }

    #[test]
    fn paginate_rejects_zero() {
        let book = AddressBook::new();
        assert_eq!(book.paginate(0).unwrap_err(), CoreError::InvalidPageSize(0));
    }

    #[test]
    fn export_import_roundtrip() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", &["0501234567", "0671234567"], Some("27 August 1987")));
        book.add_record(record("Bob", &["0931112233"], None));
        let data = book.export();
        assert_eq!(data.get("Bob").unwrap().bday, "None");

        let mut restored = AddressBook::new();
        let messages = restored.import_from(&data).expect("import");
        assert_eq!(messages.len(), 2);
        assert_eq!(restored.names().collect::<Vec<_>>(), vec!["Anna", "Bob"]);
        assert_eq!(
            restored.get("Anna").unwrap().phones(),
            book.get("Anna").unwrap().phones()
        );
        assert!(restored.get("Bob").unwrap().birthday().is_none());
        assert_eq!(
            restored.get("Anna").unwrap().birthday().unwrap().as_str(),
            "27 August 1987"
        );
    }

    #[test]
    fn import_from_drops_emails() {
        let mut book = AddressBook::new();
        let mut anna = record("Anna", &["0501234567"], None);
        anna.add_email(Email::new("anna@example.com").unwrap());
        book.add_record(anna);
        let data = book.export();

        let mut legacy = AddressBook::new();
        legacy.import_from(&data).unwrap();
        assert!(legacy.get("Anna").unwrap().emails().is_empty());

        let mut full = AddressBook::new();
        full.import_with(&data, super::ImportMode::Full).unwrap();
        assert_eq!(full.get("Anna").unwrap().emails().len(), 1);
    }

    #[test]
    fn import_keeps_existing_records() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", &["0501234567"], None));
        let mut other = AddressBook::new();
        other.add_record(record("Anna", &["0679999999"], None));
        let messages = book.import_from(&other.export()).unwrap();
        assert_eq!(messages, vec!["Anna is already in contacts".to_string()]);
        assert_eq!(book.get("Anna").unwrap().phones()[0].as_str(), "0501234567");
    }

    #[test]
    fn birthdays_within_weekday_bucket() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", &[], Some("26 October 1990")));
        assert_eq!(
            book.birthdays_within_on(today(), 7),
            "Monday, 26 October: Anna\n"
        );
    }

    #[test]
    fn birthdays_within_exact_and_next_day() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", &[], Some("23 October 1990")));
        book.add_record(record("Bob", &[], Some("24 October 1985")));
        book.add_record(record("Cid", &[], Some("23 October 2001")));
        book.add_record(record("Dan", &[], None));
        assert_eq!(
            book.birthdays_within_on(today(), 7),
            "In 7 days from today: Anna, Cid\nNext day after 7 days from today: Bob\n"
        );
    }

    #[test]
    fn birthdays_within_ignores_far_and_passed_dates() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", &[], Some("1 November 1990")));
        book.add_record(record("Bob", &[], Some("1 January 1990")));
        book.add_record(record("Cid", &[], Some("22 October 1990")));
        assert_eq!(
            book.birthdays_within_on(today(), 7),
            "There are no birthdays in 7 days from today + 7 days after"
        );
    }

    #[test]
    fn birthdays_within_does_not_roll_into_next_year() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", &[], Some("2 January 1990")));
        let december = NaiveDate::from_ymd_opt(2026, 12, 30).unwrap();
        assert_eq!(
            book.birthdays_within_on(december, 3),
            "There are no birthdays in 3 days from today + 7 days after"
        );
    }

    #[test]
    fn display_lists_names_and_phones() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", &["0501234567"], None));
        book.add_record(record("Bob", &[], None));
        assert_eq!(book.to_string(), "Anna : [0501234567]\nBob : []");
    }
}
