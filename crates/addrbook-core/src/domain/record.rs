use crate::domain::field::{Birthday, Email, Field, Name, Phone};
use crate::error::CoreError;
use crate::rules::dates::{local_today, next_anniversary};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

pub const BIRTHDATE_NOT_SET: &str = "Birthdate not set.";

/// Rendering of an absent birthday in messages and exported data.
pub(crate) const MISSING: &str = "None";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Name,
    Phones,
    Emails,
    Birthday,
}

impl RecordField {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordField::Name => "name",
            RecordField::Phones => "phones",
            RecordField::Emails => "emails",
            RecordField::Birthday => "bday",
        }
    }
}

impl FromStr for RecordField {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(RecordField::Name),
            "phones" | "phone" => Ok(RecordField::Phones),
            "emails" | "email" => Ok(RecordField::Emails),
            "bday" | "birthday" => Ok(RecordField::Birthday),
            _ => Err(CoreError::UnknownField(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    emails: Vec<Email>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            emails: Vec::new(),
            birthday: None,
        }
    }

    pub fn with_phones(mut self, phones: Vec<Phone>) -> Self {
        self.phones = phones;
        self
    }

    pub fn with_emails(mut self, emails: Vec<Email>) -> Self {
        self.emails = emails;
        self
    }

    pub fn with_birthday(mut self, birthday: Option<Birthday>) -> Self {
        self.birthday = birthday;
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.birthday = birthday;
    }

    pub fn add_phone(&mut self, phone: Phone) -> String {
        let message = format!(
            "Contact {} with {} phone number has been added",
            self.name, phone
        );
        self.phones.push(phone);
        message
    }

    pub fn add_email(&mut self, email: Email) -> String {
        let message = format!("Contact {} with {} email has been added", self.name, email);
        self.emails.push(email);
        message
    }

    /// Removes the first stored phone, whichever number `phone` names.
    pub fn del_phone(&mut self, phone: &Phone) -> String {
        if self.phones.is_empty() {
            return format!("{} not in list", phone);
        }
        let removed = self.phones.remove(0);
        format!(
            "Phone number {} has been deleted from contact {}",
            removed, self.name
        )
    }

    /// Removes the first stored email, whichever address `email` names.
    pub fn del_email(&mut self, email: &Email) -> String {
        if self.emails.is_empty() {
            return format!("{} not in list", email);
        }
        let removed = self.emails.remove(0);
        format!("Email {} has been deleted from contact {}", removed, self.name)
    }

    pub fn edit_phone(&mut self, old: &Phone, new: Phone) -> String {
        if !self.phones.contains(old) {
            return format!("{} not in list", old);
        }
        self.del_phone(old);
        let message = format!(
            "Phone number {} has been substituted with {} for contact {}",
            old, new, self.name
        );
        self.add_phone(new);
        message
    }

    pub fn edit_email(&mut self, old: &Email, new: Email) -> String {
        if !self.emails.contains(old) {
            return format!("{} not in list", old);
        }
        self.del_email(old);
        let message = format!(
            "Email {} has been substituted with {} for contact {}",
            old, new, self.name
        );
        self.add_email(new);
        message
    }

    /// Whole days until the next birthday, counting a birthday today as 1.
    pub fn days_until_birthday(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;
        let target = next_anniversary(birthday.date(), today)?;
        Some((target - today).num_days() + 1)
    }

    pub fn days_to_birthday(&self) -> String {
        self.days_to_birthday_on(local_today())
    }

    pub fn days_to_birthday_on(&self, today: NaiveDate) -> String {
        match (&self.birthday, self.days_until_birthday(today)) {
            (Some(birthday), Some(days)) => format!(
                "{}, {}: {} days left to your birthday",
                self.name, birthday, days
            ),
            _ => BIRTHDATE_NOT_SET.to_string(),
        }
    }

    pub fn field(&self, key: RecordField) -> Option<String> {
        match key {
            RecordField::Name => Some(self.name.to_string()),
            RecordField::Phones => Some(bracketed(&self.phones)),
            RecordField::Emails => Some(bracketed(&self.emails)),
            RecordField::Birthday => self.birthday.as_ref().map(|b| b.to_string()),
        }
    }

    pub(crate) fn birthday_text(&self) -> String {
        self.birthday
            .as_ref()
            .map_or_else(|| MISSING.to_string(), |b| b.to_string())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bracketed(&self.phones))
    }
}

/// Renders fields as `[a, b]`.
pub(crate) fn bracketed<F: Field>(items: &[F]) -> String {
    let values: Vec<&str> = items.iter().map(Field::value).collect();
    format!("[{}]", values.join(", "))
}

#[cfg(test)]
mod tests {
    use super::{Record, RecordField, BIRTHDATE_NOT_SET};
    use crate::domain::{Birthday, Email, Name, Phone};
    use chrono::NaiveDate;

    fn phone(raw: &str) -> Phone {
        Phone::new(raw).unwrap()
    }

    fn email(raw: &str) -> Email {
        Email::new(raw).unwrap()
    }

    fn anna() -> Record {
        Record::new(Name::new("Anna").unwrap())
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_phone_appends_and_confirms() {
        let mut record = anna();
        let message = record.add_phone(phone("0501234567"));
        assert_eq!(
            message,
            "Contact Anna with 0501234567 phone number has been added"
        );
        record.add_phone(phone("0501234567"));
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn del_phone_removes_first_entry_not_the_match() {
        let mut record = anna().with_phones(vec![phone("1111111"), phone("2222222")]);
        let message = record.del_phone(&phone("2222222"));
        assert_eq!(message, "Phone number 1111111 has been deleted from contact Anna");
        assert_eq!(record.phones(), &[phone("2222222")]);
    }

    #[test]
    fn del_phone_on_empty_list_reports_missing() {
        let mut record = anna();
        assert_eq!(record.del_phone(&phone("1111111")), "1111111 not in list");
    }

    #[test]
    fn del_email_removes_first_entry() {
        let mut record = anna().with_emails(vec![email("a@x.com"), email("b@x.com")]);
        let message = record.del_email(&email("b@x.com"));
        assert_eq!(message, "Email a@x.com has been deleted from contact Anna");
        assert_eq!(record.emails(), &[email("b@x.com")]);
        record.del_email(&email("b@x.com"));
        assert_eq!(record.del_email(&email("b@x.com")), "b@x.com not in list");
    }

    #[test]
    fn edit_phone_substitutes_when_present() {
        let mut record = anna().with_phones(vec![phone("1111111")]);
        let message = record.edit_phone(&phone("1111111"), phone("3333333"));
        assert_eq!(
            message,
            "Phone number 1111111 has been substituted with 3333333 for contact Anna"
        );
        assert_eq!(record.phones(), &[phone("3333333")]);
    }

    #[test]
    fn edit_phone_inherits_first_entry_removal() {
        let mut record = anna().with_phones(vec![phone("1111111"), phone("2222222")]);
        record.edit_phone(&phone("2222222"), phone("3333333"));
        assert_eq!(record.phones(), &[phone("2222222"), phone("3333333")]);
    }

    #[test]
    fn edit_phone_leaves_list_when_absent() {
        let mut record = anna().with_phones(vec![phone("1111111")]);
        let message = record.edit_phone(&phone("9999999"), phone("3333333"));
        assert_eq!(message, "9999999 not in list");
        assert_eq!(record.phones(), &[phone("1111111")]);
    }

    #[test]
    fn edit_email_substitutes_when_present() {
        let mut record = anna().with_emails(vec![email("a@x.com")]);
        let message = record.edit_email(&email("a@x.com"), email("c@x.com"));
        assert_eq!(
            message,
            "Email a@x.com has been substituted with c@x.com for contact Anna"
        );
        assert_eq!(record.emails(), &[email("c@x.com")]);
        assert_eq!(
            record.edit_email(&email("a@x.com"), email("d@x.com")),
            "a@x.com not in list"
        );
    }

    #[test]
    fn days_to_birthday_without_birthday() {
        assert_eq!(anna().days_to_birthday_on(day(2026, 10, 16)), BIRTHDATE_NOT_SET);
        assert_eq!(anna().days_until_birthday(day(2026, 10, 16)), None);
    }

    #[test]
    fn days_to_birthday_counts_today_as_one() {
        let today = day(2026, 10, 16);
        let record = anna().with_birthday(Some(Birthday::new("16 October 1990").unwrap()));
        assert_eq!(record.days_until_birthday(today), Some(1));
        assert_eq!(
            record.days_to_birthday_on(today),
            "Anna, 16 October 1990: 1 days left to your birthday"
        );
    }

    #[test]
    fn days_to_birthday_tomorrow_is_two() {
        let record = anna().with_birthday(Some(Birthday::new("17 October 1990").unwrap()));
        assert_eq!(record.days_until_birthday(day(2026, 10, 16)), Some(2));
    }

    #[test]
    fn days_to_birthday_rolls_into_next_year() {
        let record = anna().with_birthday(Some(Birthday::new("15 October 1990").unwrap()));
        assert_eq!(record.days_until_birthday(day(2026, 10, 16)), Some(365));

        let new_year = anna().with_birthday(Some(Birthday::new("1 January 1990").unwrap()));
        assert_eq!(new_year.days_until_birthday(day(2026, 12, 31)), Some(2));
    }

    #[test]
    fn display_renders_phone_list_only() {
        let record = anna()
            .with_phones(vec![phone("1111111"), phone("2222222")])
            .with_emails(vec![email("a@x.com")]);
        assert_eq!(record.to_string(), "[1111111, 2222222]");
        assert_eq!(anna().to_string(), "[]");
    }

    #[test]
    fn field_dispatch_by_key() {
        let record = anna().with_phones(vec![phone("1111111")]);
        let key: RecordField = "bday".parse().unwrap();
        assert_eq!(record.field(key), None);
        assert_eq!(record.field(RecordField::Name).as_deref(), Some("Anna"));
        assert_eq!(
            record.field("phones".parse().unwrap()).as_deref(),
            Some("[1111111]")
        );
        assert!("address".parse::<RecordField>().is_err());
    }
}
