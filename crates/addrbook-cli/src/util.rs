use crate::error::not_found;
use addrbook_core::{AddressBook, Lookup, Record};
use anyhow::Result;

pub fn require_record<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    match book.lookup(name) {
        Lookup::Found(record) => Ok(record),
        Lookup::Absent(message) => Err(not_found(message)),
    }
}

pub fn require_record_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    if let Lookup::Absent(message) = book.lookup(name) {
        return Err(not_found(message));
    }
    book.get_mut(name)
        .ok_or_else(|| not_found(format!("Contact {} is absent", name)))
}

/// Prints a core message, which may already end with a newline.
pub fn print_message(message: &str) {
    if message.ends_with('\n') {
        print!("{}", message);
    } else {
        println!("{}", message);
    }
}
