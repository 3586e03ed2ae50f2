pub mod backup;
pub mod error;
pub mod file;
pub mod paths;

use crate::error::Result;
use addrbook_core::{AddressBook, ImportMode};
use std::path::{Path, PathBuf};
use tracing::debug;

/// An address book bound to the JSON file it is loaded from and saved to.
pub struct Store {
    path: PathBuf,
    book: AddressBook,
}

impl Store {
    pub fn open(path: &Path, mode: ImportMode) -> Result<Self> {
        let mut book = AddressBook::new();
        match file::read_book(path)? {
            Some(data) => {
                let messages = book.import_with(&data, mode)?;
                debug!(path = %path.display(), records = messages.len(), "contacts loaded");
            }
            None => debug!(path = %path.display(), "contacts file missing, starting empty"),
        }
        Ok(Self {
            path: path.to_path_buf(),
            book,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    pub fn save(&self) -> Result<()> {
        file::write_book(&self.path, &self.book.export())?;
        debug!(path = %self.path.display(), records = self.book.len(), "contacts saved");
        Ok(())
    }

    pub fn backup_to(&self, dest: &Path) -> Result<()> {
        backup::backup_to(&self.path, &self.book.export(), dest)
    }
}
