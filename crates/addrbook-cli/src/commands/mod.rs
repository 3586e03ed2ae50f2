use addrbook_config::AppConfig;
use addrbook_store::Store;
use anyhow::{Context as _, Result};
use serde::Serialize;
use std::io::{self, Write};

pub mod backup;
pub mod birthdays;
pub mod contacts;
pub mod emails;
pub mod phones;
pub mod transfer;

pub struct Context<'a> {
    pub store: &'a mut Store,
    pub json: bool,
    pub config: &'a AppConfig,
}

impl Context<'_> {
    pub fn save(&self) -> Result<()> {
        self.store
            .save()
            .with_context(|| format!("save contacts to {}", self.store.path().display()))
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
