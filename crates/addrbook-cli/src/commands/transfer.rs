use crate::commands::{print_json, Context};
use crate::error::not_found;
use crate::util::print_message;
use addrbook_store::file;
use anyhow::{Context as _, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Write to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    pub file: PathBuf,
}

pub fn export(ctx: &Context<'_>, args: ExportArgs) -> Result<()> {
    let data = ctx.store.book().export();
    match args.out {
        Some(path) => {
            file::write_book(&path, &data)
                .with_context(|| format!("write export to {}", path.display()))?;
            info!(path = %path.display(), records = data.len(), "contacts exported");
            if !ctx.json {
                println!("exported {} contacts to {}", data.len(), path.display());
            }
            Ok(())
        }
        None => print_json(&data),
    }
}

pub fn import(ctx: &mut Context<'_>, args: ImportArgs) -> Result<()> {
    let data = file::read_book(&args.file)
        .with_context(|| format!("read import file {}", args.file.display()))?
        .ok_or_else(|| not_found(format!("import file {} not found", args.file.display())))?;
    let mode = ctx.config.import_mode();
    let messages = ctx.store.book_mut().import_with(&data, mode)?;
    ctx.save()?;
    info!(records = messages.len(), "contacts imported");

    if ctx.json {
        return print_json(&messages);
    }
    for message in &messages {
        print_message(message);
    }
    Ok(())
}
