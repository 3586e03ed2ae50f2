use crate::commands::Context;
use crate::util::{print_message, require_record_mut};
use addrbook_core::Email;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    Add(EmailArgs),
    /// Removes the contact's first stored address
    Rm(EmailArgs),
    Edit(EditEmailArgs),
}

#[derive(Debug, Args)]
pub struct EmailArgs {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Args)]
pub struct EditEmailArgs {
    pub name: String,
    pub old: String,
    pub new: String,
}

pub fn add_email(ctx: &mut Context<'_>, args: EmailArgs) -> Result<()> {
    let email = Email::new(&args.email)?;
    let record = require_record_mut(ctx.store.book_mut(), &args.name)?;
    let message = record.add_email(email);
    ctx.save()?;
    print_message(&message);
    Ok(())
}

pub fn remove_email(ctx: &mut Context<'_>, args: EmailArgs) -> Result<()> {
    let email = Email::new(&args.email)?;
    let record = require_record_mut(ctx.store.book_mut(), &args.name)?;
    let changed = !record.emails().is_empty();
    let message = record.del_email(&email);
    if changed {
        ctx.save()?;
    }
    print_message(&message);
    Ok(())
}

pub fn edit_email(ctx: &mut Context<'_>, args: EditEmailArgs) -> Result<()> {
    let old = Email::new(&args.old)?;
    let new = Email::new(&args.new)?;
    let record = require_record_mut(ctx.store.book_mut(), &args.name)?;
    let changed = record.emails().contains(&old);
    let message = record.edit_email(&old, new);
    if changed {
        ctx.save()?;
    }
    print_message(&message);
    Ok(())
}
