use crate::commands::Context;
use crate::util::{print_message, require_record_mut};
use addrbook_core::Phone;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum PhoneCommand {
    Add(PhoneArgs),
    /// Removes the contact's first stored number
    Rm(PhoneArgs),
    Edit(EditPhoneArgs),
}

#[derive(Debug, Args)]
pub struct PhoneArgs {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Args)]
pub struct EditPhoneArgs {
    pub name: String,
    pub old: String,
    pub new: String,
}

pub fn add_phone(ctx: &mut Context<'_>, args: PhoneArgs) -> Result<()> {
    let phone = Phone::new(&args.phone)?;
    let record = require_record_mut(ctx.store.book_mut(), &args.name)?;
    let message = record.add_phone(phone);
    ctx.save()?;
    print_message(&message);
    Ok(())
}

pub fn remove_phone(ctx: &mut Context<'_>, args: PhoneArgs) -> Result<()> {
    let phone = Phone::new(&args.phone)?;
    let record = require_record_mut(ctx.store.book_mut(), &args.name)?;
    let changed = !record.phones().is_empty();
    let message = record.del_phone(&phone);
    if changed {
        ctx.save()?;
    }
    print_message(&message);
    Ok(())
}

pub fn edit_phone(ctx: &mut Context<'_>, args: EditPhoneArgs) -> Result<()> {
    let old = Phone::new(&args.old)?;
    let new = Phone::new(&args.new)?;
    let record = require_record_mut(ctx.store.book_mut(), &args.name)?;
    let changed = record.phones().contains(&old);
    let message = record.edit_phone(&old, new);
    if changed {
        ctx.save()?;
    }
    print_message(&message);
    Ok(())
}
