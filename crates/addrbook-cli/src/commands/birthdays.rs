use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::{print_message, require_record};
use addrbook_config::MAX_BIRTHDAY_WINDOW_DAYS;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct BirthdayArgs {
    pub name: String,
}

#[derive(Debug, Args)]
pub struct BirthdaysArgs {
    /// Offset in days from today where the window starts
    #[arg(long)]
    pub days: Option<u32>,
}

pub fn days_to_birthday(ctx: &Context<'_>, args: BirthdayArgs) -> Result<()> {
    let record = require_record(ctx.store.book(), &args.name)?;
    if ctx.json {
        let days = record.days_until_birthday(addrbook_core::rules::local_today());
        return print_json(&serde_json::json!({
            "name": record.name().as_str(),
            "days": days,
        }));
    }
    print_message(&record.days_to_birthday());
    Ok(())
}

pub fn birthdays_within(ctx: &Context<'_>, args: BirthdaysArgs) -> Result<()> {
    let days = args.days.unwrap_or(ctx.config.birthday_window_days);
    if days > MAX_BIRTHDAY_WINDOW_DAYS {
        return Err(invalid_input(format!(
            "--days must be at most {}",
            MAX_BIRTHDAY_WINDOW_DAYS
        )));
    }
    print_message(&ctx.store.book().birthdays_within(days));
    Ok(())
}
