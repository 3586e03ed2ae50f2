use crate::commands::{print_json, Context};
use crate::error::not_found;
use crate::util::{print_message, require_record};
use addrbook_core::bridge::record_to_data;
use addrbook_core::{Birthday, Email, Name, Phone, Record, RecordField};
use anyhow::Result;
use clap::Args;
use tracing::debug;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, value_name = "PHONE")]
    pub phone: Vec<String>,
    #[arg(long, value_name = "EMAIL")]
    pub email: Vec<String>,
    /// Birthday like "27 August 1987"
    #[arg(long)]
    pub birthday: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub name: String,
    /// Print a single field: name, phones, emails or bday
    #[arg(long, value_name = "FIELD")]
    pub field: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long)]
    pub page_size: Option<usize>,
    /// Print only this page (1-based)
    #[arg(long)]
    pub page: Option<usize>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub name: String,
}

pub fn add_contact(ctx: &mut Context<'_>, args: AddArgs) -> Result<()> {
    let name = Name::new(&args.name)?;
    let phones = args
        .phone
        .iter()
        .map(|raw| Phone::new(raw))
        .collect::<Result<Vec<_>, _>>()?;
    let emails = args
        .email
        .iter()
        .map(|raw| Email::new(raw))
        .collect::<Result<Vec<_>, _>>()?;
    let birthday = args.birthday.as_deref().map(Birthday::new).transpose()?;

    let record = Record::new(name)
        .with_phones(phones)
        .with_emails(emails)
        .with_birthday(birthday);
    let book = ctx.store.book_mut();
    let existed = book.contains(record.name().as_str());
    let message = book.add_record(record);
    if existed {
        debug!(name = %args.name, "contact already present");
    } else {
        ctx.save()?;
    }
    print_message(&message);
    Ok(())
}

pub fn show_contact(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let record = require_record(ctx.store.book(), &args.name)?;

    if let Some(raw) = args.field {
        let key: RecordField = raw.parse()?;
        let value = record.field(key).unwrap_or_else(|| "None".to_string());
        if ctx.json {
            return print_json(&serde_json::json!({ key.as_str(): value }));
        }
        println!("{}", value);
        return Ok(());
    }

    let data = record_to_data(record);
    if ctx.json {
        return print_json(&data);
    }

    println!("name: {}", data.name);
    println!("phones: {}", join_or_dash(&data.phones));
    println!("emails: {}", join_or_dash(&data.emails));
    println!("birthday: {}", data.bday);
    Ok(())
}

pub fn list_contacts(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let book = ctx.store.book();
    if ctx.json {
        return print_json(&book.export());
    }
    if book.is_empty() {
        println!("no contacts");
        return Ok(());
    }

    let page_size = args.page_size.unwrap_or(ctx.config.page_size);
    let mut pages = book.paginate(page_size)?;
    match args.page {
        Some(0) => Err(crate::error::invalid_input("page numbers start at 1")),
        Some(number) => {
            let page = pages
                .nth(number - 1)
                .ok_or_else(|| not_found(format!("page {} is empty", number)))?;
            println!("{}", page);
            Ok(())
        }
        None => {
            for (index, page) in pages.enumerate() {
                println!("-- page {} --", index + 1);
                println!("{}", page);
            }
            Ok(())
        }
    }
}

pub fn delete_contact(ctx: &mut Context<'_>, args: DeleteArgs) -> Result<()> {
    let removed = ctx.store.book_mut().remove(&args.name);
    if removed.is_none() {
        return Err(not_found(format!("Contact {} is absent", args.name)));
    }
    ctx.save()?;
    if ctx.json {
        print_json(&serde_json::json!({ "deleted": args.name }))?;
    } else {
        println!("deleted {}", args.name);
    }
    Ok(())
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}
