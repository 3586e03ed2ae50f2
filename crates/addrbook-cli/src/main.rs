mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{backup, birthdays, contacts, emails, phones, transfer, Context};
use crate::error::{exit_code_for, report_error};
use addrbook_config as config;
use addrbook_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "addrbook", version, about = "addrbook CLI")]
struct Cli {
    #[arg(long, global = true)]
    data_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Add(contacts::AddArgs),
    Show(contacts::ShowArgs),
    List(contacts::ListArgs),
    Delete(contacts::DeleteArgs),
    #[command(subcommand)]
    Phone(phones::PhoneCommand),
    #[command(subcommand)]
    Email(emails::EmailCommand),
    /// Days left to a contact's next birthday
    Birthday(birthdays::BirthdayArgs),
    /// Birthdays falling in a week-long window starting N days from today
    Birthdays(birthdays::BirthdaysArgs),
    Export(transfer::ExportArgs),
    Import(transfer::ImportArgs),
    Backup(backup::BackupArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        data_path,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let data_path = paths::resolve_data_path(data_path.or_else(|| app_config.data_path.clone()))
        .with_context(|| "resolve contacts path")?;
    debug!(path = %data_path.display(), "contacts path resolved");

    let mut store = Store::open(&data_path, app_config.import_mode())
        .with_context(|| format!("open contacts {}", data_path.display()))?;

    let mut ctx = Context {
        store: &mut store,
        json,
        config: &app_config,
    };

    match command {
        Command::Add(args) => contacts::add_contact(&mut ctx, args),
        Command::Show(args) => contacts::show_contact(&ctx, args),
        Command::List(args) => contacts::list_contacts(&ctx, args),
        Command::Delete(args) => contacts::delete_contact(&mut ctx, args),
        Command::Phone(cmd) => match cmd {
            phones::PhoneCommand::Add(args) => phones::add_phone(&mut ctx, args),
            phones::PhoneCommand::Rm(args) => phones::remove_phone(&mut ctx, args),
            phones::PhoneCommand::Edit(args) => phones::edit_phone(&mut ctx, args),
        },
        Command::Email(cmd) => match cmd {
            emails::EmailCommand::Add(args) => emails::add_email(&mut ctx, args),
            emails::EmailCommand::Rm(args) => emails::remove_email(&mut ctx, args),
            emails::EmailCommand::Edit(args) => emails::edit_email(&mut ctx, args),
        },
        Command::Birthday(args) => birthdays::days_to_birthday(&ctx, args),
        Command::Birthdays(args) => birthdays::birthdays_within(&ctx, args),
        Command::Export(args) => transfer::export(&ctx, args),
        Command::Import(args) => transfer::import(&mut ctx, args),
        Command::Backup(args) => backup::backup(&ctx, args),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
