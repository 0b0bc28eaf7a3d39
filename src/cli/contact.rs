//! Contact CLI commands
//!
//! Non-interactive versions of the menu operations. Each mutating command
//! saves the contacts file before returning.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_birthday_reminder, format_contact_details, format_contact_table};
use crate::error::{ContactError, ContactResult};
use crate::export::ExportFormat;
use crate::models::{Contact, ContactPatch, Field, MonthDay, NewContact};
use crate::services::{ContactService, ContactView};
use crate::storage::Storage;

/// Contact subcommands
#[derive(Subcommand, Debug)]
pub enum ContactCommands {
    /// List contacts with their positions
    #[command(alias = "ls")]
    List {
        /// Only show contacts matching this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Add a contact
    Add {
        /// Contact name
        #[arg(short, long)]
        name: String,
        /// Phone number (10 digits unless using the basic layout)
        #[arg(short, long)]
        phone: String,
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        group: Option<String>,
        /// YYYY-MM-DD, DD-MM-YYYY or MM-DD
        #[arg(short, long)]
        birthday: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Search contacts
    Search {
        /// Text to look for (case-insensitive)
        query: String,
    },
    /// Update a contact by position
    Update {
        /// 1-based position in the list (or in the search results)
        position: usize,
        /// Resolve the position against these search results
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        group: Option<String>,
        #[arg(long)]
        birthday: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a contact by position
    #[command(alias = "rm")]
    Delete {
        /// 1-based position in the list (or in the search results)
        position: usize,
        /// Resolve the position against these search results
        #[arg(short, long)]
        search: Option<String>,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Append contacts from another CSV file
    Import {
        /// Path to CSV file
        #[arg(value_name = "FILE")]
        source: PathBuf,
    },
    /// Write all contacts to a file
    Export {
        /// Output file path
        output: PathBuf,
        /// Export format (defaults to the file extension)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
    },
    /// Show contacts whose birthday is today
    Birthdays {
        /// Check another day instead (MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Handle a contact command
pub fn handle_contact_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: ContactCommands,
) -> ContactResult<()> {
    let mut service = ContactService::new(storage, settings);
    let layout = service.layout();

    match cmd {
        ContactCommands::List { search } => {
            let contacts = displayed(&service, search.as_deref());
            println!("{}", format_contact_table(&contacts, layout));
        }

        ContactCommands::Add {
            name,
            phone,
            email,
            group,
            birthday,
            notes,
        } => {
            let mut new_contact = NewContact::new(name, phone);
            for (field, value) in [
                (Field::Email, email),
                (Field::Group, group),
                (Field::Birthday, birthday),
                (Field::Notes, notes),
            ] {
                if let Some(value) = value {
                    new_contact = new_contact.with(field, value);
                }
            }

            let contact = service.add(new_contact)?;
            service.save()?;
            println!("Added contact: {}", contact.name);
        }

        ContactCommands::Search { query } => {
            let results = service.search(&query);
            println!("{}", format_contact_table(&results, layout));
        }

        ContactCommands::Update {
            position,
            search,
            name,
            phone,
            email,
            group,
            birthday,
            notes,
        } => {
            let patch = ContactPatch::from_options([
                (Field::Name, name),
                (Field::Phone, phone),
                (Field::Email, email),
                (Field::Group, group),
                (Field::Birthday, birthday),
                (Field::Notes, notes),
            ]);
            if patch.is_empty() {
                println!("No changes specified. Use --name, --phone, --email and so on.");
                return Ok(());
            }

            let view = ContactView::from_contacts(&displayed(&service, search.as_deref()));
            let id = view.resolve(position)?;
            let updated = service.update(id, &patch)?;
            service.save()?;

            println!("Updated contact: {}", updated.name);
            print!("{}", format_contact_details(&updated, layout));
        }

        ContactCommands::Delete {
            position,
            search,
            force,
        } => {
            let view = ContactView::from_contacts(&displayed(&service, search.as_deref()));
            let id = view.resolve(position)?;

            if !force {
                if let Some(contact) = service.get(id) {
                    println!("About to delete contact:");
                    print!("{}", format_contact_details(contact, layout));
                    println!();
                    println!("Use --force to confirm deletion");
                }
                return Ok(());
            }

            let removed = service.delete(id)?;
            service.save()?;
            println!("Deleted contact: {}", removed.name);
        }

        ContactCommands::Import { source } => {
            let count = service.import(&source)?;
            service.save()?;
            println!("Imported {} contacts from {}", count, source.display());
        }

        ContactCommands::Export { output, format } => {
            let format = format.unwrap_or_else(|| ExportFormat::from_path(&output));
            let count = service.export(&output, format)?;
            println!("Exported {} contacts to {}", count, output.display());
        }

        ContactCommands::Birthdays { date } => {
            if !layout.supports_birthdays() {
                return Err(ContactError::Config(format!(
                    "Birthdays are not available with the {} layout",
                    layout
                )));
            }

            let day = match date {
                Some(text) => reference_date(&text)?,
                None => Local::now().date_naive(),
            };
            let matches = service.birthdays_on(day);
            match format_birthday_reminder(&matches) {
                Some(reminder) => println!("{}", reminder),
                None => println!("No birthdays on {}.", MonthDay::from_date(day)),
            }
        }
    }

    if let Some(warning) = service.take_audit_warning() {
        eprintln!("Warning: audit log not written: {}", warning);
    }

    Ok(())
}

/// The list a position refers to: search results, or the whole list
fn displayed(service: &ContactService<'_>, search: Option<&str>) -> Vec<Contact> {
    match search {
        Some(query) => service.search(query),
        None => service.list(),
    }
}

/// A date in a leap year carrying the given MM-DD
fn reference_date(text: &str) -> ContactResult<NaiveDate> {
    MonthDay::parse(text)
        .and_then(|md| NaiveDate::from_ymd_opt(2000, md.month, md.day))
        .ok_or_else(|| ContactError::InvalidInput(format!("'{}' is not a valid date", text)))
}
