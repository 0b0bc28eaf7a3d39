use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use contact_book::cli::{handle_contact_command, ContactCommands};
use contact_book::config::{paths::ContactPaths, settings::Settings};
use contact_book::menu::{run_menu, ConsolePrompter, MenuOptions};
use contact_book::models::RecordLayout;
use contact_book::services::ContactService;
use contact_book::storage::Storage;

#[derive(Parser)]
#[command(
    name = "contacts",
    author = "Kaylee Beyene",
    version,
    about = "Personal contact book for the terminal",
    long_about = "A personal contact book kept in a plain CSV file. Manage it \
                  from the numbered menu, the full-screen form, or one-shot \
                  subcommands."
)]
struct Cli {
    /// Contacts file to read and write
    #[arg(long, global = true, env = "CONTACT_BOOK_FILE")]
    file: Option<PathBuf>,

    /// Field layout for this run (overrides the settings file)
    #[arg(long, global = true, value_enum)]
    layout: Option<RecordLayout>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the numbered text menu (the default)
    Menu,

    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    #[command(flatten)]
    Contact(ContactCommands),

    /// Show current configuration and paths
    Config {
        /// Write the effective settings to the config file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut paths = ContactPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(layout) = cli.layout {
        settings.layout = layout;
    }
    if let Some(file) = cli.file.or_else(|| settings.contacts_file.clone()) {
        paths = paths.with_contacts_file(file);
    }

    let mut storage = Storage::new(paths.clone(), &settings)?;
    storage.load_all()?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let mut service = ContactService::new(&mut storage, &settings);
            let mut prompter = ConsolePrompter::stdio();
            run_menu(
                &mut service,
                &mut prompter,
                MenuOptions {
                    birthday_reminder: settings.birthday_reminder,
                    today: Local::now().date_naive(),
                },
            );
        }
        Commands::Tui => {
            contact_book::tui::run_tui(&mut storage, &settings)?;
        }
        Commands::Contact(cmd) => {
            handle_contact_command(&mut storage, &settings, cmd)?;
        }
        Commands::Config { save } => {
            println!("Contact Book Configuration");
            println!("==========================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Contacts file:    {}", paths.contacts_file().display());
            println!();
            println!("Settings:");
            println!("  Layout:            {}", settings.layout);
            println!("  List order:        {}", settings.effective_list_order());
            println!("  Birthday reminder: {}", settings.birthday_reminder);
            println!("  Audit log enabled: {}", settings.audit_enabled);

            if save {
                settings.save(&paths)?;
                println!();
                println!("Settings written to {}", paths.settings_file().display());
            }
        }
    }

    Ok(())
}
