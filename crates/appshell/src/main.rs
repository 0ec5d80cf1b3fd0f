//! AppShell headless entry point.
//!
//! Drives the configuration store and theme library from the command line,
//! the same way the GUI shell does from its menus and dialogs.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ resolve user          -- --user, or the OS login name, or DEFAULT
//!  └─ ConfigStore::open()   -- loads or creates the YAML document
//!  └─ ThemeLibrary::open()  -- reads resources.toml if present
//!  └─ run(command)          -- mutating commands save()
//!  └─ clear_scratch()       -- generated icons are removed on exit
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use appshell::application::about::AppMetadata;
use appshell::application::preferences::PreferenceChanges;
use appshell::application::recent_menu::{self, RecentMenu};
use appshell::application::window_geometry::initial_geometry;
use appshell::infrastructure::identity::{resolve_user, OsLoginResolver};
use appshell::infrastructure::storage::config_store::ConfigStore;
use appshell::infrastructure::theming::ThemeLibrary;
use appshell_core::{FieldName, ScreenSize, UserId};

#[derive(Debug, Parser)]
#[command(name = "appshell", version, about = "Per-user settings and themes for AppShell")]
struct Cli {
    /// Configuration document (default: platform config directory).
    #[arg(long, env = "APPSHELL_CONFIG")]
    config: Option<PathBuf>,

    /// Resource root holding styles/ and icons/.
    #[arg(long, env = "APPSHELL_RESOURCES", default_value = "resources")]
    resources: PathBuf,

    /// Settings section to use instead of the OS login name.
    #[arg(long, env = "APPSHELL_USER")]
    user: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the stylesheet for the configured or the given theme.
    Stylesheet {
        #[arg(long)]
        theme: Option<String>,
    },
    /// List the available themes.
    Themes,
    /// Print one settings field.
    Get { field: String },
    /// Set one settings field and save.
    Set { field: String, value: String },
    /// Apply several preferences at once and save.
    Prefs {
        #[arg(long)]
        theme: Option<String>,
        #[arg(long)]
        restore: Option<bool>,
        #[arg(long)]
        recents: Option<u32>,
    },
    /// Manage the recent-files list.
    Recent {
        #[command(subcommand)]
        action: RecentAction,
    },
    /// Print where the main window would open.
    Geometry {
        #[arg(long, default_value = "1920x1080")]
        screen: ScreenSize,
    },
    /// Print the whole configuration document.
    Dump,
    /// Print application metadata.
    About,
}

#[derive(Debug, Subcommand)]
enum RecentAction {
    /// Record that a file was opened.
    Add { path: String },
    /// List recent files, newest first.
    List,
    /// Empty the list.
    Clear,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let user = match cli.user {
        Some(name) => UserId::new(name),
        None => resolve_user(&OsLoginResolver),
    };
    let mut store = match cli.config {
        Some(path) => ConfigStore::open(&path, user)
            .with_context(|| format!("opening configuration {}", path.display()))?,
        None => ConfigStore::open_default(user)
            .context("opening configuration in the platform config directory")?,
    };
    let themes = ThemeLibrary::open(&cli.resources)
        .with_context(|| format!("opening resources {}", cli.resources.display()))?;

    let result = run(cli.command, &mut store, &themes);

    if let Err(e) = themes.clear_scratch() {
        warn!("failed to clean up generated icons: {e}");
    }
    result
}

fn run(command: Command, store: &mut ConfigStore, themes: &ThemeLibrary) -> anyhow::Result<()> {
    match command {
        Command::Stylesheet { theme } => {
            let css = store.resolve_stylesheet(themes, theme.as_deref())?;
            print!("{css}");
        }
        Command::Themes => {
            for theme in themes.list_themes()? {
                let marker = if theme.filename == store.theme_filename() {
                    '*'
                } else {
                    ' '
                };
                println!("{marker} {:<24} {}", theme.filename, theme.label);
            }
        }
        Command::Get { field } => {
            println!("{}", store.get_field(&field)?);
        }
        Command::Set { field, value } => {
            let name: FieldName = field.parse()?;
            let value = name.parse_value(&value)?;
            store.set_field(name.as_str(), value)?;
            store.save()?;
        }
        Command::Prefs {
            theme,
            restore,
            recents,
        } => {
            let mut changes = PreferenceChanges::new();
            if let Some(theme) = theme {
                changes.set_theme_filename(theme);
            }
            if let Some(restore) = restore {
                changes.set_window_restore(restore);
            }
            if let Some(count) = recents {
                changes.set_num_recents_to_show(count);
            }
            if changes.apply(store)? {
                info!("theme is now {}", store.theme_filename());
            }
        }
        Command::Recent { action } => match action {
            RecentAction::Add { path } => {
                recent_menu::open_file(store, &path);
                store.save()?;
            }
            RecentAction::List => {
                for entry in RecentMenu::for_store(&*store).entries() {
                    println!("{}\t{}", entry.label, entry.tooltip);
                }
            }
            RecentAction::Clear => {
                recent_menu::clear_recent_files(store);
                store.save()?;
            }
        },
        Command::Geometry { screen } => {
            println!("{}", initial_geometry(&*store, screen));
        }
        Command::Dump => {
            print!("{store}");
        }
        Command::About => {
            let meta = AppMetadata::current();
            println!("{meta}");
            println!("{}", meta.description);
        }
    }
    Ok(())
}
