//! Folio - a personal portfolio that lives in your terminal
//!
//! Scroll-driven single page with:
//! - Live GitHub project listing with filters
//! - Contact form delivered through EmailJS
//! - English and Portuguese translations
//! - Persisted language and theme preferences

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use folio_core::constants::ui::LOG_FILE_NAME;
use folio_core::contact::{ContactController, EmailJsClient, Field};
use folio_core::projects::{Category, GithubClient, ProjectListing, RepositorySource};
use folio_core::{paths, FolioConfig, Locale, Translator};

mod tui;

use tui::themes::THEME_REGISTRY;

/// Folio - terminal portfolio
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "A personal portfolio that lives in your terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Theme name (overrides the saved choice)
    #[arg(short, long)]
    theme: Option<String>,

    /// Interface language, e.g. `en` or `pt-BR`
    #[arg(short, long)]
    lang: Option<String>,

    /// Config file (defaults to ~/.folio/folio.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the project listing
    Projects {
        /// Only show projects in this language
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// List supported languages
    Locales,

    /// List available themes
    Themes,

    /// Send a message through the contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::{DisableFocusChange, DisableMouseCapture},
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(
        std::io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    );
}

/// Log to a file; stdout belongs to the interface
fn init_logging() -> Result<()> {
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    let log_file = match std::fs::File::create(log_dir.join(LOG_FILE_NAME)) {
        Ok(file) => file,
        Err(_) => std::fs::File::create(null_device).context("Failed to open null device")?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn print_projects(config: &FolioConfig, filter: Option<String>) -> Result<()> {
    let client = GithubClient::new(&config.github_user)?;
    let mut listing = ProjectListing::new();
    listing.apply(client.fetch().await);
    if listing.has_failed() {
        anyhow::bail!("Failed to load projects for {}", config.github_user);
    }
    if let Some(language) = filter {
        listing.set_filter(Category::Language(language));
    }

    let mut count = 0;
    for project in listing.visible() {
        count += 1;
        println!(
            "★ {:>4}  {}  [{}]",
            project.stars,
            project.name,
            project.language.as_deref().unwrap_or("-")
        );
        if let Some(description) = &project.description {
            println!("         {}", description);
        }
        println!("         {}", project.url);
    }
    println!();
    println!("{} project(s), filter: {}", count, listing.filter());
    Ok(())
}

async fn send_contact(
    config: &FolioConfig,
    locale: Locale,
    name: String,
    email: String,
    message: String,
) -> Result<()> {
    let translator = Translator::new(locale);
    let client = EmailJsClient::new(config.emailjs.clone())
        .with_context(|| translator.t("contact.form.notConfigured"))?;

    let mut contact = ContactController::new(translator.t("contact.form.error"));
    contact.edit(Field::Name, name);
    contact.edit(Field::Email, email);
    contact.edit(Field::Message, message);

    if contact.submit_with(&client).await? {
        println!("✓ {}", translator.t("contact.form.success"));
        Ok(())
    } else {
        anyhow::bail!(translator.t("contact.form.error"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    init_logging()?;

    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(paths::config_file);
    let config = FolioConfig::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    match cli.command {
        Some(Commands::Projects { filter }) => print_projects(&config, filter).await?,
        Some(Commands::Locales) => {
            println!("Supported languages:");
            for locale in Locale::ALL {
                println!("  {} {} ({})", locale.flag(), locale.label(), locale.code());
            }
        }
        Some(Commands::Themes) => {
            println!("Available themes ({}):", THEME_REGISTRY.count());
            for (name, theme) in THEME_REGISTRY.list() {
                println!("  {} - {}", name, theme.display_name);
            }
        }
        Some(Commands::Contact {
            name,
            email,
            message,
        }) => {
            let locale = folio_core::i18n::detect(
                cli.lang.as_deref(),
                config.default_locale.as_deref(),
                &folio_core::i18n::system_locale_tags(),
            );
            send_contact(&config, locale, name, email, message).await?;
        }
        None => {
            let mut app = tui::App::new(tui::AppOptions {
                config,
                theme: cli.theme,
                lang: cli.lang,
            });
            app.run().await?;
        }
    }

    Ok(())
}
