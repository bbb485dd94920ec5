use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use secrecy::SecretString;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use campus_clubs::adapters::{FileDocumentStore, TracingEventPublisher};
use campus_clubs::application::handlers::account::{
    ListLoginProfilesHandler, LoginCommand, LoginHandler,
};
use campus_clubs::application::handlers::admin::{ExportDatasetHandler, ExportDatasetQuery};
use campus_clubs::application::handlers::dashboard::GetAdminOverviewHandler;
use campus_clubs::application::DomainStore;
use campus_clubs::config::{AppConfig, LoggingConfig};
use campus_clubs::domain::foundation::{CommandMetadata, UserId};
use campus_clubs::ports::EventPublisher;

/// Campus Clubs - local administration for the club dataset
#[derive(Parser)]
#[command(name = "campus-clubs")]
#[command(about = "Campus Clubs - local administration for the club dataset")]
#[command(version)]
struct Cli {
    /// Data file (overrides CAMPUS_CLUBS__STORAGE__DATA_PATH)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Act as this user id
    #[arg(long = "as", global = true, value_name = "USER_ID")]
    actor: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the data file, seeding it on first run
    Init,
    /// Discard the data file and reseed it
    Reset,
    /// Write the dataset export into a directory
    Export {
        /// Target directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
    /// Check a PIN sign-in
    Login {
        email: String,
        /// Falls back to CAMPUS_CLUBS_PIN
        #[arg(long, env = "CAMPUS_CLUBS_PIN", hide_env_values = true)]
        pin: String,
    },
    /// Print the login profiles, or the admin overview when acting as an admin
    Summary,
}

fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt().with_env_filter(logging.env_filter());
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn metadata_for(actor: Option<&str>) -> Result<CommandMetadata> {
    match actor {
        Some(id) => {
            let user_id = UserId::new(id).context("--as must name a user id")?;
            Ok(CommandMetadata::new(user_id))
        }
        None => Ok(CommandMetadata::anonymous()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(path) = cli.data.clone() {
        config.storage.data_path = path;
    }
    config.validate().context("Invalid configuration")?;
    init_tracing(&config.logging);

    info!(
        environment = ?config.environment,
        data_path = %config.storage.data_path.display(),
        "Campus clubs starting"
    );

    let gateway = Arc::new(FileDocumentStore::new(config.storage.data_path.clone()));
    let store = Arc::new(DomainStore::new(gateway));
    let publisher: Arc<dyn EventPublisher> = Arc::new(TracingEventPublisher::new());
    let metadata = metadata_for(cli.actor.as_deref())?;

    match cli.command {
        Commands::Init => {
            let doc = store.snapshot().await?;
            println!(
                "{} users, {} clubs, {} events in {}",
                doc.users.len(),
                doc.clubs.len(),
                doc.events.len(),
                config.storage.data_path.display()
            );
        }
        Commands::Reset => {
            let doc = store.reset().await?;
            println!("Reset {} ({} users)", config.storage.data_path.display(), doc.users.len());
        }
        Commands::Export { out } => {
            let query = ExportDatasetQuery {
                on: Local::now().date_naive(),
            };
            let file = ExportDatasetHandler::new(store.clone())
                .handle(query, metadata)
                .await?;
            let target = out.join(&file.file_name);
            tokio::fs::write(&target, file.contents)
                .await
                .with_context(|| format!("Failed to write {}", target.display()))?;
            println!("Wrote {}", target.display());
        }
        Commands::Login { email, pin } => {
            let cmd = LoginCommand {
                email,
                pin: SecretString::new(pin),
            };
            let result = LoginHandler::new(store.clone(), publisher)
                .handle(cmd, metadata)
                .await?;
            println!("Signed in as {} ({})", result.user.name, result.user.role);
        }
        Commands::Summary => {
            let rendered = if metadata.user_id.is_some() {
                let overview = GetAdminOverviewHandler::new(store.clone())
                    .handle(metadata)
                    .await?;
                serde_json::to_string_pretty(&overview)?
            } else {
                let profiles = ListLoginProfilesHandler::new(store.clone())
                    .handle(metadata)
                    .await?;
                serde_json::to_string_pretty(&profiles)?
            };
            println!("{}", rendered);
        }
    }

    Ok(())
}
