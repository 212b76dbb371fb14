use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::Context;

#[derive(Parser)]
#[command(name = "oyasify")]
#[command(about = "Oyasify - creator community with AI-assisted chat", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the initial user directory, friends and chats
    Seed,
    /// Register a new account and log in
    Register {
        name: String,
        email: String,
        password: String,
    },
    /// Log in with e-mail and password
    Login { email: String, password: String },
    /// Log out
    Logout,
    /// Show the logged-in account
    Whoami,
    /// Friend list and friend requests
    Friends {
        #[command(subcommand)]
        action: commands::friends::FriendsAction,
    },
    /// Friend chats (mention @oyasifyai to pull the AI in, /parar to stop)
    Chat {
        #[command(subcommand)]
        action: commands::chat::ChatAction,
    },
    /// Talk to the Oyasify AI assistant (one-shot)
    Assistant {
        /// Message text; use "/gerar <idea>" to request an image
        text: String,
        /// Image files to attach
        #[arg(long)]
        image: Vec<std::path::PathBuf>,
    },
    /// AI studio generators
    Studio {
        #[command(subcommand)]
        action: commands::studio::StudioAction,
    },
    /// Supporter requests and approval (owner)
    Supporter {
        #[command(subcommand)]
        action: commands::supporter::SupporterAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging with default filter if RUST_LOG is not set
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let ctx = Context::open()?;

    match cli.command {
        Commands::Seed => commands::account::seed(&ctx).await?,
        Commands::Register {
            name,
            email,
            password,
        } => commands::account::register(&ctx, &name, &email, &password).await?,
        Commands::Login { email, password } => {
            commands::account::login(&ctx, &email, &password).await?
        }
        Commands::Logout => commands::account::logout(&ctx).await?,
        Commands::Whoami => commands::account::whoami(&ctx).await?,
        Commands::Friends { action } => commands::friends::run(&ctx, action).await?,
        Commands::Chat { action } => commands::chat::run(&ctx, action).await?,
        Commands::Assistant { text, image } => {
            commands::assistant::run(&ctx, &text, &image).await?
        }
        Commands::Studio { action } => commands::studio::run(&ctx, action).await?,
        Commands::Supporter { action } => commands::supporter::run(&ctx, action).await?,
    }

    Ok(())
}
