//! CLI module for rombrowser
//!
//! One-shot commands each run against a fresh `Session`. The interactive
//! shell keeps a single session alive, so paging and filtering reuse what was
//! already fetched.

mod commands;
mod output;
mod shell;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::graphql::{GraphQlClient, GraphQlTransport};
use crate::query;
use crate::state::Store;

use output::OutputFormat;

/// rombrowser - browse a ROM collection server
#[derive(Parser, Debug)]
#[command(name = "rombrowser")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output formatting options
#[derive(Parser, Debug, Clone)]
pub struct OutputOptions {
    /// Output in JSON format (for machine parsing)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Items per page (overrides the configured page size)
    #[arg(long, global = true)]
    pub page_size: Option<usize>,
}

impl OutputOptions {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List systems
    Systems(commands::systems::SystemsArgs),

    /// List and filter the games of a system
    Games(commands::games::GamesArgs),

    /// List the ROMs of a game
    Roms(commands::roms::RomsArgs),

    /// Show size totals of a system
    Sizes(commands::sizes::SizesArgs),

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },

    /// Start an interactive shell
    Shell,
}

/// Client and state shared by the commands of one run
pub struct Session {
    pub client: Box<dyn GraphQlTransport>,
    pub store: Store,
    /// System whose games are loaded
    pub system_id: Option<i64>,
    /// Game whose roms are loaded
    pub game_id: Option<i64>,
}

impl Session {
    pub fn new(config: &Config) -> Result<Self> {
        let client = GraphQlClient::new(config.server.endpoint()?)?;
        tracing::debug!("Using GraphQL endpoint {}", client.endpoint());

        let session = Self::with_transport(Box::new(client), Store::from_config(&config.browse));
        session.store.log_view_changes();
        Ok(session)
    }

    pub fn with_transport(client: Box<dyn GraphQlTransport>, store: Store) -> Self {
        Self {
            client,
            store,
            system_id: None,
            game_id: None,
        }
    }
}

/// Run the CLI with parsed arguments
pub async fn run(cli: Cli) -> Result<()> {
    if let Commands::Config { command } = cli.command {
        return commands::config::run(command, cli.output.format(), cli.output.quiet).await;
    }

    let config = Config::load()?;
    let mut session = Session::new(&config)?;

    if matches!(cli.command, Commands::Shell) {
        return shell::run(session).await;
    }

    dispatch(&mut session, cli).await
}

/// Run one parsed command against `session`
async fn dispatch(session: &mut Session, cli: Cli) -> Result<()> {
    let format = cli.output.format();
    let quiet = cli.output.quiet;

    if let Some(page_size) = cli.output.page_size {
        query::set_page_size(&session.store, page_size);
    }

    match cli.command {
        Commands::Systems(args) => commands::systems::run(args, session, format, quiet).await,
        Commands::Games(args) => commands::games::run(args, session, format, quiet).await,
        Commands::Roms(args) => commands::roms::run(args, session, format, quiet).await,
        Commands::Sizes(args) => commands::sizes::run(args, session, format, quiet).await,
        Commands::Config { command } => commands::config::run(command, format, quiet).await,
        Commands::Shell => {
            println!("Already in shell mode.");
            Ok(())
        }
    }
}
