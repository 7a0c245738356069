use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use teambuild::commands::{
    run_definition_list, run_definition_show, run_queue, run_show, DefinitionListOptions,
    QueueOptions,
};
use teambuild::core::load_config;
use teambuild::Result;

/// TeamBuild - queue and inspect builds on a hosted Team Services instance
#[derive(Parser)]
#[command(name = "teambuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The URI for the account (https://<account>.visualstudio.com) or
    /// project collection
    #[arg(long, global = true)]
    instance: Option<String>,

    /// Name or ID of the team project
    #[arg(long, global = true)]
    project: Option<String>,

    /// Personal access token (or set TEAMBUILD_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    /// When 'on', unsupplied values are detected from the current working
    /// directory's repo
    #[arg(long, global = true, value_enum)]
    detect: Option<Detect>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Detect {
    On,
    Off,
}

#[derive(Subcommand)]
enum Commands {
    /// Queue a new build
    Queue {
        /// The ID of the build definition; required if --name is not supplied
        #[arg(long = "id")]
        definition_id: Option<i32>,

        /// The name of the build definition; ignored if --id is supplied
        #[arg(long)]
        name: Option<String>,

        /// The source branch to build
        #[arg(long)]
        source_branch: Option<String>,

        /// Open the build in the default web browser
        #[arg(long)]
        open: bool,

        /// Print the raw record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a build
    Show {
        /// The ID of the build
        build_id: i32,

        /// Open the build in the default web browser
        #[arg(long)]
        open: bool,

        /// Print the raw record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect build definitions
    Definition {
        #[command(subcommand)]
        command: DefinitionCommands,
    },
}

#[derive(Subcommand)]
enum DefinitionCommands {
    /// List build definitions
    List {
        /// Filter to definitions with this name; append * to match by prefix
        #[arg(long)]
        name: Option<String>,

        /// The maximum number of definitions to return
        #[arg(long)]
        top: Option<u32>,

        /// Name or ID of the repository to filter by
        #[arg(long)]
        repository: Option<String>,

        /// Print the raw records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details of a build definition
    Show {
        /// The ID of the build definition; required if --name is not supplied
        #[arg(long = "id")]
        definition_id: Option<i32>,

        /// The name of the build definition; ignored if --id is supplied
        #[arg(long)]
        name: Option<String>,

        /// Open the definition in the default web browser
        #[arg(long)]
        open: bool,

        /// Print the raw record as JSON
        #[arg(long)]
        json: bool,
    },
}

async fn run(cli: Cli) -> Result<()> {
    let detect = cli.detect.map(|d| matches!(d, Detect::On));
    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd, cli.instance, cli.project, cli.token, detect)?;

    match cli.command {
        Commands::Queue {
            definition_id,
            name,
            source_branch,
            open,
            json,
        } => {
            let options = QueueOptions {
                definition_id,
                name,
                source_branch,
                open_browser: open,
            };
            run_queue(&config, options, json).await
        }

        Commands::Show {
            build_id,
            open,
            json,
        } => run_show(&config, build_id, open, json).await,

        Commands::Definition { command } => match command {
            DefinitionCommands::List {
                name,
                top,
                repository,
                json,
            } => {
                let options = DefinitionListOptions {
                    name,
                    top,
                    repository,
                };
                run_definition_list(&config, options, json).await
            }

            DefinitionCommands::Show {
                definition_id,
                name,
                open,
                json,
            } => run_definition_show(&config, definition_id, name, open, json).await,
        },
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
