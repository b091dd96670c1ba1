use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use leadboard::commands::{board, config, insight, shell};
use leadboard::config::{config_path, Config};
use leadboard::logging::init_logging;
use leadboard::models::SortKey;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "leadboard")]
#[command(about = "Sales pipeline board with drag-and-drop lead reclassification", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config.toml (defaults to $LEADBOARD_CONFIG or the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive board shell (default)
    Shell,

    /// Print the board once and exit
    Board {
        /// Sort key (date, priority, value)
        #[arg(short, long)]
        sort: Option<SortKey>,
    },

    /// Ask the assistant for sales advice
    Insight {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        prompt: Vec<String>,
    },

    /// Draft a follow-up email for a lead
    Draft {
        /// Lead name used in the greeting
        lead_name: String,

        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        context: Vec<String>,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn load_config(explicit: Option<&std::path::Path>) -> Result<Config> {
    Config::load_or_default(config_path(explicit).as_deref())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let explicit = cli.config.as_deref();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => shell::run(&load_config(explicit)?),
        Commands::Board { sort } => board::show(&load_config(explicit)?, sort),
        Commands::Insight { prompt } => insight::ask(&load_config(explicit)?, prompt),
        Commands::Draft { lead_name, context } => {
            insight::draft(&load_config(explicit)?, lead_name, context)
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => config::show(explicit),
            ConfigCommands::Init { force } => config::init(explicit, force),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "leadboard", &mut std::io::stdout());
            Ok(())
        }
    }
}
