//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands;
use methodprune::output::OutputMode;

/// methodprune - Remove named methods from a source file
#[derive(Parser, Debug)]
#[command(
    name = "methodprune",
    version,
    about = "Remove named methods from a source file for manual review",
    long_about = "Remove named methods, with their doc comments, from a source file.\n\n\
                  Methods are found by their `private`/`public` declaration and measured\n\
                  by brace balance. The result goes to a new file; the input is never\n\
                  modified. Review the output, then move it over the original yourself."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Project config file (default: nearest .methodprune.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Remove methods and write the result to a new file
    Prune {
        /// Source file to clean
        input: PathBuf,

        /// Output file (default: <INPUT>.cleaned)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report what would be removed without writing anything
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Print the line spans of methods without removing anything
    Locate {
        /// Source file to search
        input: PathBuf,

        /// Method names to locate
        names: Vec<String>,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// List available presets, or show one in detail
    Presets {
        /// Preset to show
        name: Option<String>,
    },
}

/// Method selection and locator settings shared by `prune` and `locate`
#[derive(Args, Debug, Default)]
pub struct SelectionArgs {
    /// Use a named preset (method list plus settings)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Method to remove (repeatable)
    #[arg(short, long = "method", value_name = "NAME")]
    pub methods: Vec<String>,

    /// File with one method name per line (`#` starts a comment)
    #[arg(long, value_name = "PATH")]
    pub methods_file: Option<PathBuf>,

    /// Doc-comment lookback: bounded, doc-block
    #[arg(long)]
    pub lookback: Option<String>,

    /// Maximum lines inspected above a declaration
    #[arg(long, value_name = "N")]
    pub lookback_depth: Option<usize>,

    /// Accepted access modifier (repeatable, replaces the configured list)
    #[arg(long = "modifier", value_name = "KEYWORD")]
    pub modifiers: Vec<String>,

    /// Also remove one blank line after each removed method
    #[arg(long, conflicts_with = "keep_blank")]
    pub trim_blank: bool,

    /// Never remove blank lines after removed methods
    #[arg(long)]
    pub keep_blank: bool,

    /// Exit with status 0 even when some methods are not found
    #[arg(long)]
    pub allow_missing: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config = cli.config.as_deref();

    match cli.command {
        Command::Prune {
            input,
            output,
            dry_run,
            selection,
        } => commands::prune(&input, output.as_deref(), dry_run, &selection, config, output_mode),
        Command::Locate {
            input,
            names,
            selection,
        } => commands::locate(&input, &names, &selection, config, output_mode),
        Command::Presets { name } => commands::presets(name.as_deref(), config, output_mode),
    }
}
