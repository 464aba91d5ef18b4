use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use spdlog::{info, warn, Level, LevelFilter};

use postsmith::config::Config;
use postsmith::logger::{configure_logger, set_level_filter};
use postsmith::report::RunReport;

use crate::config::open_config;
use crate::generate::generate_cmd;
use crate::patch::patch_cmd;
use crate::sample_config::sample_config_cmd;

mod config;
mod generate;
mod patch;
mod sample_config;

const CFG_FILE_NAME: &str = "postsmith.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path. If empty, postsmith.toml is looked up next to the executable,
    /// in the current directory and in the user config directory
    #[arg(short, long, global = true)]
    config_path: Option<PathBuf>,

    /// Posts directory, overriding the one in the configuration
    #[arg(short, long, global = true)]
    posts_dir: Option<PathBuf>,

    /// Print the run report as JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    /// Log debug messages
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the catalog posts that do not exist yet
    Generate(GenerateArgs),
    /// Pad existing posts with filler copy, hero image and meta description
    Patch(PatchArgs),
    /// Write the sample configuration
    SampleConfig(SampleConfigArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Catalog file to use instead of the built-in one
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PatchArgs {
    /// Skip files that already contain the filler block
    #[arg(long)]
    skip_patched: bool,
}

#[derive(Parser, Debug)]
struct SampleConfigArgs {
    /// Output file. If empty, the sample is written to stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn apply_verbosity(verbose: bool, json: bool) {
    if verbose {
        set_level_filter(LevelFilter::All);
    } else if json {
        // Keep stdout for the report
        set_level_filter(LevelFilter::MoreSevereEqual(Level::Warn));
    }
}

fn print_report(report: &RunReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        info!("{}", report);
    }
    Ok(())
}

fn prepare_config(config_path: Option<PathBuf>, posts_dir: Option<PathBuf>, verbose: bool, json: bool) -> Result<Config> {
    let mut config = open_config(config_path)?;
    if let Some(posts_dir) = posts_dir {
        config.paths.posts_dir = posts_dir;
    }

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }
    // The configured logger comes with its own level
    apply_verbosity(verbose, json);

    Ok(config)
}

fn main() -> Result<()> {
    let Args { config_path, posts_dir, json, verbose, command } = Args::parse();
    apply_verbosity(verbose, json);

    let report = match command {
        Command::SampleConfig(args) => return sample_config_cmd(args),
        Command::Generate(args) => {
            let config = prepare_config(config_path, posts_dir, verbose, json)?;
            generate_cmd(&config, args)?
        }
        Command::Patch(args) => {
            let config = prepare_config(config_path, posts_dir, verbose, json)?;
            patch_cmd(&config, args)?
        }
    };

    print_report(&report, json)
}
