use std::path::PathBuf;

use clap::{Parser, Subcommand};
use depls_build_util::ci::GitRevision;
use depls_build_util::commands;
use depls_build_util::logging::{LogFormat, init_logging};

#[derive(Parser)]
#[command(name = "depls-build-util")]
#[command(version, about = "Build utilities for Live Simulator: 2")]
struct Cli {
    /// Format of diagnostic logs written to stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the Windows resource script from main.lua
    CreateRc {
        main_lua: PathBuf,
        output: PathBuf,
        /// JSON file overriding the static resource metadata
        #[arg(long)]
        metadata: Option<PathBuf>,
    },
    /// Write the version from main.lua into gradle.properties
    ReplaceGradleProperties {
        main_lua: PathBuf,
        gradle_properties: PathBuf,
        /// Output path; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Append the current commit hash to $GITHUB_OUTPUT
    GhaCommitHash,
    /// Print the version record extracted from main.lua
    ExtractVersion {
        main_lua: PathBuf,
        /// Only scan the first N characters
        #[arg(long)]
        limit: Option<usize>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.log_format);
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::CreateRc {
            main_lua,
            output,
            metadata,
        } => commands::create_rc(&main_lua, &output, metadata.as_deref()),
        Command::ReplaceGradleProperties {
            main_lua,
            gradle_properties,
            output,
        } => commands::replace_gradle_properties(
            &main_lua,
            &gradle_properties,
            output.as_deref(),
            &mut stdout,
        ),
        Command::GhaCommitHash => commands::gha_commit_hash(&GitRevision::new(), &mut stdout),
        Command::ExtractVersion {
            main_lua,
            limit,
            json,
        } => commands::extract_version(&main_lua, limit, json, &mut stdout),
    }
}
