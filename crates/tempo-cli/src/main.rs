use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tempo_tokens::{export, ExportFormat, Platform, TokenConfig, TokenError};
use tracing_subscriber::EnvFilter;

/// Print the Tempo design tokens for a platform.
#[derive(Debug, Parser)]
#[command(name = "tempo-tokens", version, about)]
struct Cli {
    /// Platform to resolve for (ios, android, web, desktop).
    #[arg(short, long)]
    platform: Option<Platform>,

    /// Output format (json, toml, css).
    #[arg(short, long)]
    format: Option<ExportFormat>,

    /// Config file to use instead of the user config.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ignore color overrides from config.
    #[arg(long)]
    defaults: bool,

    /// CSS custom property prefix; overrides the config value.
    #[arg(long)]
    prefix: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tempo=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match parse_args(std::env::args_os()).and_then(|cli| run(&cli)) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Parse arguments; `--help` and `--version` print and exit, usage
/// errors come back as `TokenError::Usage`.
fn parse_args<I, T>(args: I) -> Result<Cli, TokenError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).or_else(|e| {
        if e.use_stderr() {
            Err(TokenError::Usage(e.to_string()))
        } else {
            e.exit()
        }
    })
}

fn run(cli: &Cli) -> Result<String, TokenError> {
    let mut config = match &cli.config {
        Some(path) => TokenConfig::load_from(path)?,
        None => TokenConfig::load()?,
    };
    if cli.defaults {
        config.colors.clear();
    }

    let platform = config.platform(cli.platform);
    let format = cli.format.unwrap_or(config.export.format);
    let prefix = cli.prefix.as_deref().unwrap_or(&config.export.css_prefix);

    tracing::debug!(%platform, %format, "exporting tokens");
    let tokens = config.tokens(platform)?;
    let mut output = export::render(&tokens, format, prefix)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}
