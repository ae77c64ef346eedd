use console::{style, Term};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

pub mod command;
mod config;
mod task;

pub use crate::config::{Config, EmbedConfig, GenerateConfig, PlaceholderConfig};
pub use iconscale::Filter;

/// Why a command did not complete.
#[derive(Debug)]
pub enum Failure {
    /// A required input file does not exist. Nothing was written.
    MissingInput(PathBuf),
    /// The configuration can't be used. Nothing was written.
    InvalidConfig(String),
    /// Reading, decoding, encoding or writing failed. Outputs written before
    /// the failure are left in place.
    Transform(anyhow::Error),
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::MissingInput(path) => write!(f, "input not found at {}", path.display()),
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            Self::Transform(err) => write!(f, "{:#}", err),
        }
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transform(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        Self::Transform(err)
    }
}

pub fn init_logger() {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("XICON_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
}

/// Entry point shared by the binaries: sets up logging, loads
/// [`Config::FILE_NAME`] from the working directory and runs `command`.
///
/// A failure is reported on stderr. The exit status is non-zero unless the
/// config sets `fail_on_error: false`.
pub fn run<T, F>(command: F) -> ExitCode
where
    F: FnOnce(&Config) -> Result<T, Failure>,
{
    init_logger();
    if run_with(Path::new(Config::FILE_NAME), command) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Runs `command` with the config at `config_path` and returns whether the
/// process should exit successfully.
fn run_with<T, F>(config_path: &Path, command: F) -> bool
where
    F: FnOnce(&Config) -> Result<T, Failure>,
{
    let config = match Config::parse(config_path) {
        Ok(config) => config,
        Err(err) => {
            report(&Failure::InvalidConfig(format!("{:#}", err)));
            return false;
        }
    };
    match command(&config) {
        Ok(_) => true,
        Err(failure) => {
            report(&failure);
            !config.fail_on_error
        }
    }
}

fn report(failure: &Failure) {
    tracing::debug!("{:?}", failure);
    let line = format!("{} {}", style("[ERROR]").for_stderr().red(), failure);
    Term::stderr().write_line(&line).ok();
}
