//! Global output configuration and logging setup.
//!
//! All diagnostics go to stderr as leveled, timestamped log lines through
//! `tracing`. Only the `languages` and `status` listings write to stdout.
//!
//! Colors can be disabled via flag or the `NO_COLOR` environment variable,
//! and are never written to a stderr that is not a terminal.

use std::io::IsTerminal;
use std::sync::OnceLock;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Global output configuration.
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// How much to log when `RUST_LOG` is not set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    #[default]
    Normal,
    /// Include debug lines (request details, cache hits).
    Verbose,
}

impl Verbosity {
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    pub const fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
        }
    }
}

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub verbosity: Verbosity,
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            // Check NO_COLOR environment variable (https://no-color.org/)
            no_color: std::env::var("NO_COLOR").is_ok(),
        }
    }
}

/// Initialize output settings and install the log subscriber.
///
/// This should be called once at startup with the CLI flags.
/// If called multiple times, subsequent calls are ignored.
pub fn init(config: OutputConfig) {
    if OUTPUT_CONFIG.set(config).is_err() {
        return;
    }
    let config = self::config();

    // RUST_LOG, when set, overrides the verbosity flags
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.verbosity.level()).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(stderr_color())
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

/// Check if quiet mode is enabled.
pub fn is_quiet() -> bool {
    config().verbosity == Verbosity::Quiet
}

/// Check if colors are disabled.
pub fn is_no_color() -> bool {
    config().no_color
}

/// Whether diagnostics on stderr may carry ANSI colors.
pub fn stderr_color() -> bool {
    !is_no_color() && std::io::stderr().is_terminal()
}
