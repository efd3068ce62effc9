use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_TARGET: &str = "surefire_scope";

/// Log verbosity selected with `-v`/`-q`, ordered from quietest to noisiest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, 2) => Self::Debug,
            (false, _) => Self::Trace,
        }
    }

    /// Default directive used when `RUST_LOG` is not set.
    pub fn directive(self) -> String {
        let level = match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        };
        format!("{LOG_TARGET}={level}")
    }

    fn shows_locations(self) -> bool {
        self >= Self::Debug
    }
}

/// Installs the global subscriber on stderr, keeping stdout for the report.
/// `--quiet` discards everything.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(verbosity.shows_locations())
        .with_line_number(verbosity.shows_locations())
        .compact();

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = match verbosity {
        Verbosity::Quiet => builder.with_writer(std::io::sink).try_init(),
        Verbosity::Normal => builder.with_writer(std::io::stderr).without_time().try_init(),
        _ => builder.with_writer(std::io::stderr).try_init(),
    };
}
