//! Utilities: logging setup (verbosity flags -> tracing filter).
//!
//! Key items:
//!   LogLevel / derive_level
//!   init_logging
//!
//! All log output goes to stderr; stdout carries MCP protocol frames.

/// Logging helpers.
pub mod logging {
    use tracing_subscriber::EnvFilter;

    #[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
    pub enum LogLevel {
        Error = 0,
        Info = 1,
        Debug = 2,
        Trace = 3,
    }

    impl LogLevel {
        pub fn as_str(&self) -> &'static str {
            match self {
                LogLevel::Error => "error",
                LogLevel::Info => "info",
                LogLevel::Debug => "debug",
                LogLevel::Trace => "trace",
            }
        }
    }

    pub fn derive_level(verbose: u8, quiet: bool) -> LogLevel {
        if quiet {
            return LogLevel::Error;
        }
        match verbose {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    /// `RUST_LOG` wins over the flag-derived level when set.
    pub fn filter_for(level: LogLevel) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
    }

    /// Install the global subscriber. Safe to call more than once (later calls are no-ops).
    pub fn init_logging(level: LogLevel) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter_for(level))
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(false)
            .try_init();
    }
}

pub use logging::{derive_level, init_logging};
