//! Tracing subscriber setup for the CLI.
//!
//! The caller picks a level (`--log-level`, `-v`); `RUST_LOG` overrides it
//! when set. `BTCAUDIT_LOG_JSON=1` switches to JSON lines. Output always
//! goes to stderr so stdout stays machine-readable.

use tracing_subscriber::{fmt, EnvFilter};

pub const ENV_LOG_JSON: &str = "BTCAUDIT_LOG_JSON";

/// Level used when neither the CLI nor `RUST_LOG` picks one.
pub const DEFAULT_LEVEL: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    pub fn from_env() -> Self {
        Self::from_flag(std::env::var(ENV_LOG_JSON).ok().as_deref())
    }

    fn from_flag(value: Option<&str>) -> Self {
        match value {
            Some("1") | Some("true") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// Filter directives: a non-empty `RUST_LOG` wins over `level`.
fn directives(rust_log: Option<String>, level: &str) -> String {
    rust_log
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| level.to_string())
}

pub fn init_logging(level: &str, format: LogFormat) {
    let directives = directives(std::env::var(EnvFilter::DEFAULT_ENV).ok(), level);
    let env_filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    // try_init: a second call keeps the first subscriber.
    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().with_target(false).try_init(),
    };
}
