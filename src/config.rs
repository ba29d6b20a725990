//! Runtime configuration
//!
//! Settings read from the environment at startup.

use chrono::NaiveDate;

use crate::error::{PawfeedError, PawfeedResult};
use crate::feeding;

/// Default tracing directive when `PAWFEED_LOG` is unset
pub const DEFAULT_LOG_DIRECTIVE: &str = "pawfeed=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter directive
    pub log_directive: String,
    /// Fixed date used as "today" instead of the system clock
    pub today_override: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
            today_override: None,
        }
    }
}

impl Config {
    /// Load configuration from `PAWFEED_LOG` and `PAWFEED_TODAY`
    pub fn from_env() -> PawfeedResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> PawfeedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_directive = lookup("PAWFEED_LOG")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string());

        let today_override = match lookup("PAWFEED_TODAY") {
            Some(raw) if !raw.trim().is_empty() => {
                let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
                    PawfeedError::Config(format!("PAWFEED_TODAY '{}' is not YYYY-MM-DD: {}", raw, e))
                })?;
                Some(date)
            }
            _ => None,
        };

        Ok(Self {
            log_directive,
            today_override,
        })
    }

    /// The date calculations treat as today
    pub fn today(&self) -> NaiveDate {
        self.today_override.unwrap_or_else(feeding::today)
    }
}
