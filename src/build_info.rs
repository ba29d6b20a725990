//! Build metadata
//!
//! Values stamped into the binary by `build.rs`, reported by the status tool
//! and printed at startup.

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Identity of the running build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: VERSION,
            build_number: option_env!("PAWFEED_BUILD_NUMBER")
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
            build_timestamp: option_env!("PAWFEED_BUILD_TIMESTAMP").unwrap_or("unknown"),
        }
    }

    /// Multi-line banner shown when the server starts
    pub fn banner(&self) -> String {
        let rule = "=".repeat(47);
        format!(
            "{rule}\n  Pawfeed - dog feeding calculator\n  Version: {} | Build: {}\n  Compiled: {}\n{rule}",
            self.version, self.build_number, self.build_timestamp
        )
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    eprintln!("{}", BuildInfo::current().banner());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_uses_package_metadata() {
        let info = BuildInfo::current();
        assert_eq!(info.name, "pawfeed");
        assert_eq!(info.version, VERSION);
    }

    #[test]
    fn test_banner_lines() {
        let info = BuildInfo {
            name: "pawfeed",
            version: "1.2.3",
            build_number: 7,
            build_timestamp: "2026-10-18T00:00:00Z",
        };
        let banner = info.banner();
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], "  Version: 1.2.3 | Build: 7");
        assert_eq!(lines[3], "  Compiled: 2026-10-18T00:00:00Z");
    }
}
