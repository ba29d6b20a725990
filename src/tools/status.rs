//! Pawfeed Status Tool
//!
//! Provides runtime status information about the Pawfeed service.

use chrono::NaiveDate;
use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Runtime status of the Pawfeed service
#[derive(Debug, Clone, Serialize)]
pub struct PawfeedStatus {
    #[serde(flatten)]
    pub build: BuildInfo,

    /// Date used as "today" for age calculations
    pub today: String,
    pub today_is_fixed: bool,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    today_override: Option<NaiveDate>,
}

impl StatusTracker {
    pub fn new(today_override: Option<NaiveDate>) -> Self {
        Self {
            start_time: Instant::now(),
            today_override,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> PawfeedStatus {
        let today = self
            .today_override
            .unwrap_or_else(crate::feeding::today)
            .format("%Y-%m-%d")
            .to_string();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        PawfeedStatus {
            build: BuildInfo::current(),
            today,
            today_is_fixed: self.today_override.is_some(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
