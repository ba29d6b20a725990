//! Pawfeed Library
//!
//! Dog feeding-intake calculations and the tools built on them.

pub mod build_info;
pub mod config;
pub mod error;
pub mod feeding;
pub mod mcp;
pub mod models;
pub mod tools;
