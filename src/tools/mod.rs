//! Pawfeed Tools module
//!
//! MCP tool implementations for the feeding calculator.

pub mod feeding;
pub mod status;
