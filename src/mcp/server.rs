//! Pawfeed MCP Server Implementation
//!
//! Implements the MCP server with the feeding tools.

use std::sync::Arc;

use chrono::NaiveDate;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::PawfeedError;
use crate::models::{BirthDate, DogProfile};
use crate::tools::feeding;
use crate::tools::status::StatusTracker;

/// Pawfeed MCP Service
#[derive(Clone)]
pub struct PawfeedService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: Config,
    tool_router: ToolRouter<PawfeedService>,
}

impl PawfeedService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config.today_override))),
            config,
            tool_router: Self::tool_router(),
        }
    }

    /// Resolve the date a request is calculated for
    fn as_of(&self, as_of: Option<&str>) -> Result<NaiveDate, McpError> {
        match as_of {
            Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
                McpError::invalid_params(format!("as_of '{}' is not YYYY-MM-DD: {}", raw, e), None)
            }),
            None => Ok(self.config.today()),
        }
    }
}

fn to_mcp_error(e: PawfeedError) -> McpError {
    match e {
        PawfeedError::UnknownUnit(_) | PawfeedError::Config(_) => {
            McpError::invalid_params(e.to_string(), None)
        }
        PawfeedError::Serialization(_) => McpError::internal_error(e.to_string(), None),
    }
}

fn json_result<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = feeding::to_pretty_json(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateFeedingPlanParams {
    /// Dog's name (optional, echoed back in the plan)
    pub name: Option<String>,
    /// Date of birth, YYYY-MM-DD preferred. Unreadable dates count as unknown.
    pub date_of_birth: Option<String>,
    /// Current body weight
    pub weight: Option<f64>,
    /// Unit of the weight: kg (default), g, lb, oz
    pub weight_unit: Option<String>,
    /// Use puppy feeding guidelines for dogs under 12 months (default true)
    pub use_puppy_guidelines: Option<bool>,
    /// Percent of body weight to feed when no puppy bracket applies
    pub manual_intake_ratio: Option<f64>,
    /// Date to calculate for (YYYY-MM-DD, defaults to today)
    pub as_of: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertWeightParams {
    /// Weight value
    pub value: f64,
    /// Unit of the value: kg, g, lb, oz
    pub unit: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl PawfeedService {
    #[tool(description = "Get the current status of the Pawfeed service including build info, the date used as today, and process information")]
    async fn pawfeed_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status())
    }

    #[tool(description = "Get instructions for calculating dog feeding plans. Call this when unsure which inputs to collect or how to read a plan.")]
    fn feeding_instructions(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(feeding::FEEDING_INSTRUCTIONS)]))
    }

    #[tool(description = "Calculate a dog's daily food amount from its date of birth, weight, and feeding preferences. daily_grams of 0 means more data is needed.")]
    fn calculate_feeding_plan(&self, Parameters(p): Parameters<CalculateFeedingPlanParams>) -> Result<CallToolResult, McpError> {
        let today = self.as_of(p.as_of.as_deref())?;
        let weight_kg = feeding::resolve_weight(p.weight, p.weight_unit.as_deref()).map_err(to_mcp_error)?;
        let profile = DogProfile {
            name: p.name,
            date_of_birth: BirthDate::from(p.date_of_birth),
            use_puppy_guidelines: p.use_puppy_guidelines,
            manual_intake_ratio: p.manual_intake_ratio,
        };
        json_result(&feeding::build_feeding_plan(&profile, weight_kg, today))
    }

    #[tool(description = "List the puppy feeding brackets (percent of body weight per day by age) and the adult rate")]
    fn puppy_guidelines(&self) -> Result<CallToolResult, McpError> {
        json_result(&feeding::puppy_guideline_table())
    }

    #[tool(description = "Convert a body weight in g, lb, or oz to kilograms")]
    fn convert_weight(&self, Parameters(p): Parameters<ConvertWeightParams>) -> Result<CallToolResult, McpError> {
        let result = feeding::convert_weight(p.value, &p.unit).map_err(to_mcp_error)?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for PawfeedService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "pawfeed".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Pawfeed".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Pawfeed - daily feeding amounts for dogs. \
                 Call feeding_instructions first if unsure which inputs to collect. \
                 Plans: calculate_feeding_plan. Reference: puppy_guidelines. \
                 Utilities: convert_weight, pawfeed_status."
                    .into(),
            ),
        }
    }
}
