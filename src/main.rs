//! Pawfeed
//!
//! An MCP server for dog feeding calculations.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use pawfeed::build_info;
use pawfeed::config::Config;
use pawfeed::mcp::PawfeedService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Read PAWFEED_* settings before anything else
    let config = Config::from_env()?;

    // Log to stderr so stdout stays reserved for MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(config.log_directive.parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");
    if let Some(date) = config.today_override {
        eprintln!("Using fixed date: {}", date);
    }

    // Create the Pawfeed service
    let service = PawfeedService::new(config);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
