//! smoke-test client for an s3-compatible object storage api
//!
//! Builds a client for a fixed endpoint, sends a single list-objects request
//! and logs either the parsed response or the error together with the raw
//! response body when one came back. Nothing is read from the environment;
//! every parameter is a literal in the binary.
mod basic;
mod list;

pub use basic::{config_builder, create_s3_client, ClientConfig, ListRequest};
pub use list::{run_listing, ListingOutcome};

use flexi_logger::{Logger, LoggerHandle};

/// init logging to stdout
/// run this function before any other functions and keep the handle alive
pub fn init_logging() -> Result<LoggerHandle, Box<dyn std::error::Error>> {
    let handle = Logger::try_with_str("info")?.log_to_stdout().start()?;
    Ok(handle)
}
