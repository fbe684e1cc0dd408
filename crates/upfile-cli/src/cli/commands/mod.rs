//! CLI command handlers. Each command is in its own file.

mod call;
mod exists;
mod services;
mod upload;

pub use call::run_call;
pub use exists::run_exists;
pub use services::run_services;
pub use upload::run_upload;

use anyhow::Result;

/// Pretty-prints a service response, or nothing when the service returned none.
fn print_response(response: Option<serde_json::Value>) -> Result<()> {
    if let Some(value) = response {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
