//! `upfile call` – generic dispatch with a JSON payload.

use anyhow::{Context, Result};
use upfile_core::integration::DOMAIN;
use upfile_core::ServiceRegistry;

use super::print_response;

pub async fn run_call(
    registry: &ServiceRegistry,
    service: &str,
    data: &str,
    return_response: bool,
) -> Result<()> {
    let payload: serde_json::Value =
        serde_json::from_str(data).context("parse --data as JSON")?;
    let response = registry
        .call(DOMAIN, service, payload, return_response)
        .await?;
    print_response(response)
}
