//! `upfile exists` – check for a stored file.

use anyhow::Result;
use upfile_core::integration::{DOMAIN, SERVICE_EXISTS};
use upfile_core::{ExistsRequest, ServiceRegistry};

use super::print_response;

pub async fn run_exists(
    registry: &ServiceRegistry,
    local_url: Option<String>,
    path: Option<String>,
    filename: Option<String>,
) -> Result<()> {
    let request = ExistsRequest {
        path,
        filename,
        local_url,
    };
    let response = registry
        .call(DOMAIN, SERVICE_EXISTS, serde_json::to_value(&request)?, true)
        .await?;
    print_response(response)
}
