//! `upfile upload` – store a file under the sandbox.

use anyhow::Result;
use upfile_core::integration::{DOMAIN, SERVICE_UPLOAD};
use upfile_core::{ServiceRegistry, UploadRequest};

use super::print_response;

pub async fn run_upload(
    registry: &ServiceRegistry,
    url: Option<String>,
    data_base64: Option<String>,
    filename: Option<String>,
    path: Option<String>,
) -> Result<()> {
    let request = UploadRequest {
        url,
        data_base64,
        filename,
        path,
    };
    let response = registry
        .call(DOMAIN, SERVICE_UPLOAD, serde_json::to_value(&request)?, true)
        .await?;
    print_response(response)
}
