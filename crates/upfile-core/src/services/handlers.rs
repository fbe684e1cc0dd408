//! Typed adapters from JSON payloads to the upload and exists handlers.

use async_trait::async_trait;
use serde_json::Value;

use super::{parse_payload, ServiceHandler};
use crate::error::Result;
use crate::exists::{handle_exists, ExistsRequest};
use crate::host::HostConfig;
use crate::upload::{handle_upload, UploadRequest};

pub struct UploadService;

#[async_trait]
impl ServiceHandler for UploadService {
    async fn call(&self, host: &HostConfig, data: Value) -> Result<Value> {
        let request: UploadRequest = parse_payload(data)?;
        request.validate_schema()?;
        let response = handle_upload(host, request).await?;
        Ok(serde_json::to_value(response)?)
    }
}

pub struct ExistsService;

#[async_trait]
impl ServiceHandler for ExistsService {
    async fn call(&self, host: &HostConfig, data: Value) -> Result<Value> {
        let request: ExistsRequest = parse_payload(data)?;
        let response = handle_exists(host, &request)?;
        Ok(serde_json::to_value(response)?)
    }
}
