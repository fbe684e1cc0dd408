//! The `upload_file` integration: service names and lifecycle hooks.

use std::sync::Arc;

use crate::error::Result;
use crate::services::{ExistsService, ServiceRegistry, SupportsResponse, UploadService};

pub const DOMAIN: &str = "upload_file";
pub const SERVICE_UPLOAD: &str = "upload_file";
pub const SERVICE_EXISTS: &str = "file_exists";

/// A configured instance of the integration. Carries no options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub entry_id: String,
    pub title: String,
}

impl Default for ConfigEntry {
    fn default() -> Self {
        Self {
            entry_id: DOMAIN.to_string(),
            title: "Upload File".to_string(),
        }
    }
}

/// Registers both services, skipping any that are already present.
pub fn register_services(registry: &ServiceRegistry) {
    if !registry.has_service(DOMAIN, SERVICE_UPLOAD) {
        registry.register(
            DOMAIN,
            SERVICE_UPLOAD,
            Arc::new(UploadService),
            SupportsResponse::Optional,
        );
    }

    if !registry.has_service(DOMAIN, SERVICE_EXISTS) {
        registry.register(
            DOMAIN,
            SERVICE_EXISTS,
            Arc::new(ExistsService),
            SupportsResponse::Optional,
        );
    }
}

/// Setup from static configuration.
pub async fn setup(registry: &ServiceRegistry) -> Result<bool> {
    register_services(registry);
    tracing::info!(
        "{} services ready under {}",
        DOMAIN,
        registry.host().config_dir().display()
    );
    Ok(true)
}

/// Setup from a config entry. Safe to run after [`setup`]; registration is idempotent.
pub async fn setup_entry(registry: &ServiceRegistry, entry: &ConfigEntry) -> Result<bool> {
    tracing::debug!("setting up entry {} ({})", entry.entry_id, entry.title);
    register_services(registry);
    Ok(true)
}

/// Unloading an entry leaves the services registered.
pub async fn unload_entry(_registry: &ServiceRegistry, entry: &ConfigEntry) -> Result<bool> {
    tracing::debug!("unloaded entry {}", entry.entry_id);
    Ok(true)
}
