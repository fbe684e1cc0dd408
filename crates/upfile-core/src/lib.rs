pub mod config;
pub mod logging;

pub mod checksum;
pub mod classify;
pub mod error;
pub mod exists;
pub mod fetch;
pub mod host;
pub mod integration;
pub mod payload;
pub mod sandbox;
pub mod services;
pub mod upload;

pub use error::{Result, UploadFileError};
pub use exists::{ExistsRequest, ExistsResponse};
pub use host::HostConfig;
pub use services::{ServiceRegistry, SupportsResponse};
pub use upload::{UploadRequest, UploadResponse};
