//! Name-based service dispatch.
//!
//! The host exposes operations as `(domain, service)` pairs. Each pair maps to
//! a [`ServiceHandler`] that takes a JSON payload and returns a JSON map.
//! Registration happens once on the setup path; calls only take a read lock
//! long enough to clone the handler out.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{Result, UploadFileError};
use crate::host::HostConfig;

mod handlers;

pub use handlers::{ExistsService, UploadService};

/// Whether a service hands its result map back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupportsResponse {
    /// Side effects only; results are dropped.
    #[default]
    None,
    /// Returned when the caller asks for it.
    Optional,
    /// Caller must ask for the response.
    Only,
}

#[async_trait]
pub trait ServiceHandler: Send + Sync {
    async fn call(&self, host: &HostConfig, data: Value) -> Result<Value>;
}

/// Decodes a service payload into its typed request. `null` counts as `{}`.
/// Schema violations (unknown keys, wrong types) are `InvalidInput`.
pub fn parse_payload<T: DeserializeOwned>(data: Value) -> Result<T> {
    let data = match data {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(data).map_err(|e| UploadFileError::invalid(e.to_string()))
}

#[derive(Clone)]
struct Registered {
    handler: Arc<dyn ServiceHandler>,
    supports_response: SupportsResponse,
}

type ServiceKey = (String, String);

/// Process-wide registry of callable services, bound to one host root.
pub struct ServiceRegistry {
    host: HostConfig,
    services: RwLock<HashMap<ServiceKey, Registered>>,
}

impl ServiceRegistry {
    pub fn new(host: HostConfig) -> Self {
        Self {
            host,
            services: RwLock::new(HashMap::new()),
        }
    }

    pub fn host(&self) -> &HostConfig {
        &self.host
    }

    fn key(domain: &str, service: &str) -> ServiceKey {
        (domain.to_string(), service.to_string())
    }

    pub fn has_service(&self, domain: &str, service: &str) -> bool {
        self.services
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&Self::key(domain, service))
    }

    /// Registers (or replaces) a handler. Callers wanting idempotent setup
    /// check [`has_service`](Self::has_service) first.
    pub fn register(
        &self,
        domain: &str,
        service: &str,
        handler: Arc<dyn ServiceHandler>,
        supports_response: SupportsResponse,
    ) {
        tracing::debug!("registering service {}.{}", domain, service);
        self.services
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                Self::key(domain, service),
                Registered {
                    handler,
                    supports_response,
                },
            );
    }

    /// Registered `(domain, service)` pairs, sorted.
    pub fn services(&self) -> Vec<(String, String)> {
        let mut keys: Vec<_> = self
            .services
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        keys.sort();
        keys
    }

    /// Dispatches a call. Returns the handler's map only when the caller asked
    /// for it and the service supports responses.
    pub async fn call(
        &self,
        domain: &str,
        service: &str,
        data: Value,
        return_response: bool,
    ) -> Result<Option<Value>> {
        let registered = self
            .services
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&Self::key(domain, service))
            .cloned()
            .ok_or_else(|| UploadFileError::ServiceNotFound {
                domain: domain.to_string(),
                service: service.to_string(),
            })?;

        if registered.supports_response == SupportsResponse::Only && !return_response {
            return Err(UploadFileError::ResponseRequired {
                domain: domain.to_string(),
                service: service.to_string(),
            });
        }

        tracing::debug!("calling service {}.{}", domain, service);
        let result = registered.handler.call(&self.host, data).await;
        if let Err(err) = &result {
            tracing::warn!("service {}.{} failed: {}", domain, service, err);
        }
        let value = result?;

        let wants_value =
            return_response && registered.supports_response != SupportsResponse::None;
        Ok(wants_value.then_some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Echo {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ServiceHandler for Echo {
        async fn call(&self, _host: &HostConfig, data: Value) -> Result<Value> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            Ok(json!({ "echo": data }))
        }
    }

    fn registry_with(supports: SupportsResponse) -> (ServiceRegistry, Arc<Echo>) {
        let registry = ServiceRegistry::new(HostConfig::new("/config"));
        let echo = Arc::new(Echo {
            calls: AtomicUsize::new(0),
        });
        registry.register("test", "echo", echo.clone(), supports);
        (registry, echo)
    }

    #[tokio::test]
    async fn optional_response_only_when_requested() {
        let (registry, echo) = registry_with(SupportsResponse::Optional);
        let with = registry.call("test", "echo", json!(1), true).await.unwrap();
        assert_eq!(with, Some(json!({ "echo": 1 })));
        let without = registry.call("test", "echo", json!(2), false).await.unwrap();
        assert_eq!(without, None);
        assert_eq!(echo.calls.load(Ordering::Relaxed), 2);
    }

    #[tokio::test]
    async fn no_response_service_drops_result() {
        let (registry, echo) = registry_with(SupportsResponse::None);
        assert_eq!(registry.call("test", "echo", json!(1), true).await.unwrap(), None);
        assert_eq!(echo.calls.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn only_response_requires_flag() {
        let (registry, echo) = registry_with(SupportsResponse::Only);
        let err = registry.call("test", "echo", json!(1), false).await.unwrap_err();
        assert!(matches!(err, UploadFileError::ResponseRequired { .. }));
        assert_eq!(echo.calls.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn unknown_service() {
        let (registry, _) = registry_with(SupportsResponse::Optional);
        let err = registry.call("test", "missing", Value::Null, true).await.unwrap_err();
        assert!(matches!(err, UploadFileError::ServiceNotFound { .. }));
    }

    #[test]
    fn has_service_and_listing() {
        let (registry, _) = registry_with(SupportsResponse::Optional);
        assert!(registry.has_service("test", "echo"));
        assert!(!registry.has_service("other", "echo"));
        assert_eq!(
            registry.services(),
            vec![("test".to_string(), "echo".to_string())]
        );
    }

    #[test]
    fn parse_payload_null_is_empty_object() {
        #[derive(Debug, serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Req {
            #[serde(default)]
            a: Option<String>,
        }
        let req: Req = parse_payload(Value::Null).unwrap();
        assert!(req.a.is_none());
        let err = parse_payload::<Req>(json!({ "b": 1 })).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
