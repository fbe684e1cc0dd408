//! `upfile services` – list registered services.

use upfile_core::ServiceRegistry;

pub fn run_services(registry: &ServiceRegistry) {
    for (domain, service) in registry.services() {
        println!("{}.{}", domain, service);
    }
}
