use std::sync::Arc;
use std::time::Duration;

use rentora_catalog::PricingEngine;
use rentora_core::{
    CheckoutService, IdentityProvider, PaymentAdapter, SimulatedIdentityProvider,
    SimulatedPaymentGateway,
};
use rentora_store::app_config::Config;
use rentora_store::{FileBackend, KeyValueBackend, ListingStore, MemoryBackend};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ListingStore>,
    pub checkout: Arc<CheckoutService>,
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let backend = Arc::new(FileBackend::new(&config.storage.dir));
        let payments = Arc::new(SimulatedPaymentGateway::new(config.simulation.payment_delay()));
        let identity = Arc::new(SimulatedIdentityProvider::new(config.simulation.login_delay()));

        Self::assemble(
            backend,
            &config.storage.key,
            PricingEngine::new(config.business_rules.pricing()),
            payments,
            identity,
        )
    }

    /// Memory-backed state with no simulated latency.
    pub fn in_memory() -> Self {
        Self::assemble(
            Arc::new(MemoryBackend::new()),
            rentora_store::DEFAULT_STORAGE_KEY,
            PricingEngine::default(),
            Arc::new(SimulatedPaymentGateway::new(Duration::ZERO)),
            Arc::new(SimulatedIdentityProvider::new(Duration::ZERO)),
        )
    }

    fn assemble(
        backend: Arc<dyn KeyValueBackend>,
        key: &str,
        pricing: PricingEngine,
        payments: Arc<dyn PaymentAdapter>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        let store = Arc::new(ListingStore::new(backend).with_key(key));
        let checkout = Arc::new(CheckoutService::new(store.clone(), pricing, payments));

        Self {
            store,
            checkout,
            identity,
        }
    }
}
