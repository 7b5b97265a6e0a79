//! Inventory validation port and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::Context;
use domain::error::Result;
use domain::{LineItem, OrderError};

/// Capability answering whether the requested items are available.
///
/// Returns the canonical confirmed item list, which may be re-sequenced or
/// enriched relative to the request. A failing check aborts the calling
/// workflow with nothing committed. The network-backed adapter lives
/// outside this core.
#[async_trait]
pub trait InventoryService: Send + Sync {
    async fn check_availability(
        &self,
        ctx: &Context,
        items: &[LineItem],
    ) -> Result<Vec<LineItem>>;
}

#[derive(Debug, Default)]
struct InMemoryInventoryState {
    fail_on_check: bool,
    checks: u64,
}

/// In-memory inventory service for tests and local wiring.
///
/// Confirms every request by echoing the items back in id order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInventory {
    state: Arc<RwLock<InMemoryInventoryState>>,
}

impl InMemoryInventory {
    /// Creates a new in-memory inventory service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the service to fail availability checks.
    pub fn set_fail_on_check(&self, fail: bool) {
        self.state.write().unwrap().fail_on_check = fail;
    }

    /// Returns how many availability checks were made.
    pub fn check_count(&self) -> u64 {
        self.state.read().unwrap().checks
    }
}

#[async_trait]
impl InventoryService for InMemoryInventory {
    async fn check_availability(
        &self,
        _ctx: &Context,
        items: &[LineItem],
    ) -> Result<Vec<LineItem>> {
        let mut state = self.state.write().unwrap();
        state.checks += 1;

        if state.fail_on_check {
            return Err(OrderError::Upstream("items out of stock".to_string()));
        }

        let mut confirmed = items.to_vec();
        confirmed.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(confirmed)
    }
}
