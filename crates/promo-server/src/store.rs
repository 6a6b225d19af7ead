//! In-memory promocode store
//!
//! A keyed map with no durability guarantees. Reads and writes are
//! independent; creating a promocode under an existing name overwrites the
//! previous entry (last-writer-wins).

use promo_core::Promocode;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::warn;

/// Shared promocode storage
#[derive(Debug, Default)]
pub struct PromocodeStore {
    promocodes: RwLock<HashMap<String, Promocode>>,
}

impl PromocodeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a promocode, replacing any previous entry with the same name
    pub async fn create(&self, promocode: Promocode) {
        let name = promocode.name.clone();
        let replaced = self.promocodes.write().await.insert(name.clone(), promocode);
        if replaced.is_some() {
            warn!(%name, "replaced existing promocode");
        }
    }

    /// Retrieve a promocode by name
    pub async fn get(&self, name: &str) -> Option<Promocode> {
        self.promocodes.read().await.get(name).cloned()
    }

    /// Number of stored promocodes
    pub async fn len(&self) -> usize {
        self.promocodes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.promocodes.read().await.is_empty()
    }
}
