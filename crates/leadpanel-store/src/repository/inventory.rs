//! # Inventory Repository
//!
//! Store operations for the inventory/price list. Selecting one of these
//! items in the quotation form copies its fields into a line item
//! ([`leadpanel_core::types::LineItem::apply_inventory`]).

use tracing::debug;

use leadpanel_core::InventoryItem;

use crate::client::StoreClient;
use crate::error::StoreResult;
use crate::Subscription;

/// Repository for inventory store operations.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    client: StoreClient,
}

impl InventoryRepository {
    /// Creates a new InventoryRepository.
    pub fn new(client: StoreClient) -> Self {
        InventoryRepository { client }
    }

    /// Persists a new price-list item.
    pub async fn create(&self, item: InventoryItem) -> StoreResult<String> {
        leadpanel_core::validation::validate_inventory_item(&item)?;

        debug!(name = %item.name, "Creating inventory item");
        self.client.inventory().create(item).await
    }

    /// Deletes a price-list item.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.client.inventory().delete(id).await
    }

    /// The current ordered price list.
    pub async fn list(&self) -> Vec<InventoryItem> {
        self.client.inventory().list().await
    }

    /// Opens a live subscription on the price list.
    pub async fn subscribe(&self) -> Subscription<Vec<InventoryItem>> {
        self.client.inventory().subscribe().await
    }
}
