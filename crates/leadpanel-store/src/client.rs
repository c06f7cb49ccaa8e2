//! # Store Client
//!
//! An explicitly constructed handle to the document store: collections of
//! leads, quotations and inventory items, plus the company-profile
//! singleton document.
//!
//! ## Listener Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Live Collection Subscriptions                        │
//! │                                                                         │
//! │  create(record) ──┐                                                     │
//! │  update(id, r)  ──┼──► write lock ──► broadcast FULL ordered snapshot  │
//! │  delete(id)     ──┘                        │                            │
//! │                                            ▼                            │
//! │  subscriber A  ◄── Vec<T> (every record, every change)                 │
//! │  subscriber B  ◄── Vec<T>                                              │
//! │                                                                         │
//! │  A lagged subscriber drops intermediate snapshots and picks up the     │
//! │  latest one on the next change - every message is a full snapshot,     │
//! │  so nothing is lost for good.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why No Global Handle?
//! The client is constructed once by the host and passed by reference (or
//! cheaply cloned) into whichever layer needs store access. The pricing
//! engine and the share codec take no such dependency at all - they compile
//! and run without any store handle in scope.
//!
//! ## Concurrency
//! Writers serialize on the collection's RwLock; last write wins. There is
//! no optimistic concurrency and no merge strategy - the hosted document
//! database this stands in for behaves the same way.

use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};
use tracing::debug;
use uuid::Uuid;

use leadpanel_core::{CompanyProfile, InventoryItem, Lead, Quotation};

use crate::error::{StoreError, StoreResult};

/// Buffered snapshots per subscriber before lagging kicks in.
const EVENT_BUFFER: usize = 16;

// =============================================================================
// Document Trait
// =============================================================================

/// A record that lives in a store collection.
///
/// The store owns id assignment: `create` generates a UUID v4 and stamps it
/// onto the record before the write.
pub trait Document: Clone + Send + Sync + 'static {
    /// Collection path under the tenant's data root.
    const COLLECTION: &'static str;

    /// The document id ("" until stored).
    fn id(&self) -> &str;

    /// Stamps the store-assigned document id.
    fn set_id(&mut self, id: String);
}

impl Document for Lead {
    const COLLECTION: &'static str = "leads";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Document for Quotation {
    const COLLECTION: &'static str = "quotations";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Document for InventoryItem {
    const COLLECTION: &'static str = "inventory";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

// =============================================================================
// Subscription
// =============================================================================

/// A live subscription: the state at subscribe time plus a stream of
/// post-change snapshots.
#[derive(Debug)]
pub struct Subscription<S> {
    /// The state when the subscription was opened.
    pub current: S,

    /// Receives the full new state after every subsequent change.
    pub updates: broadcast::Receiver<S>,
}

// =============================================================================
// Collection
// =============================================================================

/// One document collection with live listeners.
///
/// Records keep insertion order; `update` replaces in place, so the order a
/// subscriber sees is stable across edits.
#[derive(Debug, Clone)]
pub struct Collection<T: Document> {
    records: Arc<RwLock<Vec<T>>>,
    events: broadcast::Sender<Vec<T>>,
}

impl<T: Document> Collection<T> {
    fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        Collection {
            records: Arc::new(RwLock::new(Vec::new())),
            events,
        }
    }

    /// Inserts a record and returns its store-assigned id.
    pub async fn create(&self, mut record: T) -> StoreResult<String> {
        let id = Uuid::new_v4().to_string();
        record.set_id(id.clone());

        let mut records = self.records.write().await;
        records.push(record);
        debug!(collection = T::COLLECTION, id = %id, "Created document");
        self.notify(&records);

        Ok(id)
    }

    /// Replaces a document wholesale. Last write wins.
    pub async fn update(&self, id: &str, mut record: T) -> StoreResult<()> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found(T::COLLECTION, id))?;

        record.set_id(id.to_string());
        *slot = record;
        debug!(collection = T::COLLECTION, id = %id, "Updated document");
        self.notify(&records);

        Ok(())
    }

    /// Removes a document.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(StoreError::not_found(T::COLLECTION, id));
        }
        debug!(collection = T::COLLECTION, id = %id, "Deleted document");
        self.notify(&records);

        Ok(())
    }

    /// Fetches one document by id.
    pub async fn get(&self, id: &str) -> Option<T> {
        self.records.read().await.iter().find(|r| r.id() == id).cloned()
    }

    /// The current ordered collection.
    pub async fn list(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the collection is empty.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Opens a live subscription (current snapshot + future changes).
    pub async fn subscribe(&self) -> Subscription<Vec<T>> {
        let records = self.records.read().await;
        Subscription {
            current: records.clone(),
            updates: self.events.subscribe(),
        }
    }

    fn notify(&self, records: &[T]) {
        // No listeners yet is fine; the send result is irrelevant
        let _ = self.events.send(records.to_vec());
    }
}

// =============================================================================
// Singleton Document
// =============================================================================

/// A single settings-style document with live listeners.
///
/// `set` replaces the whole document (last write wins); there is no
/// field-level merge anywhere in the store boundary.
#[derive(Debug, Clone)]
pub struct SingletonDocument<T: Clone + Send + Sync + 'static> {
    name: &'static str,
    value: Arc<RwLock<Option<T>>>,
    events: broadcast::Sender<Option<T>>,
}

impl<T: Clone + Send + Sync + 'static> SingletonDocument<T> {
    fn new(name: &'static str) -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        SingletonDocument {
            name,
            value: Arc::new(RwLock::new(None)),
            events,
        }
    }

    /// The current document, if one was ever written.
    pub async fn get(&self) -> Option<T> {
        self.value.read().await.clone()
    }

    /// Replaces the document.
    pub async fn set(&self, document: T) {
        let mut value = self.value.write().await;
        *value = Some(document);
        debug!(document = self.name, "Replaced singleton document");
        let _ = self.events.send(value.clone());
    }

    /// Opens a live subscription (current value + future replacements).
    pub async fn subscribe(&self) -> Subscription<Option<T>> {
        let value = self.value.read().await;
        Subscription {
            current: value.clone(),
            updates: self.events.subscribe(),
        }
    }
}

// =============================================================================
// Store Client
// =============================================================================

/// The document-store client.
///
/// Construct once, clone cheaply (all state is behind `Arc`). Stands in for
/// the hosted document database behind the same interface:
/// `create(record) -> id`, `update(id, record)`, `delete(id)`, and live
/// subscriptions yielding the current ordered collection on every change.
///
/// ## Usage
/// ```rust,ignore
/// let client = StoreClient::new();
/// let leads = LeadRepository::new(client.clone());
/// let quotations = QuotationRepository::new(client.clone());
/// ```
#[derive(Debug, Clone)]
pub struct StoreClient {
    leads: Collection<Lead>,
    quotations: Collection<Quotation>,
    inventory: Collection<InventoryItem>,
    settings: SingletonDocument<CompanyProfile>,
}

impl StoreClient {
    /// Creates an empty store.
    pub fn new() -> Self {
        StoreClient {
            leads: Collection::new(),
            quotations: Collection::new(),
            inventory: Collection::new(),
            settings: SingletonDocument::new("settings/companyInfo"),
        }
    }

    /// The leads collection.
    pub fn leads(&self) -> &Collection<Lead> {
        &self.leads
    }

    /// The quotations collection.
    pub fn quotations(&self) -> &Collection<Quotation> {
        &self.quotations
    }

    /// The inventory collection.
    pub fn inventory(&self) -> &Collection<InventoryItem> {
        &self.inventory
    }

    /// The company-profile singleton document.
    pub fn settings(&self) -> &SingletonDocument<CompanyProfile> {
        &self.settings
    }
}

impl Default for StoreClient {
    fn default() -> Self {
        StoreClient::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use leadpanel_core::LeadStatus;

    fn lead(name: &str) -> Lead {
        Lead {
            id: String::new(),
            name: name.to_string(),
            email: format!("{}@client.example", name.to_lowercase()),
            phone: String::new(),
            company: String::new(),
            notes: String::new(),
            status: LeadStatus::New,
            assigned_to: "user-1".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_preserves_order() {
        let client = StoreClient::new();
        let a = client.leads().create(lead("Asha")).await.unwrap();
        let b = client.leads().create(lead("Bilal")).await.unwrap();
        assert_ne!(a, b);

        let all = client.leads().list().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Asha");
        assert_eq!(all[0].id, a);
        assert_eq!(all[1].name, "Bilal");
    }

    #[tokio::test]
    async fn test_update_replaces_wholesale_last_write_wins() {
        let client = StoreClient::new();
        let id = client.leads().create(lead("Asha")).await.unwrap();

        let mut first = client.leads().get(&id).await.unwrap();
        first.status = LeadStatus::Contacted;
        let mut second = client.leads().get(&id).await.unwrap();
        second.status = LeadStatus::Interested;

        client.leads().update(&id, first).await.unwrap();
        client.leads().update(&id, second).await.unwrap();

        let stored = client.leads().get(&id).await.unwrap();
        assert_eq!(stored.status, LeadStatus::Interested);
    }

    #[tokio::test]
    async fn test_update_missing_document_is_not_found() {
        let client = StoreClient::new();
        let err = client.leads().update("ghost", lead("Asha")).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(err.to_string(), "leads document not found: ghost");
    }

    #[tokio::test]
    async fn test_delete_removes_document() {
        let client = StoreClient::new();
        let id = client.leads().create(lead("Asha")).await.unwrap();
        client.leads().delete(&id).await.unwrap();
        assert!(client.leads().is_empty().await);
        assert!(client.leads().delete(&id).await.is_err());
    }

    #[tokio::test]
    async fn test_subscription_yields_full_snapshots() {
        let client = StoreClient::new();
        client.leads().create(lead("Asha")).await.unwrap();

        let mut sub = client.leads().subscribe().await;
        assert_eq!(sub.current.len(), 1);

        client.leads().create(lead("Bilal")).await.unwrap();
        let snapshot = sub.updates.recv().await.unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[1].name, "Bilal");
    }

    #[tokio::test]
    async fn test_singleton_replace_and_subscribe() {
        let client = StoreClient::new();
        assert!(client.settings().get().await.is_none());

        let mut sub = client.settings().subscribe().await;
        assert!(sub.current.is_none());

        client
            .settings()
            .set(CompanyProfile {
                name: "Acme".to_string(),
                ..CompanyProfile::default()
            })
            .await;

        let received = sub.updates.recv().await.unwrap().unwrap();
        assert_eq!(received.name, "Acme");

        // Whole-document replacement: unset fields do not survive
        client
            .settings()
            .set(CompanyProfile {
                address: "Plot 9".to_string(),
                ..CompanyProfile::default()
            })
            .await;
        let stored = client.settings().get().await.unwrap();
        assert_eq!(stored.name, "");
        assert_eq!(stored.address, "Plot 9");
    }
}
