//! # Lead Repository
//!
//! Store operations for sales leads.
//!
//! ## Lead Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CREATE   form submit ──► validated ──► authorship tagged ──► written  │
//! │  STATUS   dropdown change ──► read-modify-write (full replacement)     │
//! │  DELETE   explicit user action from the detail view                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tracing::debug;

use leadpanel_core::{Lead, LeadStatus};

use crate::client::StoreClient;
use crate::error::{StoreError, StoreResult};
use crate::Subscription;

/// Repository for lead store operations.
#[derive(Debug, Clone)]
pub struct LeadRepository {
    client: StoreClient,
}

impl LeadRepository {
    /// Creates a new LeadRepository.
    pub fn new(client: StoreClient) -> Self {
        LeadRepository { client }
    }

    /// Persists a new lead.
    ///
    /// Tags authorship with the caller-supplied user id (from the identity
    /// collaborator) and stamps the creation time.
    pub async fn create(&self, mut lead: Lead, author_id: &str) -> StoreResult<String> {
        lead.assigned_to = author_id.to_string();
        lead.created_at = Utc::now();
        leadpanel_core::validation::validate_lead(&lead)?;

        debug!(name = %lead.name, "Creating lead");
        self.client.leads().create(lead).await
    }

    /// Moves a lead to a new pipeline status.
    ///
    /// The store contract has no field patching, so this is a
    /// read-modify-write full replacement.
    pub async fn update_status(&self, id: &str, status: LeadStatus) -> StoreResult<()> {
        let mut lead = self
            .client
            .leads()
            .get(id)
            .await
            .ok_or_else(|| StoreError::not_found("leads", id))?;
        lead.status = status;

        debug!(id = %id, status = status.label(), "Updating lead status");
        self.client.leads().update(id, lead).await
    }

    /// Deletes a lead.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.client.leads().delete(id).await
    }

    /// Fetches one lead by store id.
    pub async fn get(&self, id: &str) -> Option<Lead> {
        self.client.leads().get(id).await
    }

    /// The current ordered lead collection.
    pub async fn list(&self) -> Vec<Lead> {
        self.client.leads().list().await
    }

    /// Opens a live subscription on the lead collection.
    pub async fn subscribe(&self) -> Subscription<Vec<Lead>> {
        self.client.leads().subscribe().await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str) -> Lead {
        Lead {
            id: String::new(),
            name: name.to_string(),
            email: email.to_string(),
            phone: "98450 00000".to_string(),
            company: "Sharma Traders".to_string(),
            notes: String::new(),
            status: LeadStatus::New,
            assigned_to: String::new(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_tags_authorship() {
        let repo = LeadRepository::new(StoreClient::new());
        let id = repo
            .create(draft("Priya Sharma", "priya@client.example"), "user-42")
            .await
            .unwrap();

        let stored = repo.get(&id).await.unwrap();
        assert_eq!(stored.assigned_to, "user-42");
        assert_eq!(stored.status, LeadStatus::New);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_lead() {
        let repo = LeadRepository::new(StoreClient::new());
        let err = repo.create(draft("", "priya@client.example"), "user-42").await;
        assert!(matches!(err, Err(StoreError::Validation(_))));
        assert!(repo.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_update_status_walks_the_pipeline() {
        let repo = LeadRepository::new(StoreClient::new());
        let id = repo
            .create(draft("Priya Sharma", "priya@client.example"), "user-42")
            .await
            .unwrap();

        repo.update_status(&id, LeadStatus::QuotationRequest).await.unwrap();
        assert_eq!(
            repo.get(&id).await.unwrap().status,
            LeadStatus::QuotationRequest
        );

        let err = repo.update_status("ghost", LeadStatus::Lost).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}
