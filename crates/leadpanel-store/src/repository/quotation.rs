//! # Quotation Repository
//!
//! Store operations for quotations.
//!
//! ## Quotation Save Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Every Save Goes Through the Engine                  │
//! │                                                                         │
//! │  form submit (create or edit)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  payment terms refreshed from the company profile                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  recompute_totals() ← stored totals are OVERWRITTEN, whatever the      │
//! │       │               caller put in them; items + tax config are       │
//! │       │               the only source of truth                         │
//! │       ▼                                                                 │
//! │  validate_quotation() ← negatives / out-of-range rates rejected        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  create: identifier QUO-<year>-<NNNN> assigned, then written           │
//! │  update: full replacement, identifier and created_at preserved         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Datelike, Utc};
use tracing::debug;

use leadpanel_core::{share, Quotation};

use crate::client::StoreClient;
use crate::error::{StoreError, StoreResult};
use crate::Subscription;

/// Repository for quotation store operations.
#[derive(Debug, Clone)]
pub struct QuotationRepository {
    client: StoreClient,
}

impl QuotationRepository {
    /// Creates a new QuotationRepository.
    pub fn new(client: StoreClient) -> Self {
        QuotationRepository { client }
    }

    /// Persists a new quotation.
    ///
    /// Assigns the next sequential identifier, stamps the creation time,
    /// refreshes payment terms from the company profile, and recomputes the
    /// derived totals. The caller's totals fields are ignored.
    pub async fn create(&self, mut quotation: Quotation) -> StoreResult<String> {
        self.prepare_for_save(&mut quotation).await?;

        let existing = self.client.quotations().len().await;
        quotation.identifier = Quotation::next_identifier(Utc::now().year(), existing);
        quotation.created_at = Utc::now();

        debug!(identifier = %quotation.identifier, "Creating quotation");
        self.client.quotations().create(quotation).await
    }

    /// Replaces a stored quotation wholesale (edit-save).
    ///
    /// No partial-field patching: the record passes through the pricing
    /// engine again and its totals are overwritten. Identifier and creation
    /// time travel with the record unchanged.
    pub async fn update(&self, id: &str, mut quotation: Quotation) -> StoreResult<()> {
        self.prepare_for_save(&mut quotation).await?;

        debug!(id = %id, identifier = %quotation.identifier, "Updating quotation");
        self.client.quotations().update(id, quotation).await
    }

    /// Deletes a quotation.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.client.quotations().delete(id).await
    }

    /// Fetches one quotation by store id.
    pub async fn get(&self, id: &str) -> Option<Quotation> {
        self.client.quotations().get(id).await
    }

    /// The current ordered quotation collection.
    pub async fn list(&self) -> Vec<Quotation> {
        self.client.quotations().list().await
    }

    /// Opens a live subscription on the quotation collection.
    pub async fn subscribe(&self) -> Subscription<Vec<Quotation>> {
        self.client.quotations().subscribe().await
    }

    /// Produces the public share URL for a stored quotation.
    ///
    /// Freezes the stored record plus the current company profile into a
    /// token (see [`leadpanel_core::share`]); later edits to the record are
    /// not reflected in the issued link. The clipboard/messaging hand-off
    /// is the caller's job.
    pub async fn share_url(&self, id: &str, base_url: &str) -> StoreResult<String> {
        let quotation = self
            .get(id)
            .await
            .ok_or_else(|| StoreError::not_found("quotations", id))?;
        let profile = self.client.settings().get().await.unwrap_or_default();

        let token = share::encode(&quotation, &profile)?;
        Ok(share::share_url(base_url, &token))
    }

    /// Common save-path preparation: payment terms, totals, validation.
    async fn prepare_for_save(&self, quotation: &mut Quotation) -> StoreResult<()> {
        // Payment terms always mirror the company profile at save time
        quotation.payment_terms = self
            .client
            .settings()
            .get()
            .await
            .map(|profile| profile.payment_terms)
            .unwrap_or_default();

        quotation.recompute_totals();
        leadpanel_core::validation::validate_quotation(quotation)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use leadpanel_core::{Amount, CompanyProfile, Currency, LineItem, TaxConfig, Totals};

    fn draft(qty: f64, price: f64, rate: f64) -> Quotation {
        Quotation {
            id: String::new(),
            identifier: String::new(),
            lead_id: None,
            client_name: "Priya Sharma".to_string(),
            client_email: "priya@client.example".to_string(),
            client_company: String::new(),
            client_address: String::new(),
            issue_date: NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
            currency: Currency::Inr,
            items: vec![LineItem {
                description: "Install".to_string(),
                tax_code: String::new(),
                quantity: Amount::new(qty),
                unit_price: Amount::new(price),
                tax_rate_percent: Amount::new(rate),
            }],
            tax: TaxConfig {
                cgst_rate: Amount::new(9.0),
                sgst_rate: Amount::new(9.0),
                igst_rate: Amount::zero(),
            },
            payment_terms: String::new(),
            totals: Totals::default(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_identifiers() {
        let repo = QuotationRepository::new(StoreClient::new());
        let year = Utc::now().year();

        let first = repo.create(draft(2.0, 100.0, 18.0)).await.unwrap();
        let second = repo.create(draft(1.0, 50.0, 0.0)).await.unwrap();

        assert_eq!(
            repo.get(&first).await.unwrap().identifier,
            format!("QUO-{}-0001", year)
        );
        assert_eq!(
            repo.get(&second).await.unwrap().identifier,
            format!("QUO-{}-0002", year)
        );
    }

    #[tokio::test]
    async fn test_save_overwrites_hand_edited_totals() {
        let repo = QuotationRepository::new(StoreClient::new());

        let mut quotation = draft(2.0, 100.0, 18.0);
        quotation.totals.grand_total = 999_999.0; // never trusted
        let id = repo.create(quotation).await.unwrap();

        let stored = repo.get(&id).await.unwrap();
        assert_eq!(stored.totals.subtotal, 200.0);
        assert_eq!(stored.totals.total_tax, 72.0);
        assert_eq!(stored.totals.grand_total, 272.0);
        let identifier = stored.identifier.clone();

        // Edit-save runs the engine again
        let mut edited = stored.clone();
        edited.items[0].quantity = Amount::new(3.0);
        edited.totals.grand_total = 1.0;
        repo.update(&id, edited).await.unwrap();

        let stored = repo.get(&id).await.unwrap();
        assert_eq!(stored.totals.subtotal, 300.0);
        assert_eq!(stored.totals.grand_total, 408.0);
        // The business identifier travels with the record unchanged
        assert_eq!(stored.identifier, identifier);
    }

    #[tokio::test]
    async fn test_payment_terms_mirror_company_profile() {
        let client = StoreClient::new();
        client
            .settings()
            .set(CompanyProfile {
                name: "Acme".to_string(),
                payment_terms: "Net 30.".to_string(),
                ..CompanyProfile::default()
            })
            .await;

        let repo = QuotationRepository::new(client);
        let id = repo.create(draft(1.0, 10.0, 0.0)).await.unwrap();
        assert_eq!(repo.get(&id).await.unwrap().payment_terms, "Net 30.");
    }

    #[tokio::test]
    async fn test_negative_quantity_rejected_before_write() {
        let repo = QuotationRepository::new(StoreClient::new());
        let err = repo.create(draft(-2.0, 100.0, 0.0)).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(repo.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_share_url_round_trips() {
        let client = StoreClient::new();
        client
            .settings()
            .set(CompanyProfile {
                name: "Acme".to_string(),
                ..CompanyProfile::default()
            })
            .await;

        let repo = QuotationRepository::new(client);
        let id = repo.create(draft(2.0, 100.0, 18.0)).await.unwrap();

        let url = repo.share_url(&id, "https://leads.example.com/app").await.unwrap();
        let fragment = url.split_once('#').map(|(_, f)| format!("#{}", f)).unwrap();

        let payload = share::from_fragment(&fragment).unwrap();
        assert_eq!(payload.company_info.name, "Acme");
        assert_eq!(payload.quotation.totals.grand_total, 272.0);
        assert_eq!(
            payload.quotation.identifier,
            repo.get(&id).await.unwrap().identifier
        );
    }

    #[tokio::test]
    async fn test_share_url_for_missing_quotation_is_not_found() {
        let repo = QuotationRepository::new(StoreClient::new());
        let err = repo.share_url("ghost", "https://x.example").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}
