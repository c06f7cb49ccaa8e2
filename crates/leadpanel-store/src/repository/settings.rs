//! # Settings Repository
//!
//! Store operations for the company-profile singleton document.
//!
//! The profile is read by the quotation save path (default payment terms)
//! and by the share codec (display fields and logo); it never participates
//! in totals computation.

use tracing::debug;

use leadpanel_core::CompanyProfile;

use crate::client::StoreClient;
use crate::error::StoreResult;
use crate::Subscription;

/// Repository for company-profile store operations.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    client: StoreClient,
}

impl SettingsRepository {
    /// Creates a new SettingsRepository.
    pub fn new(client: StoreClient) -> Self {
        SettingsRepository { client }
    }

    /// Replaces the company profile.
    ///
    /// The logo cap is enforced here, before the write: an oversized inline
    /// logo would bloat every stored quotation share link.
    pub async fn save(&self, profile: CompanyProfile) -> StoreResult<()> {
        leadpanel_core::validation::validate_company_profile(&profile)?;

        debug!(company = %profile.name, "Saving company profile");
        self.client.settings().set(profile).await;
        Ok(())
    }

    /// The current company profile, if one was ever saved.
    pub async fn get(&self) -> Option<CompanyProfile> {
        self.client.settings().get().await
    }

    /// Opens a live subscription on the company profile.
    pub async fn subscribe(&self) -> Subscription<Option<CompanyProfile>> {
        self.client.settings().subscribe().await
    }
}
