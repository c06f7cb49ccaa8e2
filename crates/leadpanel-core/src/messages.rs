//! # Share Messages & Deep Links
//!
//! Builds the courtesy message and the WhatsApp/email deep links the
//! clipboard/external-share collaborator hands off to the platform.
//!
//! ## Hand-Off Targets
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  share_message() ──┬──► whatsapp_share_url()  api.whatsapp.com/send     │
//! │                    └──► email_share_url()     mailto:?subject=&body=    │
//! │                                                                         │
//! │  share::encode() ─────► share::share_url()    copied to clipboard       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure string builders. Query values are percent-encoded; opening the URL
//! is the collaborator's job.

use crate::pricing::format_amount;
use crate::types::{CompanyProfile, Quotation};

/// The courtesy message accompanying a shared quotation.
///
/// ## Example
/// ```rust,ignore
/// let text = share_message(&quotation, &company);
/// // Hello Priya Sharma,
/// //
/// // Here is your quotation QUO-2024-0001 for a total of ₹272.00.
/// //
/// // Thank you,
/// // Acme
/// ```
pub fn share_message(quotation: &Quotation, company: &CompanyProfile) -> String {
    format!(
        "Hello {},\n\nHere is your quotation {} for a total of {}{}.\n\nThank you,\n{}",
        quotation.client_name,
        quotation.identifier,
        quotation.currency.symbol(),
        format_amount(quotation.totals.grand_total),
        company.name
    )
}

/// WhatsApp deep link carrying the share message.
pub fn whatsapp_share_url(quotation: &Quotation, company: &CompanyProfile) -> String {
    format!(
        "https://api.whatsapp.com/send?text={}",
        urlencoding::encode(&share_message(quotation, company))
    )
}

/// `mailto:` deep link addressed to the client, with subject and body.
pub fn email_share_url(quotation: &Quotation, company: &CompanyProfile) -> String {
    let subject = format!("Quotation {} from {}", quotation.identifier, company.name);
    format!(
        "mailto:{}?subject={}&body={}",
        quotation.client_email,
        urlencoding::encode(&subject),
        urlencoding::encode(&share_message(quotation, company))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::compute_totals;
    use crate::types::{Amount, Currency, LineItem, TaxConfig};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn fixture() -> (Quotation, CompanyProfile) {
        let items = vec![LineItem {
            description: "Install".to_string(),
            tax_code: String::new(),
            quantity: Amount::new(2.0),
            unit_price: Amount::new(100.0),
            tax_rate_percent: Amount::new(18.0),
        }];
        let tax = TaxConfig {
            cgst_rate: Amount::new(9.0),
            sgst_rate: Amount::new(9.0),
            igst_rate: Amount::zero(),
        };
        let totals = compute_totals(&items, &tax);
        let quotation = Quotation {
            id: "doc-1".to_string(),
            identifier: "QUO-2024-0001".to_string(),
            lead_id: None,
            client_name: "Priya Sharma".to_string(),
            client_email: "priya@client.example".to_string(),
            client_company: String::new(),
            client_address: String::new(),
            issue_date: NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
            currency: Currency::Inr,
            items,
            tax,
            payment_terms: String::new(),
            totals,
            created_at: Utc.with_ymd_and_hms(2024, 3, 18, 9, 30, 0).unwrap(),
        };
        let company = CompanyProfile {
            name: "Acme".to_string(),
            ..CompanyProfile::default()
        };
        (quotation, company)
    }

    #[test]
    fn test_share_message_renders_rounded_total() {
        let (quotation, company) = fixture();
        let text = share_message(&quotation, &company);
        assert!(text.starts_with("Hello Priya Sharma,"));
        assert!(text.contains("quotation QUO-2024-0001"));
        assert!(text.contains("₹272.00"));
        assert!(text.ends_with("Thank you,\nAcme"));
    }

    #[test]
    fn test_whatsapp_url_is_percent_encoded() {
        let (quotation, company) = fixture();
        let url = whatsapp_share_url(&quotation, &company);
        assert!(url.starts_with("https://api.whatsapp.com/send?text=Hello%20Priya"));
        // Newlines and the currency symbol must not appear raw
        assert!(!url.contains('\n'));
        assert!(!url.contains('₹'));
        assert!(url.contains("%0A"));
    }

    #[test]
    fn test_email_url_addresses_the_client() {
        let (quotation, company) = fixture();
        let url = email_share_url(&quotation, &company);
        assert!(url.starts_with("mailto:priya@client.example?subject="));
        assert!(url.contains("Quotation%20QUO-2024-0001%20from%20Acme"));
        assert!(url.contains("&body="));
    }
}
