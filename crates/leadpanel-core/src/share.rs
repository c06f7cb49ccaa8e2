//! # Public Share Codec
//!
//! Encodes a quotation + company profile snapshot into a URL-safe token so
//! anyone holding the link can view the quotation without authentication,
//! and decodes such tokens back into the view model.
//!
//! ## Two-Stage Codec
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Share Link Pipeline                              │
//! │                                                                         │
//! │  ENCODE                                                                 │
//! │  (quotation, companyInfo)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  versioned envelope { v, quotation, companyInfo }                       │
//! │       │  canonical form: compact JSON                                   │
//! │       ▼                                                                 │
//! │  URL-safe base64, no padding ──► token                                  │
//! │       │  ceiling check (PayloadTooLarge)                                │
//! │       ▼                                                                 │
//! │  https://host/app#/quote/<token>                                        │
//! │                                                                         │
//! │  DECODE (exact inverse, fully offline)                                  │
//! │  fragment ──► strip #/quote/ ──► base64 ──► UTF-8 ──► JSON ──► version  │
//! │                   │                 │          │         │        │     │
//! │                   ▼                 ▼          ▼         ▼        ▼     │
//! │              not a share link   DecodeError on any failure:             │
//! │              (normal flow)      fall back to the authenticated flow     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Semantics
//! The token freezes the quotation at the moment of sharing. Later edits to
//! the stored record are NOT reflected in previously issued links.
//!
//! Decode touches no network and no store: the public view works with only
//! the URL in hand.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{DecodeError, ShareError};
use crate::types::{CompanyProfile, Quotation};

// =============================================================================
// Constants
// =============================================================================

/// Fragment marker that routes an incoming URL to the public quotation view
/// before any authentication step.
pub const SHARE_ROUTE_MARKER: &str = "#/quote/";

/// Version of the canonical envelope this build reads and writes.
/// Bumped on any schema change so stale tokens are rejected, not misparsed.
pub const SHARE_FORMAT_VERSION: u8 = 1;

/// Ceiling on the encoded token length, in bytes.
///
/// Far below the ~2 MB practical URL limit of mainstream browsers, yet
/// large enough for any quotation without an embedded logo. A profile
/// carrying a full-size logo can exceed this; encoding then fails fast with
/// [`ShareError::PayloadTooLarge`] instead of emitting a link that breaks
/// in transit.
pub const MAX_TOKEN_BYTES: usize = 256 * 1024;

// =============================================================================
// Share Payload
// =============================================================================

/// The envelope a share token carries: one frozen (quotation, company
/// profile) pair plus the format version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SharePayload {
    /// Canonical-form version, checked on decode.
    #[serde(rename = "v")]
    pub version: u8,

    /// The quotation snapshot.
    pub quotation: Quotation,

    /// The issuing company's profile snapshot (display fields only).
    pub company_info: CompanyProfile,
}

impl SharePayload {
    /// Wraps a pair in the current-version envelope.
    pub fn new(quotation: Quotation, company_info: CompanyProfile) -> Self {
        SharePayload {
            version: SHARE_FORMAT_VERSION,
            quotation,
            company_info,
        }
    }
}

// =============================================================================
// Encode
// =============================================================================

/// Encodes a quotation + company profile into a URL-safe share token.
///
/// The canonical text form is compact JSON (serde escaping makes any field
/// content safe); the binary-to-text transform is URL-safe base64 without
/// padding, so the token needs no percent-encoding inside a fragment.
///
/// ## Errors
/// - [`ShareError::PayloadTooLarge`] when the token would exceed
///   [`MAX_TOKEN_BYTES`]
pub fn encode(quotation: &Quotation, company_info: &CompanyProfile) -> Result<String, ShareError> {
    let payload = SharePayload::new(quotation.clone(), company_info.clone());
    let json = serde_json::to_string(&payload).map_err(ShareError::Serialize)?;
    let token = URL_SAFE_NO_PAD.encode(json.as_bytes());

    if token.len() > MAX_TOKEN_BYTES {
        return Err(ShareError::PayloadTooLarge {
            bytes: token.len(),
            max: MAX_TOKEN_BYTES,
        });
    }

    Ok(token)
}

/// Builds the full shareable URL for a token.
///
/// ## Example
/// ```rust,ignore
/// let token = share::encode(&quotation, &company)?;
/// let url = share::share_url("https://leads.example.com/app", &token);
/// // https://leads.example.com/app#/quote/eyJ2IjoxLCJxdW90YXRpb24i...
/// ```
pub fn share_url(base_url: &str, token: &str) -> String {
    format!("{}{}{}", base_url, SHARE_ROUTE_MARKER, token)
}

// =============================================================================
// Decode
// =============================================================================

/// Decodes a share token back into its envelope.
///
/// Exact inverse of [`encode`]: reverse the base64 transform, parse the
/// canonical JSON, check the version. Any failure at any stage is a
/// [`DecodeError`] - never a panic, never partial data.
pub fn decode(token: &str) -> Result<SharePayload, DecodeError> {
    let bytes = URL_SAFE_NO_PAD.decode(token.trim().as_bytes())?;
    let json = String::from_utf8(bytes)?;
    let payload: SharePayload = serde_json::from_str(&json)?;

    if payload.version != SHARE_FORMAT_VERSION {
        return Err(DecodeError::UnsupportedVersion {
            found: payload.version,
            supported: SHARE_FORMAT_VERSION,
        });
    }

    Ok(payload)
}

/// Extracts the token from a URL fragment, if it carries the share marker.
///
/// Accepts the fragment with or without its leading `#`. Returns `None`
/// when the marker is absent - the fragment is not a share link.
pub fn route_token(fragment: &str) -> Option<&str> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    let marker = &SHARE_ROUTE_MARKER[1..]; // marker without the leading '#'
    fragment.strip_prefix(marker)
}

/// Routes an incoming URL fragment to a decoded share payload.
///
/// Returns `Some(payload)` only when the fragment carries the share marker
/// AND the token decodes; in every other case the caller should proceed to
/// the normal authenticated entry path. This is the single decision point
/// the host's router needs.
pub fn from_fragment(fragment: &str) -> Option<SharePayload> {
    decode(route_token(fragment)?).ok()
}

// =============================================================================
// Unit Tests
// =============================================================================
