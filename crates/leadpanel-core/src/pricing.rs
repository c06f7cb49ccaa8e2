//! # Pricing Engine
//!
//! Derives a quotation's totals from its line items and tax configuration.
//!
//! ## Totals Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     How Totals Are Derived                              │
//! │                                                                         │
//! │  items ──► one linear scan ──► subtotal        = Σ qty × price          │
//! │                           └──► item_tax_total  = Σ line × rate/100      │
//! │                                                                         │
//! │  subtotal ──► cgst = subtotal × cgst_rate/100  ┐                        │
//! │          └──► sgst = subtotal × sgst_rate/100  ├─ pre-tax subtotal,     │
//! │          └──► igst = subtotal × igst_rate/100  ┘  never compounding     │
//! │                                                                         │
//! │  total_tax   = item_tax_total + cgst + sgst + igst                      │
//! │  grand_total = subtotal + total_tax                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Rules
//! - Pure and deterministic: no I/O, no state, no memoization. Callers
//!   re-invoke on every edit and every save; the line items are always the
//!   source of truth for totals.
//! - Never fails: invalid numeric input was already degraded to zero by
//!   [`Amount`](crate::types::Amount).
//! - Stored values keep full float precision. Two-decimal rounding is a
//!   presentation concern - see [`format_amount`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{LineItem, TaxConfig};

// =============================================================================
// Totals
// =============================================================================

/// The derived totals of a quotation.
///
/// Persisted alongside the quotation for display, but never trusted as
/// input: every save overwrites these from items + tax config.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct Totals {
    /// Pre-tax sum of all line subtotals.
    pub subtotal: f64,

    /// Sum of the item-level tax amounts.
    pub item_tax_total: f64,

    /// Central tax on the pre-tax subtotal.
    pub cgst: f64,

    /// State tax on the pre-tax subtotal.
    pub sgst: f64,

    /// Integrated tax on the pre-tax subtotal.
    pub igst: f64,

    /// item_tax_total + cgst + sgst + igst.
    pub total_tax: f64,

    /// subtotal + total_tax.
    pub grand_total: f64,
}

// =============================================================================
// Totals Computation
// =============================================================================

/// Computes a quotation's totals from its line items and tax rates.
///
/// Pure function: same input, same output, at any time. O(n) in the item
/// count - one scan accumulates subtotal and item-level tax together, then
/// the three jurisdictional rates are applied to the final subtotal in
/// three independent multiplications.
///
/// ## Example
/// ```rust
/// use leadpanel_core::pricing::compute_totals;
/// use leadpanel_core::types::{Amount, LineItem, TaxConfig};
///
/// let items = vec![LineItem {
///     description: "Install".to_string(),
///     tax_code: String::new(),
///     quantity: Amount::new(2.0),
///     unit_price: Amount::new(100.0),
///     tax_rate_percent: Amount::new(18.0),
/// }];
/// let tax = TaxConfig {
///     cgst_rate: Amount::new(9.0),
///     sgst_rate: Amount::new(9.0),
///     igst_rate: Amount::zero(),
/// };
///
/// let totals = compute_totals(&items, &tax);
/// assert_eq!(totals.subtotal, 200.0);
/// assert_eq!(totals.total_tax, 72.0);
/// assert_eq!(totals.grand_total, 272.0);
/// ```
pub fn compute_totals(items: &[LineItem], tax: &TaxConfig) -> Totals {
    let mut subtotal = 0.0;
    let mut item_tax_total = 0.0;

    for item in items {
        let line = item.subtotal();
        subtotal += line;
        item_tax_total += line * item.tax_rate_percent.value() / 100.0;
    }

    // Jurisdictional taxes apply to the pre-tax subtotal only - they never
    // compound on item-level tax or on each other.
    let cgst = subtotal * tax.cgst_rate.value() / 100.0;
    let sgst = subtotal * tax.sgst_rate.value() / 100.0;
    let igst = subtotal * tax.igst_rate.value() / 100.0;

    let total_tax = item_tax_total + cgst + sgst + igst;

    Totals {
        subtotal,
        item_tax_total,
        cgst,
        sgst,
        igst,
        total_tax,
        grand_total: subtotal + total_tax,
    }
}

// =============================================================================
// Presentation Formatting
// =============================================================================

/// Formats a stored amount for display, rounded to two decimals.
///
/// Rounding happens HERE and only here - stored totals keep full float
/// precision.
///
/// ## Example
/// ```rust
/// use leadpanel_core::pricing::format_amount;
///
/// assert_eq!(format_amount(81.5), "81.50");
/// assert_eq!(format_amount(1.005), "1.00");
/// assert_eq!(format_amount(0.0), "0.00");
/// ```
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Amount;

    const EPS: f64 = 1e-9;

    fn item(qty: f64, price: f64, rate: f64) -> LineItem {
        LineItem {
            description: "item".to_string(),
            tax_code: String::new(),
            quantity: Amount::new(qty),
            unit_price: Amount::new(price),
            tax_rate_percent: Amount::new(rate),
        }
    }

    fn rates(cgst: f64, sgst: f64, igst: f64) -> TaxConfig {
        TaxConfig {
            cgst_rate: Amount::new(cgst),
            sgst_rate: Amount::new(sgst),
            igst_rate: Amount::new(igst),
        }
    }

    #[test]
    fn test_empty_items_yield_zero_totals() {
        let totals = compute_totals(&[], &rates(9.0, 9.0, 0.0));
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.total_tax, 0.0);
        assert_eq!(totals.grand_total, 0.0);
    }

    /// Scenario: 2 × 100 at 18% item tax, CGST 9% + SGST 9%.
    #[test]
    fn test_intra_state_quotation() {
        let totals = compute_totals(&[item(2.0, 100.0, 18.0)], &rates(9.0, 9.0, 0.0));
        assert!((totals.subtotal - 200.0).abs() < EPS);
        assert!((totals.item_tax_total - 36.0).abs() < EPS);
        assert!((totals.cgst - 18.0).abs() < EPS);
        assert!((totals.sgst - 18.0).abs() < EPS);
        assert_eq!(totals.igst, 0.0);
        assert!((totals.total_tax - 72.0).abs() < EPS);
        assert!((totals.grand_total - 272.0).abs() < EPS);
    }

    /// Scenario: mixed item tax rates, no jurisdictional taxes.
    #[test]
    fn test_item_tax_only() {
        let totals = compute_totals(
            &[item(1.0, 50.0, 0.0), item(3.0, 10.0, 5.0)],
            &rates(0.0, 0.0, 0.0),
        );
        assert!((totals.subtotal - 80.0).abs() < EPS);
        assert!((totals.item_tax_total - 1.5).abs() < EPS);
        assert!((totals.total_tax - 1.5).abs() < EPS);
        assert!((totals.grand_total - 81.5).abs() < EPS);
    }

    #[test]
    fn test_igst_only_path() {
        let totals = compute_totals(&[item(1.0, 1000.0, 0.0)], &rates(0.0, 0.0, 18.0));
        assert!((totals.igst - 180.0).abs() < EPS);
        assert!((totals.grand_total - 1180.0).abs() < EPS);
    }

    #[test]
    fn test_engine_sums_all_rates_without_exclusivity() {
        // The engine does not enforce CGST+SGST vs IGST exclusivity
        let totals = compute_totals(&[item(1.0, 100.0, 0.0)], &rates(9.0, 9.0, 18.0));
        assert!((totals.total_tax - 36.0).abs() < EPS);
    }

    #[test]
    fn test_jurisdictional_tax_never_compounds_on_item_tax() {
        // 100 at 10% item tax = 110 gross, but CGST applies to 100, not 110
        let totals = compute_totals(&[item(1.0, 100.0, 10.0)], &rates(10.0, 0.0, 0.0));
        assert!((totals.cgst - 10.0).abs() < EPS);
        assert!((totals.grand_total - 120.0).abs() < EPS);
    }

    #[test]
    fn test_invalid_fields_contribute_zero() {
        // A half-typed row ("", "abc") degrades to zero instead of failing
        let ghost = LineItem {
            description: "mid-edit".to_string(),
            tax_code: String::new(),
            quantity: Amount::parse(""),
            unit_price: Amount::parse("abc"),
            tax_rate_percent: Amount::parse("18"),
        };
        let totals = compute_totals(&[item(2.0, 100.0, 0.0), ghost], &rates(0.0, 0.0, 0.0));
        assert!((totals.subtotal - 200.0).abs() < EPS);
        assert_eq!(totals.item_tax_total, 0.0);
    }

    #[test]
    fn test_invariants_hold_for_arbitrary_inputs() {
        // grand_total == subtotal + total_tax and the tax breakdown identity
        let fixtures = [
            (vec![item(2.5, 19.99, 12.0), item(1.0, 0.01, 28.0)], rates(6.0, 6.0, 0.0)),
            (vec![item(7.0, 3.33, 5.0)], rates(0.0, 0.0, 12.0)),
            (vec![], rates(18.0, 18.0, 18.0)),
        ];
        for (items, tax) in fixtures {
            let t = compute_totals(&items, &tax);
            assert!((t.grand_total - (t.subtotal + t.total_tax)).abs() < EPS);
            assert!(
                (t.total_tax - (t.item_tax_total + t.cgst + t.sgst + t.igst)).abs() < EPS
            );
        }
    }

    #[test]
    fn test_recompute_is_deterministic() {
        let items = vec![item(2.0, 100.0, 18.0)];
        let tax = rates(9.0, 9.0, 0.0);
        assert_eq!(compute_totals(&items, &tax), compute_totals(&items, &tax));
    }

    #[test]
    fn test_format_amount_two_decimals() {
        assert_eq!(format_amount(272.0), "272.00");
        assert_eq!(format_amount(81.5), "81.50");
        assert_eq!(format_amount(36.666), "36.67");
    }
}
