//! # Checkout Calculator
//!
//! Pure total computation over an order's lines.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  subtotal = Σ (line price × quantity)                           │
//! │  total    = subtotal + tax(subtotal, rate)                      │
//! │                                                                 │
//! │  2 × Cheeseburger  $9.99 ──►  $19.98                            │
//! │  1 × Fries         $3.99 ──►   $3.99                            │
//! │                              ────────                           │
//! │  subtotal                     $23.97                            │
//! │  tax @ 7%                      $1.68                            │
//! │  total                        $25.65                            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No side effects: callable repeatedly without mutating the order, and the
//! same order at the same rate always produces the same total. The rate is a
//! checkout-time input, never persisted per order, so committed totals are
//! immune to later rate changes.

use crate::money::Money;
use crate::order::Order;
use crate::types::TaxRate;

/// Sums the order's lines before tax.
pub fn order_subtotal(order: &Order) -> Money {
    order
        .lines()
        .fold(Money::zero(), |acc, line| acc + line.line_total())
}

/// Computes the tax-inclusive total for an order at the given rate, rounded
/// to the cent.
pub fn order_total(order: &Order, rate: TaxRate) -> Money {
    order_subtotal(order).with_tax(rate)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MenuItem;

    fn item(id: i64, price_cents: i64) -> MenuItem {
        MenuItem::new(id, format!("Item {}", id), "", price_cents).unwrap()
    }

    #[test]
    fn test_empty_order_totals_zero() {
        let order = Order::new(1, "");
        assert_eq!(order_subtotal(&order), Money::zero());
        assert_eq!(order_total(&order, TaxRate::from_bps(700)), Money::zero());
    }

    #[test]
    fn test_subtotal_sums_lines() {
        let mut order = Order::new(1, "");
        order.add_item(item(1, 999), 2).unwrap();
        order.add_item(item(3, 399), 1).unwrap();

        assert_eq!(order_subtotal(&order).cents(), 2397);
    }

    #[test]
    fn test_total_includes_tax_with_rounding() {
        // 3 × $9.99 = $29.97; +7% = $32.0679 → $32.07
        let mut order = Order::new(1, "");
        order.add_item(item(1, 999), 2).unwrap();
        order.add_item(item(1, 999), 1).unwrap();

        assert_eq!(order.line_count(), 1);
        assert_eq!(order_total(&order, TaxRate::from_bps(700)).cents(), 3207);
    }

    #[test]
    fn test_total_is_deterministic_and_side_effect_free() {
        let mut order = Order::new(1, "");
        order.add_item(item(1, 249), 4).unwrap();

        let before = order.clone();
        let first = order_total(&order, TaxRate::default());
        let second = order_total(&order, TaxRate::default());

        assert_eq!(first, second);
        assert_eq!(order, before);
    }

    #[test]
    fn test_rate_is_an_input_not_state() {
        let mut order = Order::new(1, "");
        order.add_item(item(1, 1000), 1).unwrap();

        // Same order, different rates: only the argument matters
        assert_eq!(order_total(&order, TaxRate::zero()).cents(), 1000);
        assert_eq!(order_total(&order, TaxRate::from_bps(700)).cents(), 1070);
        assert_eq!(order_total(&order, TaxRate::from_bps(825)).cents(), 1083);
    }
}
