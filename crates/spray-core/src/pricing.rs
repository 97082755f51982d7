//! # Pricing Module
//!
//! The static price table and the estimate calculator.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  texture id ──► TEXTURE_PRICES ──► TextureType                          │
//! │                                        │                                │
//! │  price tier ───────────────────────────┴──► price_per_sqft (Money)     │
//! │                                                   │                     │
//! │  square footage ──────────────── × ───────────────┘                     │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                           texture_cost ──┐                              │
//! │                                          ├──► total_cost                │
//! │  commute miles × MILEAGE_RATE ──► mileage_cost                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::Money;
use crate::types::{EstimateResult, PriceTier, TextureType};

// =============================================================================
// Constants
// =============================================================================

/// Per-mile charge for the commute ($2.25).
pub const MILEAGE_RATE: Money = Money::from_cents(225);

/// Every texture the shop sprays, in menu order.
pub static TEXTURE_PRICES: [TextureType; 7] = [
    texture(1, "Orange Peel", 80, 115, 150),
    texture(2, "Knockdown", 100, 175, 250),
    texture(3, "Popcorn (Acoustic)", 100, 150, 200),
    texture(4, "Skip Trowel", 150, 225, 300),
    texture(5, "Sand Texture", 100, 175, 250),
    texture(6, "Slap Brush (Crow's Foot)", 100, 150, 200),
    texture(7, "Stomp Texture", 150, 225, 300),
];

const fn texture(id: u8, name: &'static str, low: i64, medium: i64, high: i64) -> TextureType {
    TextureType {
        id,
        name,
        price_low: Money::from_cents(low),
        price_medium: Money::from_cents(medium),
        price_high: Money::from_cents(high),
    }
}

// =============================================================================
// Lookup
// =============================================================================

/// Finds a texture by its menu identifier.
///
/// ## Example
/// ```rust
/// use spray_core::pricing::find_texture;
///
/// assert_eq!(find_texture(2).map(|t| t.name), Some("Knockdown"));
/// assert!(find_texture(8).is_none());
/// ```
pub fn find_texture(id: u8) -> Option<&'static TextureType> {
    TEXTURE_PRICES.iter().find(|texture| texture.id == id)
}

/// Smallest and largest texture identifiers, for "between X and Y" messages.
pub fn texture_id_range() -> (u8, u8) {
    let ids = TEXTURE_PRICES.iter().map(|texture| texture.id);
    let min = ids.clone().min().unwrap_or(0);
    let max = ids.max().unwrap_or(0);
    (min, max)
}

// =============================================================================
// Calculator
// =============================================================================

/// Computes the cost breakdown for a job.
///
/// Pure and unrounded: the caller is responsible for having validated
/// `square_footage > 0` and `commute_miles >= 0` (see
/// [`crate::types::EstimateInput::new`]).
///
/// ## Example
/// ```rust
/// use spray_core::pricing::{calculate_estimate, find_texture};
/// use spray_core::types::PriceTier;
///
/// let skip_trowel = find_texture(4).unwrap();
/// let estimate = calculate_estimate(1500.0, skip_trowel, PriceTier::High, 0.0);
///
/// assert!((estimate.total_cost - 4500.0).abs() < 1e-9);
/// assert_eq!(estimate.mileage_cost, 0.0);
/// ```
pub fn calculate_estimate(
    square_footage: f64,
    texture: &'static TextureType,
    price_tier: PriceTier,
    commute_miles: f64,
) -> EstimateResult {
    let price_per_sqft = texture.price(price_tier);

    let texture_cost = square_footage * price_per_sqft.as_dollars();
    let mileage_cost = commute_miles * MILEAGE_RATE.as_dollars();
    let total_cost = texture_cost + mileage_cost;

    EstimateResult {
        texture_name: texture.name,
        price_per_sqft,
        texture_cost,
        mileage_cost,
        total_cost,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_table_ids_are_one_through_seven() {
        let ids: Vec<u8> = TEXTURE_PRICES.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(texture_id_range(), (1, 7));
    }

    #[test]
    fn test_every_texture_and_tier_price() {
        let expected: [(u8, &str, [i64; 3]); 7] = [
            (1, "Orange Peel", [80, 115, 150]),
            (2, "Knockdown", [100, 175, 250]),
            (3, "Popcorn (Acoustic)", [100, 150, 200]),
            (4, "Skip Trowel", [150, 225, 300]),
            (5, "Sand Texture", [100, 175, 250]),
            (6, "Slap Brush (Crow's Foot)", [100, 150, 200]),
            (7, "Stomp Texture", [150, 225, 300]),
        ];

        for (id, name, cents) in expected {
            let texture = find_texture(id).unwrap();
            assert_eq!(texture.name, name);
            for (tier, cents) in PriceTier::ALL.into_iter().zip(cents) {
                let result = calculate_estimate(1.0, texture, tier, 0.0);
                assert_eq!(result.price_per_sqft.cents(), cents, "{name} {tier:?}");
            }
        }
    }

    #[test]
    fn test_prices_non_negative_and_ordered() {
        for texture in TEXTURE_PRICES.iter() {
            assert!(texture.price_low.cents() >= 0);
            assert!(texture.price_low <= texture.price_medium);
            assert!(texture.price_medium <= texture.price_high);
        }
    }

    #[test]
    fn test_unknown_texture() {
        assert!(find_texture(0).is_none());
        assert!(find_texture(8).is_none());
    }

    #[test]
    fn test_orange_peel_low_with_commute() {
        let texture = find_texture(1).unwrap();
        let result = calculate_estimate(1000.0, texture, PriceTier::Low, 10.0);

        assert_eq!(result.texture_name, "Orange Peel");
        assert_eq!(result.price_per_sqft, Money::from_cents(80));
        assert!(approx_eq(result.texture_cost, 800.0));
        assert!(approx_eq(result.mileage_cost, 22.5));
        assert!(approx_eq(result.total_cost, 822.5));
    }

    #[test]
    fn test_skip_trowel_high_no_commute() {
        let texture = find_texture(4).unwrap();
        let result = calculate_estimate(1500.0, texture, PriceTier::High, 0.0);

        assert!(approx_eq(result.texture_cost, 4500.0));
        assert_eq!(result.mileage_cost, 0.0);
        assert!(approx_eq(result.total_cost, 4500.0));
    }

    #[test]
    fn test_total_formula_holds_across_inputs() {
        let footages = [0.5, 1.0, 123.45, 999.99, 2500.0, 1_000_000.0];
        let miles = [0.0, 0.1, 7.5, 42.0, 310.25];

        for texture in TEXTURE_PRICES.iter() {
            for tier in PriceTier::ALL {
                for &sq_ft in &footages {
                    for &mi in &miles {
                        let r = calculate_estimate(sq_ft, texture, tier, mi);
                        let price = texture.price(tier).as_dollars();
                        assert!(approx_eq(r.texture_cost, sq_ft * price));
                        assert!(approx_eq(r.mileage_cost, mi * 2.25));
                        assert!(approx_eq(r.total_cost, sq_ft * price + mi * 2.25));
                        assert!(approx_eq(r.total_cost, r.texture_cost + r.mileage_cost));
                    }
                }
            }
        }
    }

    #[test]
    fn test_no_internal_rounding() {
        let texture = find_texture(2).unwrap();
        let result = calculate_estimate(0.333, texture, PriceTier::Medium, 0.001);

        // 0.333 × 1.75 = 0.58275, 0.001 × 2.25 = 0.00225; neither is a whole cent
        assert!(approx_eq(result.texture_cost, 0.58275));
        assert!(approx_eq(result.mileage_cost, 0.00225));
        assert!(approx_eq(result.total_cost, 0.585));
    }
}
