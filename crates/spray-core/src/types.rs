//! # Domain Types
//!
//! Core domain types used throughout the estimator.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  TextureType    │   │  EstimateInput  │   │ EstimateResult  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (1..=7)     │◄──│  texture        │   │  texture_name   │       │
//! │  │  name           │   │  customer_name  │──►│  price_per_sqft │       │
//! │  │  price_low      │   │  square_footage │   │  texture_cost   │       │
//! │  │  price_medium   │   │  price_tier     │   │  mileage_cost   │       │
//! │  │  price_high     │   │  commute_miles  │   │  total_cost     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │   PriceTier     │   static table ──► validated input ──► result     │
//! │  │  Low/Medium/High│                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::pricing;

// =============================================================================
// Price Tier
// =============================================================================

/// Which of a texture's three per-square-foot rates applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    /// Basic finish.
    Low,
    /// Standard finish.
    Medium,
    /// Premium finish.
    High,
}

impl PriceTier {
    /// All tiers in menu order.
    pub const ALL: [PriceTier; 3] = [PriceTier::Low, PriceTier::Medium, PriceTier::High];

    /// The number the operator types to pick this tier.
    pub const fn menu_number(&self) -> u8 {
        match self {
            PriceTier::Low => 1,
            PriceTier::Medium => 2,
            PriceTier::High => 3,
        }
    }

    /// Looks up a tier by its menu number.
    pub fn from_menu_number(number: u8) -> Option<Self> {
        PriceTier::ALL
            .into_iter()
            .find(|tier| tier.menu_number() == number)
    }

    /// Short label shown in the tier menu.
    pub const fn label(&self) -> &'static str {
        match self {
            PriceTier::Low => "Low",
            PriceTier::Medium => "Medium",
            PriceTier::High => "High",
        }
    }

    /// What the operator is choosing between.
    pub const fn description(&self) -> &'static str {
        match self {
            PriceTier::Low => "Basic finish",
            PriceTier::Medium => "Standard finish",
            PriceTier::High => "Premium finish",
        }
    }
}

// =============================================================================
// Texture Type
// =============================================================================

/// A spray-texture finish and its three tier prices ($ per sq. ft.).
///
/// Instances only exist in [`pricing::TEXTURE_PRICES`]; everything else
/// holds a `&'static TextureType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextureType {
    /// Menu identifier (1..=7).
    pub id: u8,

    /// Display name printed on the estimate.
    pub name: &'static str,

    /// Price per square foot, Low tier.
    pub price_low: Money,

    /// Price per square foot, Medium tier.
    pub price_medium: Money,

    /// Price per square foot, High tier.
    pub price_high: Money,
}

impl TextureType {
    /// Returns the per-square-foot price for a tier.
    ///
    /// ## Example
    /// ```rust
    /// use spray_core::{find_texture, Money, PriceTier};
    ///
    /// let skip_trowel = find_texture(4).unwrap();
    /// assert_eq!(skip_trowel.price(PriceTier::High), Money::from_cents(300));
    /// ```
    #[inline]
    pub const fn price(&self, tier: PriceTier) -> Money {
        match tier {
            PriceTier::Low => self.price_low,
            PriceTier::Medium => self.price_medium,
            PriceTier::High => self.price_high,
        }
    }
}

// =============================================================================
// Estimate Input
// =============================================================================

/// Everything the operator typed for one estimate.
///
/// Fields are private: the only way to obtain a value is [`EstimateInput::new`],
/// which enforces the numeric invariants. The value is never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateInput {
    customer_name: String,
    square_footage: f64,
    texture: &'static TextureType,
    price_tier: PriceTier,
    commute_miles: f64,
}

impl EstimateInput {
    /// Builds an input from already-parsed values.
    ///
    /// ## Rules
    /// - `square_footage` must be finite and > 0
    /// - `commute_miles` must be finite and >= 0 (zero allowed)
    ///
    /// ## Example
    /// ```rust
    /// use spray_core::{find_texture, EstimateInput, PriceTier};
    ///
    /// let texture = find_texture(1).unwrap();
    /// assert!(EstimateInput::new("Ada", 1000.0, texture, PriceTier::Low, 10.0).is_ok());
    /// assert!(EstimateInput::new("Ada", 0.0, texture, PriceTier::Low, 10.0).is_err());
    /// ```
    pub fn new(
        customer_name: impl Into<String>,
        square_footage: f64,
        texture: &'static TextureType,
        price_tier: PriceTier,
        commute_miles: f64,
    ) -> CoreResult<Self> {
        if !square_footage.is_finite() {
            return Err(ValidationError::NotANumber {
                field: "Square footage".to_string(),
            }
            .into());
        }
        if square_footage <= 0.0 {
            return Err(ValidationError::MustBePositive {
                field: "Square footage".to_string(),
            }
            .into());
        }
        if !commute_miles.is_finite() {
            return Err(ValidationError::NotANumber {
                field: "Mileage".to_string(),
            }
            .into());
        }
        if commute_miles < 0.0 {
            return Err(ValidationError::MustNotBeNegative {
                field: "Mileage".to_string(),
            }
            .into());
        }

        Ok(EstimateInput {
            customer_name: customer_name.into(),
            square_footage,
            texture,
            price_tier,
            // -0.0 becomes 0.0
            commute_miles: commute_miles.abs(),
        })
    }

    /// Runs the estimate calculator on this input.
    pub fn calculate(&self) -> EstimateResult {
        pricing::calculate_estimate(
            self.square_footage,
            self.texture,
            self.price_tier,
            self.commute_miles,
        )
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn square_footage(&self) -> f64 {
        self.square_footage
    }

    pub fn texture(&self) -> &'static TextureType {
        self.texture
    }

    pub fn price_tier(&self) -> PriceTier {
        self.price_tier
    }

    pub fn commute_miles(&self) -> f64 {
        self.commute_miles
    }
}

// =============================================================================
// Estimate Result
// =============================================================================

/// The cost breakdown for one estimate.
///
/// ## Invariants
/// - `texture_cost == square_footage * price_per_sqft`
/// - `total_cost == texture_cost + mileage_cost`
///
/// Costs are unrounded; see [`crate::money::format_dollars`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateResult {
    /// Name of the chosen texture.
    pub texture_name: &'static str,

    /// Table price for the chosen texture and tier.
    pub price_per_sqft: Money,

    /// Square footage × price per square foot.
    pub texture_cost: f64,

    /// Commute miles × mileage rate.
    pub mileage_cost: f64,

    /// Texture cost + mileage cost.
    pub total_cost: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::find_texture;

    fn orange_peel() -> &'static TextureType {
        find_texture(1).unwrap()
    }

    #[test]
    fn test_tier_menu_numbers() {
        assert_eq!(PriceTier::from_menu_number(1), Some(PriceTier::Low));
        assert_eq!(PriceTier::from_menu_number(2), Some(PriceTier::Medium));
        assert_eq!(PriceTier::from_menu_number(3), Some(PriceTier::High));
        assert_eq!(PriceTier::from_menu_number(0), None);
        assert_eq!(PriceTier::from_menu_number(4), None);
    }

    #[test]
    fn test_tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PriceTier::Medium).unwrap(), "\"medium\"");
        let tier: PriceTier = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(tier, PriceTier::High);
    }

    #[test]
    fn test_texture_price_by_tier() {
        let texture = orange_peel();
        assert_eq!(texture.price(PriceTier::Low).cents(), 80);
        assert_eq!(texture.price(PriceTier::Medium).cents(), 115);
        assert_eq!(texture.price(PriceTier::High).cents(), 150);
    }

    #[test]
    fn test_input_rejects_bad_square_footage() {
        for sq_ft in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = EstimateInput::new("", sq_ft, orange_peel(), PriceTier::Low, 0.0);
            assert!(result.is_err(), "accepted {sq_ft}");
        }
    }

    #[test]
    fn test_input_rejects_negative_miles_allows_zero() {
        assert!(EstimateInput::new("", 10.0, orange_peel(), PriceTier::Low, -1.0).is_err());
        assert!(EstimateInput::new("", 10.0, orange_peel(), PriceTier::Low, 0.0).is_ok());
    }

    #[test]
    fn test_input_normalizes_negative_zero_miles() {
        let input = EstimateInput::new("", 10.0, orange_peel(), PriceTier::Low, -0.0).unwrap();
        assert!(input.commute_miles().is_sign_positive());
    }

    #[test]
    fn test_input_calculate() {
        let input =
            EstimateInput::new("Pat", 1000.0, orange_peel(), PriceTier::Low, 10.0).unwrap();
        let result = input.calculate();

        assert_eq!(input.customer_name(), "Pat");
        assert_eq!(result.texture_name, "Orange Peel");
        assert!((result.total_cost - 822.5).abs() < 1e-9);
    }

    #[test]
    fn test_result_serializes() {
        let input =
            EstimateInput::new("Pat", 100.0, orange_peel(), PriceTier::High, 0.0).unwrap();
        let json = serde_json::to_value(input.calculate()).unwrap();

        assert_eq!(json["texture_name"], "Orange Peel");
        assert_eq!(json["price_per_sqft"], 150);
        assert_eq!(json["total_cost"], 150.0);
    }
}
