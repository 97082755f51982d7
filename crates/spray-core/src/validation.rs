//! # Validation Module
//!
//! Parsers for every answer the estimator asks for.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Lives                             │
//! │                                                                         │
//! │  Prompter (app crate)                                                  │
//! │  ├── Reads one line from the terminal                                  │
//! │  └── Loops until the parser returns Ok                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  THIS MODULE: one pure parser per field                                │
//! │  ├── &str ──► Ok(typed value)                                          │
//! │  └── &str ──► Err(ValidationError) ── message shown, prompt repeats    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  EstimateInput::new re-checks the numeric invariants                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Retry policy is the caller's; nothing here loops or prints.
//!
//! ## Usage
//! ```rust
//! use spray_core::validation::{parse_square_footage, parse_texture_choice};
//!
//! assert_eq!(parse_square_footage("1200").unwrap(), 1200.0);
//! assert!(parse_square_footage("abc").is_err());
//!
//! assert_eq!(parse_texture_choice("4").unwrap().name, "Skip Trowel");
//! assert!(parse_texture_choice("8").is_err());
//! ```

use crate::error::ValidationError;
use crate::pricing::{texture_id_range, TEXTURE_PRICES};
use crate::types::{PriceTier, TextureType};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const SQUARE_FOOTAGE: &str = "Square footage";
const MILEAGE: &str = "Mileage";

// =============================================================================
// Free Text
// =============================================================================

/// Accepts the customer name exactly as typed, including an empty line.
pub fn parse_customer_name(raw: &str) -> String {
    raw.to_string()
}

/// Interprets the answer to "save this estimate? (y/n)".
///
/// Only `y` (either case) means yes; every other answer, ` y` included,
/// means no.
pub fn parse_confirmation(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("y")
}

// =============================================================================
// Numeric Fields
// =============================================================================

/// Parses a finite real number, or reports `field` as not a number.
///
/// Surrounding whitespace is ignored here, and only here.
fn parse_real(raw: &str, field: &str) -> ValidationResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ValidationError::NotANumber {
            field: field.to_string(),
        })
}

/// Validates the square footage of the job.
///
/// ## Rules
/// - Must parse as a finite real number
/// - Must be greater than zero
///
/// ## Example
/// ```rust
/// use spray_core::validation::parse_square_footage;
///
/// assert_eq!(parse_square_footage(" 1500.5 ").unwrap(), 1500.5);
/// assert!(parse_square_footage("0").is_err());
/// assert!(parse_square_footage("-5").is_err());
/// ```
pub fn parse_square_footage(raw: &str) -> ValidationResult<f64> {
    let sq_ft = parse_real(raw, SQUARE_FOOTAGE)?;

    if sq_ft <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: SQUARE_FOOTAGE.to_string(),
        });
    }

    Ok(sq_ft)
}

/// Validates the commute distance in miles.
///
/// ## Rules
/// - Must parse as a finite real number
/// - Must not be negative (zero is allowed)
pub fn parse_commute_miles(raw: &str) -> ValidationResult<f64> {
    let miles = parse_real(raw, MILEAGE)?;

    if miles < 0.0 {
        return Err(ValidationError::MustNotBeNegative {
            field: MILEAGE.to_string(),
        });
    }

    // "-0" parses to -0.0, which would print as "-0.00 miles"
    Ok(miles.abs())
}

// =============================================================================
// Menu Choices
// =============================================================================

/// Validates a texture menu selection.
///
/// ## Rules
/// - Must be exactly one of the listed identifiers (`"1"`..`"7"`)
/// - `"01"`, `"1.0"` or `" 1 "` are not menu entries and are rejected
pub fn parse_texture_choice(raw: &str) -> ValidationResult<&'static TextureType> {
    TEXTURE_PRICES
        .iter()
        .find(|texture| texture.id.to_string() == raw)
        .ok_or_else(|| {
            let (min, max) = texture_id_range();
            ValidationError::InvalidChoice {
                field: "texture type".to_string(),
                min,
                max,
            }
        })
}

/// Validates a price tier menu selection (exactly `"1"`, `"2"` or `"3"`).
pub fn parse_price_tier(raw: &str) -> ValidationResult<PriceTier> {
    PriceTier::ALL
        .into_iter()
        .find(|tier| tier.menu_number().to_string() == raw)
        .ok_or_else(|| ValidationError::InvalidChoice {
            field: "price tier".to_string(),
            min: PriceTier::Low.menu_number(),
            max: PriceTier::High.menu_number(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_square_footage() {
        assert_eq!(parse_square_footage("1000").unwrap(), 1000.0);
        assert_eq!(parse_square_footage("0.5").unwrap(), 0.5);
        assert_eq!(parse_square_footage("1e3").unwrap(), 1000.0);
        assert_eq!(parse_square_footage("  250\n").unwrap(), 250.0);

        assert!(matches!(
            parse_square_footage("abc"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_square_footage("-5"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            parse_square_footage("0"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(parse_square_footage("").is_err());
    }

    #[test]
    fn test_parse_square_footage_rejects_non_finite() {
        assert!(parse_square_footage("inf").is_err());
        assert!(parse_square_footage("NaN").is_err());
    }

    #[test]
    fn test_square_footage_messages() {
        assert_eq!(
            parse_square_footage("abc").unwrap_err().to_string(),
            "Please enter a valid number."
        );
        assert_eq!(
            parse_square_footage("0").unwrap_err().to_string(),
            "Square footage must be greater than zero."
        );
    }

    #[test]
    fn test_parse_commute_miles() {
        assert_eq!(parse_commute_miles("0").unwrap(), 0.0);
        assert_eq!(parse_commute_miles("12.5").unwrap(), 12.5);
        assert!(parse_commute_miles("-0").unwrap().is_sign_positive());

        assert_eq!(
            parse_commute_miles("-1").unwrap_err().to_string(),
            "Mileage cannot be negative."
        );
        assert!(matches!(
            parse_commute_miles("ten"),
            Err(ValidationError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_parse_texture_choice() {
        for id in 1..=7u8 {
            let texture = parse_texture_choice(&id.to_string()).unwrap();
            assert_eq!(texture.id, id);
        }

        for bad in ["0", "8", "01", "1.0", "orange", "", " 1 ", "1 "] {
            assert!(parse_texture_choice(bad).is_err(), "accepted {bad:?}");
        }

        assert_eq!(
            parse_texture_choice("8").unwrap_err().to_string(),
            "Invalid choice. Please select a number between 1 and 7."
        );
    }

    #[test]
    fn test_parse_price_tier() {
        assert_eq!(parse_price_tier("1").unwrap(), PriceTier::Low);
        assert_eq!(parse_price_tier("2").unwrap(), PriceTier::Medium);
        assert_eq!(parse_price_tier("3").unwrap(), PriceTier::High);

        assert!(parse_price_tier("low").is_err());
        assert!(parse_price_tier(" 1").is_err());
        assert!(parse_price_tier("3 ").is_err());
        assert_eq!(
            parse_price_tier("4").unwrap_err().to_string(),
            "Invalid choice. Please select a number between 1 and 3."
        );
    }

    #[test]
    fn test_parse_confirmation() {
        assert!(parse_confirmation("y"));
        assert!(parse_confirmation("Y"));
        assert!(!parse_confirmation(" y"));
        assert!(!parse_confirmation("y "));
        assert!(!parse_confirmation("n"));
        assert!(!parse_confirmation("yes"));
        assert!(!parse_confirmation(""));
    }

    #[test]
    fn test_parse_customer_name() {
        assert_eq!(parse_customer_name("  Jane Doe "), "  Jane Doe ");
        assert_eq!(parse_customer_name(""), "");
    }
}
