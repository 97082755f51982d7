//! # Money Module
//!
//! Provides the `Money` type for the exact amounts in the price table, and
//! the display helper for the real-valued costs derived from them.
//!
//! ## Two Kinds of Amount
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  EXACT (Money, integer cents)         REAL (f64 dollars)                │
//! │  ────────────────────────────         ──────────────────                │
//! │  Price per sq. ft.  $0.80 = 80¢       Texture cost = 1234.5 × $0.80     │
//! │  Mileage rate       $2.25 = 225¢      Mileage cost = 12.3 × $2.25       │
//! │                                       Total cost                        │
//! │                                                                         │
//! │  Table prices are written once and never drift.                        │
//! │  Costs multiply by real square footage / miles, so they stay f64 and   │
//! │  are rounded to cents ONLY when formatted.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use spray_core::money::{format_dollars, Money};
//!
//! let rate = Money::from_cents(225); // $2.25
//! assert_eq!(rate.to_string(), "$2.25");
//!
//! let mileage_cost = 10.0 * rate.as_dollars();
//! assert_eq!(format_dollars(mileage_cost), "$22.50");
//! ```

use serde::Serialize;
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// Only table prices and the mileage rate are `Money`, so values are never
/// negative. Serializes as the bare cent count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use spray_core::money::Money;
    ///
    /// let price = Money::from_cents(115); // Represents $1.15
    /// assert_eq!(price.cents(), 115);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use spray_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(250).dollars(), 2);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        self.0 % 100
    }

    /// Returns the amount in dollars as a real number.
    ///
    /// Used at the boundary where an exact rate is multiplied by a real
    /// quantity (square feet, miles).
    ///
    /// ## Example
    /// ```rust
    /// use spray_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(150).as_dollars(), 1.5);
    /// ```
    #[inline]
    pub fn as_dollars(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Real-Valued Amounts
// =============================================================================

/// Formats a real dollar amount with a `$` sign and two decimal places.
///
/// This is the single place rounding happens: the value is rounded to the
/// nearest cent for display and the caller's value is left untouched.
///
/// ## Example
/// ```rust
/// use spray_core::money::format_dollars;
///
/// assert_eq!(format_dollars(822.5), "$822.50");
/// assert_eq!(format_dollars(1234.567), "$1234.57");
/// ```
pub fn format_dollars(amount: f64) -> String {
    // -0.0 + 0.0 is +0.0, so a zero cost never prints as "$-0.00"
    format!("${:.2}", amount + 0.0)
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$D.CC`, the format used on the estimate.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars(), self.cents_part())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
