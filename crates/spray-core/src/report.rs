//! # Report Module
//!
//! Text rendering for menus and for the finished estimate.
//!
//! ## One Template, Two Targets
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ReportTarget::Screen                ReportTarget::File                 │
//! │  ───────────────────                 ─────────────────                  │
//! │  ==========================          ==========================         │
//! │   SPRAY TEXTURE ESTIMATE CALCULATOR   SPRAY TEXTURE ESTIMATE            │
//! │  ==========================          ==========================         │
//! │                                                                         │
//! │  Date: 2024-03-01                    Date: 2024-03-01                   │
//! │                                      Customer: Jane Doe   ◄── file only │
//! │  Square Footage: ...                 Square Footage: ...                │
//! │  ...same body...                     ...same body...                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The date is supplied by the caller; this module never reads the clock.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::money::format_dollars;
use crate::pricing::{MILEAGE_RATE, TEXTURE_PRICES};
use crate::types::{EstimateInput, EstimateResult, PriceTier};

/// Title line shown on the terminal.
pub const SCREEN_TITLE: &str = "                SPRAY TEXTURE ESTIMATE CALCULATOR                ";

/// Title line written to saved estimates.
pub const FILE_TITLE: &str = "                SPRAY TEXTURE ESTIMATE                ";

const HEADER_WIDTH: usize = 60;
const RULE_WIDTH: usize = 50;

fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

/// Renders the boxed title block, followed by a blank line.
///
/// ## Example
/// ```rust
/// use spray_core::report::{header, SCREEN_TITLE};
///
/// let text = header(SCREEN_TITLE);
/// assert!(text.starts_with(&"=".repeat(60)));
/// assert!(text.ends_with("\n\n"));
/// ```
pub fn header(title: &str) -> String {
    let bar = rule('=', HEADER_WIDTH);
    format!("{bar}\n{title}\n{bar}\n\n")
}

/// Builds the saved-estimate file name for a local timestamp.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use spray_core::report::estimate_filename;
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 1)
///     .unwrap()
///     .and_hms_opt(9, 5, 7)
///     .unwrap();
/// assert_eq!(estimate_filename(at), "estimate_20240301_090507.txt");
/// ```
pub fn estimate_filename(timestamp: NaiveDateTime) -> String {
    format!("estimate_{}.txt", timestamp.format("%Y%m%d_%H%M%S"))
}

// =============================================================================
// Menus
// =============================================================================

/// The list of textures with their low-to-high price range.
pub struct TextureMenu;

impl fmt::Display for TextureMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nAvailable Texture Types:")?;
        writeln!(f, "{}", rule('-', RULE_WIDTH))?;
        for texture in TEXTURE_PRICES.iter() {
            writeln!(
                f,
                "{}. {}: {} - {} per sq. ft.",
                texture.id, texture.name, texture.price_low, texture.price_high
            )?;
        }
        writeln!(f, "{}", rule('-', RULE_WIDTH))
    }
}

/// The numbered list of price tiers.
pub struct TierMenu;

impl fmt::Display for TierMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nPrice Tiers:")?;
        for tier in PriceTier::ALL {
            writeln!(
                f,
                "{}. {} - {}",
                tier.menu_number(),
                tier.label(),
                tier.description()
            )?;
        }
        Ok(())
    }
}

// =============================================================================
// Estimate
// =============================================================================

/// Where a rendered estimate is going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTarget {
    /// Terminal display: calculator title, no customer line.
    Screen,
    /// Saved text file: estimate title, includes the customer line.
    File,
}

impl ReportTarget {
    pub const fn title(&self) -> &'static str {
        match self {
            ReportTarget::Screen => SCREEN_TITLE,
            ReportTarget::File => FILE_TITLE,
        }
    }
}

/// A finished estimate ready to be printed or saved.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use spray_core::report::{EstimateReport, ReportTarget};
/// use spray_core::{find_texture, EstimateInput, PriceTier};
///
/// let input = EstimateInput::new("Jane", 1000.0, find_texture(1).unwrap(), PriceTier::Low, 10.0)
///     .unwrap();
/// let result = input.calculate();
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
///
/// let text = EstimateReport::new(ReportTarget::File, date, &input, &result).to_string();
/// assert!(text.contains("Customer: Jane\n"));
/// assert!(text.contains("TOTAL ESTIMATE: $822.50\n"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EstimateReport<'a> {
    target: ReportTarget,
    date: NaiveDate,
    input: &'a EstimateInput,
    result: &'a EstimateResult,
}

impl<'a> EstimateReport<'a> {
    pub fn new(
        target: ReportTarget,
        date: NaiveDate,
        input: &'a EstimateInput,
        result: &'a EstimateResult,
    ) -> Self {
        EstimateReport {
            target,
            date,
            input,
            result,
        }
    }
}

impl fmt::Display for EstimateReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let thin = rule('-', RULE_WIDTH);
        let thick = rule('=', RULE_WIDTH);

        f.write_str(&header(self.target.title()))?;

        writeln!(f, "Date: {}", self.date.format("%Y-%m-%d"))?;
        if self.target == ReportTarget::File {
            writeln!(f, "Customer: {}", self.input.customer_name())?;
        }
        writeln!(f, "Square Footage: {:.2} sq. ft.", self.input.square_footage())?;
        writeln!(f, "Texture Type: {}", self.result.texture_name)?;
        writeln!(f, "Price per sq. ft.: {}", self.result.price_per_sqft)?;
        writeln!(f, "Commute Distance: {:.2} miles", self.input.commute_miles())?;

        writeln!(f, "\n{thin}")?;
        writeln!(f, "Texture Cost: {}", format_dollars(self.result.texture_cost))?;
        writeln!(
            f,
            "Mileage Cost ({}/mile): {}",
            MILEAGE_RATE,
            format_dollars(self.result.mileage_cost)
        )?;
        writeln!(f, "{thin}")?;
        writeln!(f, "TOTAL ESTIMATE: {}", format_dollars(self.result.total_cost))?;
        writeln!(f, "{thick}")?;

        writeln!(f, "\nThank you for choosing our services!")?;
        writeln!(f, "This estimate is valid for 30 days from the date above.")?;
        writeln!(f, "{thick}")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
