//! # spray-core: Pure Estimating Logic for the Spray Texture Estimator
//!
//! This crate holds everything the estimator *decides*: the price table, the
//! estimate arithmetic, input validation and the text of the printed estimate.
//! It never touches the terminal, the file system or the clock.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Spray Texture Estimator                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/estimator (spray-estimator)                │   │
//! │  │   prompts ──► session ──► screen / saved estimate file          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ spray-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────┐ │   │
//! │  │   │  types   │ │  money   │ │ pricing  │ │validation│ │report│ │   │
//! │  │   │ Texture  │ │  Money   │ │  table   │ │ parsers  │ │ text │ │   │
//! │  │   │ Tier     │ │          │ │ calc     │ │          │ │      │ │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘ └──────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (TextureType, PriceTier, EstimateInput, EstimateResult)
//! - [`money`] - Exact money amounts in integer cents
//! - [`pricing`] - The static price table and the estimate calculator
//! - [`validation`] - Parsers for each prompted field
//! - [`report`] - Screen and file rendering of an estimate
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use spray_core::pricing::{calculate_estimate, find_texture};
//! use spray_core::types::PriceTier;
//!
//! let orange_peel = find_texture(1).unwrap();
//! let estimate = calculate_estimate(1000.0, orange_peel, PriceTier::Low, 10.0);
//!
//! assert!((estimate.total_cost - 822.50).abs() < 1e-9);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{calculate_estimate, find_texture, MILEAGE_RATE, TEXTURE_PRICES};
pub use types::*;
