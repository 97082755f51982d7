//! # Estimate Session
//!
//! One complete run: collect answers, calculate, show, optionally save.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Estimate Session                                  │
//! │                                                                         │
//! │  1. Welcome ──────────────────────────────────────────────────────────► │
//! │     • clear screen, title, instructions                                 │
//! │                                                                         │
//! │  2. Collect (each question repeats until valid) ──────────────────────► │
//! │     • customer name → square footage → texture → tier → commute miles   │
//! │                                                                         │
//! │  3. Calculate ────────────────────────────────────────────────────────► │
//! │     • EstimateInput::new → calculate (spray-core, pure)                 │
//! │                                                                         │
//! │  4. Show ─────────────────────────────────────────────────────────────► │
//! │     • clear screen, ReportTarget::Screen                                │
//! │                                                                         │
//! │  5. Save? (y/n) ──────────────────────────────────────────────────────► │
//! │     • y → ReportTarget::File → store::save_estimate                     │
//! │     • write failure is reported, never fatal                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use spray_core::pricing::texture_id_range;
use spray_core::report::{header, EstimateReport, ReportTarget, TextureMenu, TierMenu, SCREEN_TITLE};
use spray_core::validation::{
    parse_commute_miles, parse_confirmation, parse_customer_name, parse_price_tier,
    parse_square_footage, parse_texture_choice,
};
use spray_core::{EstimateInput, EstimateResult, PriceTier};
use tracing::{info, warn};

use crate::config::EstimatorConfig;
use crate::error::CliError;
use crate::prompt::Prompter;
use crate::screen::clear_screen;
use crate::store::save_estimate;

/// Source of "now" for the estimate date and file timestamp.
pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// What a completed session produced.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub input: EstimateInput,
    pub result: EstimateResult,
    /// Path of the saved estimate, if the operator asked for one and the write succeeded.
    pub saved_to: Option<PathBuf>,
}

pub struct Session<R, W> {
    config: EstimatorConfig,
    prompter: Prompter<R, W>,
    clock: Clock,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: EstimatorConfig, input: R, output: W) -> Self {
        Session {
            config,
            prompter: Prompter::new(input, output),
            clock: local_now,
        }
    }

    /// Replaces the wall clock (fixed dates in tests).
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Runs the whole session to completion.
    pub fn run(&mut self) -> Result<SessionOutcome, CliError> {
        self.welcome()?;

        let input = self.collect_input()?;
        let result = input.calculate();
        info!(
            texture = result.texture_name,
            tier = ?input.price_tier(),
            square_footage = input.square_footage(),
            commute_miles = input.commute_miles(),
            total_cost = result.total_cost,
            "Estimate calculated"
        );

        self.show_estimate(&input, &result)?;

        let answer = self
            .prompter
            .ask("\nWould you like to save this estimate? (y/n): ")?;
        let saved_to = if parse_confirmation(&answer) {
            self.save(&input, &result)?
        } else {
            None
        };

        self.prompter
            .say_line("\nThank you for using the Spray Texture Estimate Calculator!")?;

        Ok(SessionOutcome {
            input,
            result,
            saved_to,
        })
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Best-effort: a terminal that cannot be cleared still gets the estimate.
    fn clear(&mut self) {
        if !self.config.clear_screen {
            return;
        }
        if let Err(err) = clear_screen(self.prompter.output_mut()) {
            warn!(error = %err, "Failed to clear screen");
        }
    }

    fn welcome(&mut self) -> Result<(), CliError> {
        self.clear();
        self.prompter.say(header(SCREEN_TITLE))?;
        self.prompter
            .say_line("Welcome to the Spray Texture Estimate Calculator!")?;
        self.prompter.say_line(
            "This program will help you calculate estimates for spray texture jobs.",
        )?;
        self.prompter
            .say_line("\nPlease enter the following information:")
    }

    fn collect_input(&mut self) -> Result<EstimateInput, CliError> {
        let customer_name = parse_customer_name(&self.prompter.ask("\nCustomer Name: ")?);

        let square_footage = self.prompter.ask_until_valid(
            "Enter the square footage of the house: ",
            parse_square_footage,
        )?;

        self.prompter.say(TextureMenu)?;
        let (first, last) = texture_id_range();
        let texture = self.prompter.ask_until_valid(
            &format!("\nSelect a texture type ({first}-{last}): "),
            parse_texture_choice,
        )?;

        self.prompter.say(TierMenu)?;
        let price_tier = self.prompter.ask_until_valid(
            &format!(
                "\nSelect a price tier ({}-{}): ",
                PriceTier::Low.menu_number(),
                PriceTier::High.menu_number()
            ),
            parse_price_tier,
        )?;

        let commute_miles = self.prompter.ask_until_valid(
            "\nEnter the commute distance (miles): ",
            parse_commute_miles,
        )?;

        Ok(EstimateInput::new(
            customer_name,
            square_footage,
            texture,
            price_tier,
            commute_miles,
        )?)
    }

    fn show_estimate(
        &mut self,
        input: &EstimateInput,
        result: &EstimateResult,
    ) -> Result<(), CliError> {
        self.clear();
        let today = (self.clock)().date();
        self.prompter
            .say(EstimateReport::new(ReportTarget::Screen, today, input, result))
    }

    /// Saves the file report; a failed write is reported and yields `None`.
    fn save(
        &mut self,
        input: &EstimateInput,
        result: &EstimateResult,
    ) -> Result<Option<PathBuf>, CliError> {
        let now = (self.clock)();
        let report = EstimateReport::new(ReportTarget::File, now.date(), input, result);

        match save_estimate(&self.config.output_dir, now, &report.to_string()) {
            Ok(path) => {
                self.prompter
                    .say_line(format!("\nEstimate saved to {}", path.display()))?;
                Ok(Some(path))
            }
            Err(err) => {
                warn!(error = %err, "Failed to save estimate");
                self.prompter
                    .say_line(format!("\nError saving estimate: {err}"))?;
                Ok(None)
            }
        }
    }
}
