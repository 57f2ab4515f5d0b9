use super::surface::surface_multiplier;
use crate::domain::estimate::{Price, PriceEstimate};
use crate::domain::project::ProjectInput;
use crate::domain::tables::PricingTables;
use rust_decimal::Decimal;

/// Intermediate values of one estimate, in the order they were applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingBreakdown {
    pub tier_multiplier: Decimal,
    pub difficulty_multiplier: Decimal,
    pub surface_multiplier: Decimal,
    /// Per-square-foot band after all multipliers.
    pub rate_min: Decimal,
    pub rate_max: Decimal,
    /// Band times square footage, before any floor.
    pub raw_min: Decimal,
    pub raw_max: Decimal,
    pub spread_floor_applied: bool,
    pub absolute_floor_applied: bool,
}

/// The pricing-rule engine.
///
/// `PricingEngine` turns a complete [`ProjectInput`] into a planning-stage
/// price range. It owns its pricing tables and never mutates them, so one
/// engine can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    tables: PricingTables,
}

impl PricingEngine {
    /// Creates a new `PricingEngine` over the given tables.
    ///
    /// # Arguments
    ///
    /// * `tables` - Rates, multipliers and minimum-pricing policy to price with.
    pub fn new(tables: PricingTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &PricingTables {
        &self.tables
    }

    /// Computes the price range for `input`.
    ///
    /// Total and deterministic: the same input always yields the same
    /// estimate, and no input makes it fail.
    pub fn estimate(&self, input: &ProjectInput) -> PriceEstimate {
        self.estimate_with_breakdown(input).0
    }

    /// Same as [`PricingEngine::estimate`], also returning every intermediate
    /// value.
    pub fn estimate_with_breakdown(
        &self,
        input: &ProjectInput,
    ) -> (PriceEstimate, PricingBreakdown) {
        let tables = &self.tables;
        let tier_multiplier = tables.tier_multiplier(input.paint_tier);
        let difficulty_multiplier = tables.difficulty_multiplier(input.difficulty_level);
        let surface_multiplier = surface_multiplier(tables, input.project_type, &input.surfaces);

        // Saturates at Decimal::MAX, so even unvalidated tables never panic here.
        let scale = |rate: Decimal| {
            rate.saturating_mul(tier_multiplier)
                .saturating_mul(difficulty_multiplier)
                .saturating_mul(surface_multiplier)
        };
        let rate_min = scale(tables.rates.min_per_sqft);
        let rate_max = scale(tables.rates.max_per_sqft);

        let square_footage = Decimal::from(input.square_footage);
        let raw_min = rate_min.saturating_mul(square_footage);
        let raw_max = rate_max.saturating_mul(square_footage);

        let policy = &tables.minimums;
        let mut min_price = raw_min;
        let mut max_price = raw_max;

        let spread_floor_applied = max_price.saturating_sub(min_price) < policy.minimum_spread;
        if spread_floor_applied {
            max_price = min_price.saturating_add(policy.minimum_spread);
        }

        let absolute_floor_applied = min_price < policy.absolute_minimum;
        if absolute_floor_applied {
            min_price = policy.absolute_minimum;
            let floored_max = policy.absolute_minimum.saturating_add(policy.minimum_spread);
            max_price = max_price.max(floored_max);
        }

        let estimate = PriceEstimate {
            min_price: Price::round(min_price),
            max_price: Price::round(max_price),
            tier_label: tables.tier_label(input.paint_tier),
        };

        tracing::debug!(
            project_type = %input.project_type,
            square_footage = input.square_footage.value(),
            paint_tier = %input.paint_tier,
            difficulty = %input.difficulty_level,
            %tier_multiplier,
            %difficulty_multiplier,
            %surface_multiplier,
            spread_floor_applied,
            absolute_floor_applied,
            min_price = %estimate.min_price.value(),
            max_price = %estimate.max_price.value(),
            "estimate computed"
        );

        let breakdown = PricingBreakdown {
            tier_multiplier,
            difficulty_multiplier,
            surface_multiplier,
            rate_min,
            rate_max,
            raw_min,
            raw_max,
            spread_floor_applied,
            absolute_floor_applied,
        };
        (estimate, breakdown)
    }
}
