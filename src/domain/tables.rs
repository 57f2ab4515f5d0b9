use super::project::{DifficultyLevel, PaintTier, SurfaceId};
use crate::error::{EstimateError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Largest per-square-foot rate the tables accept.
pub const MAX_RATE_PER_SQFT: Decimal = dec!(10000);
/// Largest tier or difficulty multiplier and largest surface weight.
pub const MAX_MULTIPLIER: Decimal = dec!(100);
/// Largest absolute minimum or minimum spread.
pub const MAX_MINIMUM: Decimal = dec!(1000000000);

/// Per-square-foot cost band before any multiplier is applied.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateTable {
    pub min_per_sqft: Decimal,
    pub max_per_sqft: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TierRate {
    pub multiplier: Decimal,
    pub label: Option<String>,
}

/// Additive interior weights keyed by surface name, plus the base weight
/// charged when interior work is selected without walls.
#[derive(Debug, Clone, PartialEq)]
pub struct InteriorWeights {
    pub minimum_base: Decimal,
    pub surfaces: BTreeMap<String, Decimal>,
}

/// Scalar exterior weights keyed by primary surface name, plus the additive
/// trim weight.
#[derive(Debug, Clone, PartialEq)]
pub struct ExteriorWeights {
    pub trim: Decimal,
    pub surfaces: BTreeMap<String, Decimal>,
}

/// Floors applied after the raw computation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MinimumPricingPolicy {
    pub absolute_minimum: Decimal,
    pub minimum_spread: Decimal,
}

/// All the read-only configuration the pricing engine works from.
///
/// Tables are keyed by the snake_case name of the tier, difficulty level or
/// surface. A key missing from a table is a no-op: multiplier `1`, or an
/// additive weight of `0` for interior surfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingTables {
    pub rates: RateTable,
    pub tiers: BTreeMap<String, TierRate>,
    pub difficulty: BTreeMap<String, Decimal>,
    pub interior: InteriorWeights,
    pub exterior: ExteriorWeights,
    pub minimums: MinimumPricingPolicy,
}

/// A partial tier entry. Fields left out keep the value being overridden.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TierOverride {
    pub multiplier: Option<Decimal>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InteriorOverrides {
    #[serde(default)]
    pub minimum_base: Option<Decimal>,
    #[serde(flatten)]
    pub surfaces: BTreeMap<String, Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExteriorOverrides {
    #[serde(default)]
    pub trim: Option<Decimal>,
    #[serde(flatten)]
    pub surfaces: BTreeMap<String, Decimal>,
}

/// Changes to apply on top of a set of [`PricingTables`].
///
/// Keyed tables merge entry by entry, so overriding one tier or one surface
/// leaves the others untouched. `rates` and `minimums` are pairs and are
/// replaced as a whole.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TablesOverrides {
    pub rates: Option<RateTable>,
    pub tiers: BTreeMap<String, TierOverride>,
    pub difficulty: BTreeMap<String, Decimal>,
    pub interior: InteriorOverrides,
    pub exterior: ExteriorOverrides,
    pub minimums: Option<MinimumPricingPolicy>,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            min_per_sqft: dec!(1.50),
            max_per_sqft: dec!(3.50),
        }
    }
}

impl Default for InteriorWeights {
    fn default() -> Self {
        Self {
            minimum_base: dec!(0.8),
            surfaces: BTreeMap::from([
                (SurfaceId::Walls.as_str().to_string(), dec!(1.0)),
                (SurfaceId::Ceilings.as_str().to_string(), dec!(0.4)),
                (SurfaceId::Trim.as_str().to_string(), dec!(0.3)),
            ]),
        }
    }
}

impl Default for ExteriorWeights {
    fn default() -> Self {
        Self {
            trim: dec!(0.2),
            surfaces: BTreeMap::from([
                (SurfaceId::VinylSiding.as_str().to_string(), dec!(1.0)),
                (SurfaceId::Cement.as_str().to_string(), dec!(1.2)),
                (SurfaceId::WoodSiding.as_str().to_string(), dec!(1.4)),
                (SurfaceId::Stucco.as_str().to_string(), dec!(1.5)),
                (SurfaceId::Brick.as_str().to_string(), dec!(1.6)),
            ]),
        }
    }
}

impl Default for MinimumPricingPolicy {
    fn default() -> Self {
        Self {
            absolute_minimum: dec!(3000),
            minimum_spread: dec!(3000),
        }
    }
}

impl Default for PricingTables {
    fn default() -> Self {
        let tier = |tier: PaintTier, multiplier: Decimal| {
            (
                tier.as_str().to_string(),
                TierRate {
                    multiplier,
                    label: Some(tier.default_label().to_string()),
                },
            )
        };
        let level = |level: DifficultyLevel, multiplier: Decimal| {
            (level.as_str().to_string(), multiplier)
        };

        Self {
            rates: RateTable::default(),
            tiers: BTreeMap::from([
                tier(PaintTier::Standard, dec!(1.0)),
                tier(PaintTier::Premium, dec!(1.3)),
                tier(PaintTier::Designer, dec!(1.6)),
            ]),
            difficulty: BTreeMap::from([
                level(DifficultyLevel::Basic, dec!(1.0)),
                level(DifficultyLevel::Standard, dec!(1.2)),
                level(DifficultyLevel::Moderate, dec!(1.5)),
                level(DifficultyLevel::Complex, dec!(1.8)),
                level(DifficultyLevel::HighDifficulty, dec!(2.2)),
            ]),
            interior: InteriorWeights::default(),
            exterior: ExteriorWeights::default(),
            minimums: MinimumPricingPolicy::default(),
        }
    }
}

fn is_negative(value: Decimal) -> bool {
    value.is_sign_negative() && !value.is_zero()
}

impl PricingTables {
    /// Applies `overrides` on top of these tables.
    pub fn with_overrides(mut self, overrides: TablesOverrides) -> Self {
        if let Some(rates) = overrides.rates {
            self.rates = rates;
        }
        for (key, change) in overrides.tiers {
            let entry = self.tiers.entry(key).or_insert(TierRate {
                multiplier: Decimal::ONE,
                label: None,
            });
            if let Some(multiplier) = change.multiplier {
                entry.multiplier = multiplier;
            }
            if change.label.is_some() {
                entry.label = change.label;
            }
        }
        self.difficulty.extend(overrides.difficulty);
        if let Some(minimum_base) = overrides.interior.minimum_base {
            self.interior.minimum_base = minimum_base;
        }
        self.interior.surfaces.extend(overrides.interior.surfaces);
        if let Some(trim) = overrides.exterior.trim {
            self.exterior.trim = trim;
        }
        self.exterior.surfaces.extend(overrides.exterior.surfaces);
        if let Some(minimums) = overrides.minimums {
            self.minimums = minimums;
        }
        self
    }

    pub fn tier_multiplier(&self, tier: PaintTier) -> Decimal {
        self.tiers
            .get(tier.as_str())
            .map(|rate| rate.multiplier)
            .unwrap_or(Decimal::ONE)
    }

    pub fn tier_label(&self, tier: PaintTier) -> String {
        self.tiers
            .get(tier.as_str())
            .and_then(|rate| rate.label.clone())
            .unwrap_or_else(|| tier.default_label().to_string())
    }

    pub fn difficulty_multiplier(&self, level: DifficultyLevel) -> Decimal {
        self.difficulty
            .get(level.as_str())
            .copied()
            .unwrap_or(Decimal::ONE)
    }

    pub fn interior_weight(&self, surface: SurfaceId) -> Decimal {
        self.interior
            .surfaces
            .get(surface.as_str())
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn exterior_weight(&self, surface: SurfaceId) -> Decimal {
        self.exterior
            .surfaces
            .get(surface.as_str())
            .copied()
            .unwrap_or(Decimal::ONE)
    }

    /// Rejects tables the engine cannot price sensibly with.
    ///
    /// Every value must be non-negative and within its `MAX_*` bound, the
    /// rate band must not be inverted, and tier multipliers must not
    /// decrease from standard to designer.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(EstimateError::InvalidTables(msg));

        let rates = [
            ("rates.min_per_sqft", self.rates.min_per_sqft),
            ("rates.max_per_sqft", self.rates.max_per_sqft),
        ];
        for (name, value) in rates {
            if is_negative(value) {
                return invalid(format!("{name} must not be negative"));
            }
            if value > MAX_RATE_PER_SQFT {
                return invalid(format!("{name} must not exceed {MAX_RATE_PER_SQFT}"));
            }
        }
        if self.rates.max_per_sqft < self.rates.min_per_sqft {
            return invalid("rates.max_per_sqft must not be below rates.min_per_sqft".to_string());
        }

        let minimums = [
            ("minimums.absolute_minimum", self.minimums.absolute_minimum),
            ("minimums.minimum_spread", self.minimums.minimum_spread),
        ];
        for (name, value) in minimums {
            if is_negative(value) {
                return invalid(format!("{name} must not be negative"));
            }
            if value > MAX_MINIMUM {
                return invalid(format!("{name} must not exceed {MAX_MINIMUM}"));
            }
        }

        let scalars = self
            .tiers
            .iter()
            .map(|(key, rate)| (format!("tiers.{key}"), rate.multiplier))
            .chain(
                self.difficulty
                    .iter()
                    .map(|(key, value)| (format!("difficulty.{key}"), *value)),
            )
            .chain(
                self.interior
                    .surfaces
                    .iter()
                    .map(|(key, value)| (format!("interior.{key}"), *value)),
            )
            .chain(
                self.exterior
                    .surfaces
                    .iter()
                    .map(|(key, value)| (format!("exterior.{key}"), *value)),
            )
            .chain([
                ("interior.minimum_base".to_string(), self.interior.minimum_base),
                ("exterior.trim".to_string(), self.exterior.trim),
            ]);
        for (name, value) in scalars {
            if is_negative(value) {
                return invalid(format!("{name} must not be negative"));
            }
            if value > MAX_MULTIPLIER {
                return invalid(format!("{name} must not exceed {MAX_MULTIPLIER}"));
            }
        }

        for pair in PaintTier::ALL.windows(2) {
            let (lower, higher) = (pair[0], pair[1]);
            if self.tier_multiplier(higher) < self.tier_multiplier(lower) {
                return invalid(format!("tiers.{higher} must not be below tiers.{lower}"));
            }
        }

        Ok(())
    }
}
