use crate::error::IntakeError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Interior,
    Exterior,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintTier {
    Standard,
    Premium,
    Designer,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    #[default]
    Basic,
    Standard,
    Moderate,
    Complex,
    HighDifficulty,
}

/// A paintable surface. `Trim` is shared between interior and exterior work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceId {
    Walls,
    Ceilings,
    Trim,
    WoodSiding,
    VinylSiding,
    Cement,
    Stucco,
    Brick,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [Self::Interior, Self::Exterior, Self::Both];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interior => "interior",
            Self::Exterior => "exterior",
            Self::Both => "both",
        }
    }
}

impl PaintTier {
    pub const ALL: [PaintTier; 3] = [Self::Standard, Self::Premium, Self::Designer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Premium => "premium",
            Self::Designer => "designer",
        }
    }

    /// Label shown when a pricing table carries no label for this tier.
    pub fn default_label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Premium => "Premium",
            Self::Designer => "Designer",
        }
    }
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 5] = [
        Self::Basic,
        Self::Standard,
        Self::Moderate,
        Self::Complex,
        Self::HighDifficulty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
            Self::HighDifficulty => "high_difficulty",
        }
    }
}

impl SurfaceId {
    pub const ALL: [SurfaceId; 8] = [
        Self::Walls,
        Self::Ceilings,
        Self::Trim,
        Self::WoodSiding,
        Self::VinylSiding,
        Self::Cement,
        Self::Stucco,
        Self::Brick,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Walls => "walls",
            Self::Ceilings => "ceilings",
            Self::Trim => "trim",
            Self::WoodSiding => "wood_siding",
            Self::VinylSiding => "vinyl_siding",
            Self::Cement => "cement",
            Self::Stucco => "stucco",
            Self::Brick => "brick",
        }
    }

    pub fn is_interior(&self) -> bool {
        matches!(self, Self::Walls | Self::Ceilings | Self::Trim)
    }

    pub fn is_exterior(&self) -> bool {
        !matches!(self, Self::Walls | Self::Ceilings)
    }

    /// Primary exterior surfaces are the siding materials; trim is an add-on.
    pub fn is_primary_exterior(&self) -> bool {
        self.is_exterior() && *self != Self::Trim
    }

    pub fn allowed_for(&self, project_type: ProjectType) -> bool {
        match project_type {
            ProjectType::Interior => self.is_interior(),
            ProjectType::Exterior => self.is_exterior(),
            ProjectType::Both => true,
        }
    }
}

macro_rules! impl_str_conversions {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = IntakeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
                Self::ALL
                    .into_iter()
                    .find(|value| value.as_str() == wanted)
                    .ok_or_else(|| IntakeError::UnknownValue {
                        field: $field,
                        value: s.trim().to_string(),
                    })
            }
        }
    };
}

impl_str_conversions!(ProjectType, "project type");
impl_str_conversions!(PaintTier, "paint tier");
impl_str_conversions!(DifficultyLevel, "difficulty level");
impl_str_conversions!(SurfaceId, "surface");

/// Project area in square feet. Intake never accepts less than
/// [`SquareFootage::MINIMUM`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareFootage(u32);

impl SquareFootage {
    pub const MINIMUM: u32 = 100;

    pub fn new(value: u32) -> Result<Self, IntakeError> {
        if value >= Self::MINIMUM {
            Ok(Self(value))
        } else {
            Err(IntakeError::SquareFootageTooSmall {
                value,
                minimum: Self::MINIMUM,
            })
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for SquareFootage {
    type Error = IntakeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SquareFootage> for Decimal {
    fn from(sqft: SquareFootage) -> Self {
        Decimal::from(sqft.0)
    }
}

/// Everything the pricing engine needs for one estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub project_type: ProjectType,
    pub square_footage: SquareFootage,
    pub paint_tier: PaintTier,
    pub difficulty_level: DifficultyLevel,
    pub surfaces: BTreeSet<SurfaceId>,
}

impl ProjectInput {
    /// Creates an input with the intake defaults: basic difficulty, no surfaces.
    pub fn new(
        project_type: ProjectType,
        square_footage: SquareFootage,
        paint_tier: PaintTier,
    ) -> Self {
        Self {
            project_type,
            square_footage,
            paint_tier,
            difficulty_level: DifficultyLevel::default(),
            surfaces: BTreeSet::new(),
        }
    }

    pub fn with_difficulty(mut self, difficulty_level: DifficultyLevel) -> Self {
        self.difficulty_level = difficulty_level;
        self
    }

    pub fn with_surfaces(mut self, surfaces: impl IntoIterator<Item = SurfaceId>) -> Self {
        self.surfaces = surfaces.into_iter().collect();
        self
    }

    pub fn has_surface(&self, surface: SurfaceId) -> bool {
        self.surfaces.contains(&surface)
    }
}
