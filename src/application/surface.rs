//! Surface-multiplier resolution, one pure function per project type.

use crate::domain::project::{ProjectType, SurfaceId};
use crate::domain::tables::PricingTables;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

/// Resolves the scalar applied to both ends of the per-square-foot band.
pub fn surface_multiplier(
    tables: &PricingTables,
    project_type: ProjectType,
    surfaces: &BTreeSet<SurfaceId>,
) -> Decimal {
    match project_type {
        ProjectType::Interior => interior_multiplier(tables, surfaces),
        ProjectType::Exterior => exterior_multiplier(tables, surfaces),
        ProjectType::Both => combined_multiplier(tables, surfaces),
    }
}

/// Interior weights stack. Work that skips the walls still pays the minimum
/// base weight so it is never priced at zero.
pub fn interior_multiplier(tables: &PricingTables, surfaces: &BTreeSet<SurfaceId>) -> Decimal {
    if surfaces.is_empty() {
        return Decimal::ONE;
    }

    let mut multiplier: Decimal = [SurfaceId::Walls, SurfaceId::Ceilings, SurfaceId::Trim]
        .into_iter()
        .filter(|surface| surfaces.contains(surface))
        .map(|surface| tables.interior_weight(surface))
        .fold(Decimal::ZERO, Decimal::saturating_add);

    if !surfaces.contains(&SurfaceId::Walls) {
        multiplier = multiplier.saturating_add(tables.interior.minimum_base);
    }
    multiplier
}

/// Exterior weights do not stack: the hardest selected surface dominates,
/// with trim added on top.
pub fn exterior_multiplier(tables: &PricingTables, surfaces: &BTreeSet<SurfaceId>) -> Decimal {
    let trim = surfaces.contains(&SurfaceId::Trim);
    match (primary_exterior_weight(tables, surfaces), trim) {
        (None, false) => Decimal::ONE,
        (None, true) => Decimal::ONE.saturating_add(tables.exterior.trim),
        (Some(weight), false) => weight,
        (Some(weight), true) => weight.saturating_add(tables.exterior.trim),
    }
}

/// Blends the interior and exterior sides as an arithmetic mean.
///
/// Trim always counts toward the exterior side. It only counts toward the
/// interior side when walls or ceilings are selected too.
pub fn combined_multiplier(tables: &PricingTables, surfaces: &BTreeSet<SurfaceId>) -> Decimal {
    let trim = surfaces.contains(&SurfaceId::Trim);

    let interior_surfaces: Vec<SurfaceId> = [SurfaceId::Walls, SurfaceId::Ceilings]
        .into_iter()
        .filter(|surface| surfaces.contains(surface))
        .collect();
    let mut interior: Decimal = interior_surfaces
        .iter()
        .map(|surface| tables.interior_weight(*surface))
        .fold(Decimal::ZERO, Decimal::saturating_add);
    if trim && !interior_surfaces.is_empty() {
        interior = interior.saturating_add(tables.interior_weight(SurfaceId::Trim));
    }

    let mut exterior = primary_exterior_weight(tables, surfaces).unwrap_or(Decimal::ONE);
    if trim {
        exterior = exterior.saturating_add(tables.exterior.trim);
    }

    interior.max(Decimal::ONE) / Decimal::TWO + exterior / Decimal::TWO
}

fn primary_exterior_weight(
    tables: &PricingTables,
    surfaces: &BTreeSet<SurfaceId>,
) -> Option<Decimal> {
    surfaces
        .iter()
        .filter(|surface| surface.is_primary_exterior())
        .map(|surface| tables.exterior_weight(*surface))
        .max()
}
