use paint_estimate::{
    DifficultyLevel, PaintTier, PricingEngine, ProjectInput, ProjectType, SquareFootage,
    SurfaceId,
};
use proptest::prelude::*;
use proptest::sample::{select, subsequence};
use rust_decimal_macros::dec;

fn surfaces_for(project_type: ProjectType) -> Vec<SurfaceId> {
    SurfaceId::ALL
        .into_iter()
        .filter(|surface| surface.allowed_for(project_type))
        .collect()
}

fn project_input() -> impl Strategy<Value = ProjectInput> {
    select(ProjectType::ALL.to_vec()).prop_flat_map(|project_type| {
        let available = surfaces_for(project_type);
        let max = available.len();
        (
            100u32..=20_000,
            select(PaintTier::ALL.to_vec()),
            select(DifficultyLevel::ALL.to_vec()),
            subsequence(available, 0..=max),
        )
            .prop_map(move |(sqft, tier, difficulty, surfaces)| {
                ProjectInput::new(project_type, SquareFootage::new(sqft).unwrap(), tier)
                    .with_difficulty(difficulty)
                    .with_surfaces(surfaces)
            })
    })
}

fn with_square_footage(input: &ProjectInput, sqft: u32) -> ProjectInput {
    let mut resized = input.clone();
    resized.square_footage = SquareFootage::new(sqft).unwrap();
    resized
}

fn with_tier(input: &ProjectInput, tier: PaintTier) -> ProjectInput {
    let mut retiered = input.clone();
    retiered.paint_tier = tier;
    retiered
}

proptest! {
    #[test]
    fn prop_minimum_and_spread_floors_hold(input in project_input()) {
        let estimate = PricingEngine::default().estimate(&input);
        prop_assert!(estimate.min_price.value() >= dec!(3000));
        prop_assert!(estimate.spread() >= dec!(3000));
        prop_assert!(estimate.max_price >= estimate.min_price);
    }

    #[test]
    fn prop_non_decreasing_in_square_footage(input in project_input(), extra in 0u32..=5_000) {
        let engine = PricingEngine::default();
        let sqft = input.square_footage.value();
        let smaller = engine.estimate(&input);
        let larger = engine.estimate(&with_square_footage(&input, sqft + extra));
        prop_assert!(larger.min_price >= smaller.min_price);
        prop_assert!(larger.max_price >= smaller.max_price);
    }

    #[test]
    fn prop_tiers_are_ordered(input in project_input()) {
        let engine = PricingEngine::default();
        let standard = engine.estimate(&with_tier(&input, PaintTier::Standard));
        let premium = engine.estimate(&with_tier(&input, PaintTier::Premium));
        let designer = engine.estimate(&with_tier(&input, PaintTier::Designer));

        prop_assert!(standard.min_price <= premium.min_price);
        prop_assert!(premium.min_price <= designer.min_price);

        let (_, breakdown) =
            engine.estimate_with_breakdown(&with_tier(&input, PaintTier::Standard));
        if breakdown.raw_min > dec!(3000) {
            prop_assert!(standard.min_price < premium.min_price);
            prop_assert!(premium.min_price < designer.min_price);
        }
    }

    #[test]
    fn prop_estimate_is_idempotent(input in project_input()) {
        let engine = PricingEngine::default();
        prop_assert_eq!(engine.estimate(&input), engine.estimate(&input));
    }
}
