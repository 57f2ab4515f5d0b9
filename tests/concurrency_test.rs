use paint_estimate::{DifficultyLevel, PaintTier, PricingEngine, ProjectType, SurfaceId};
use rust_decimal_macros::dec;
use std::sync::Arc;

mod common;
use common::project;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_engine_across_tasks() {
    let engine = Arc::new(PricingEngine::default());

    let handles: Vec<_> = (0..32)
        .map(|_| {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move {
                engine.estimate(&project(
                    ProjectType::Exterior,
                    2000,
                    PaintTier::Premium,
                    DifficultyLevel::Standard,
                    &[SurfaceId::Brick, SurfaceId::Trim],
                ))
            })
        })
        .collect();

    for handle in handles {
        let estimate = handle.await.unwrap();
        assert_eq!(estimate.min_price.value(), dec!(8424));
        assert_eq!(estimate.max_price.value(), dec!(19656));
    }
}

#[test]
fn test_engine_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PricingEngine>();
}
