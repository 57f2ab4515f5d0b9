pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::engine::{PricingBreakdown, PricingEngine};
pub use domain::estimate::{Price, PriceEstimate};
pub use domain::project::{
    DifficultyLevel, PaintTier, ProjectInput, ProjectType, SquareFootage, SurfaceId,
};
pub use domain::tables::PricingTables;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging on stderr.
///
/// Defaults to `warn`; set `RUST_LOG` (e.g. `RUST_LOG=paint_estimate=debug`)
/// to see per-estimate events. Can only be called once per process.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
