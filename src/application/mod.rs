//! Application layer: pricing and intake validation.
//!
//! `PricingEngine` is the entry point for turning a validated project into a
//! price range. The intake module sits in front of it and is the only place
//! that rejects input.

pub mod engine;
pub mod intake;
pub mod surface;
