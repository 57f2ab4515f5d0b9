//! Value types for pricing: project inputs, estimates and the pricing tables.

pub mod estimate;
pub mod project;
pub mod tables;
