//! File formats at the edge of the crate: CSV intake and estimates, JSON
//! submission documents.

pub mod csv;
pub mod json;
