use crate::domain::estimate::{Price, PriceEstimate};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct EstimateRecord<'a> {
    row: usize,
    min_price: Price,
    max_price: Price,
    tier_label: &'a str,
}

/// Writes priced rows as CSV: `row,min_price,max_price,tier_label`.
pub struct EstimateWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> EstimateWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes one record. `row` is the 1-based position of the request in
    /// its input.
    pub fn write(&mut self, row: usize, estimate: &PriceEstimate) -> Result<()> {
        self.writer.serialize(EstimateRecord {
            row,
            min_price: estimate.min_price,
            max_price: estimate.max_price,
            tier_label: &estimate.tier_label,
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
