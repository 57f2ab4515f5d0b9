use crate::application::intake::IntakeForm;
use crate::error::{EstimateError, Result};
use std::io::Read;

/// Reads estimate requests from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<IntakeForm>`.
/// It handles whitespace trimming and flexible record lengths automatically.
/// Columns are matched by header name, so any subset of the intake columns in
/// any order is accepted.
pub struct IntakeReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> IntakeReader<R> {
    /// Creates a new `IntakeReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes intake forms.
    pub fn forms(self) -> impl Iterator<Item = Result<IntakeForm>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(EstimateError::from))
    }
}
