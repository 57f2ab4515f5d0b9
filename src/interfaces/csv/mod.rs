pub mod estimate_writer;
pub mod intake_reader;
