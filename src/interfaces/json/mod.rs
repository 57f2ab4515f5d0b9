pub mod submission_writer;
