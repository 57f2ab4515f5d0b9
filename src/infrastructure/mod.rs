pub mod tables_file;
