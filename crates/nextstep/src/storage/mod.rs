pub mod csv_file;
pub mod documents;

pub use csv_file::{CsvBackend, RecordBackend, HEADER};
pub use documents::DocumentTree;
