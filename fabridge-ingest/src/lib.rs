//! fabridge-ingest: bank-specific record mappers, the statement normalizer,
//! and the CSV reading/writing around it.

pub mod csv_io;
pub mod normalize;
pub mod parsers;

pub use csv_io::{
    convert_file, convert_reader, detect_file_format, output_path_for, read_records,
    records_to_string, write_records,
};
pub use normalize::normalize;
