pub mod coordinate_parser;
pub mod reading_format;
