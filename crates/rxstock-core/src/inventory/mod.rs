//! Pharmaceutical inventory extraction from plain text.

mod parser;
pub mod rules;

pub use parser::PharmaLineParser;
pub use rules::is_valid_medicine_name;
