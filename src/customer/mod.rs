//! Customer records: parsing from JSON lines and radius filtering.

pub mod finder;
pub mod parser;
pub mod types;

pub use finder::{find_closest_customers, CustomerFinder};
pub use parser::parse_customer;
pub use types::{Customer, CustomerId, CustomerParsingError};
