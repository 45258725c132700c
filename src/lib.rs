//! Nearby customers: great-circle radius search over JSON-lines customer lists.

pub mod config;
pub mod customer;
pub mod error;
pub mod geo;
pub mod logger;
pub mod pipeline;

pub use config::SearchConfig;
pub use customer::{find_closest_customers, parse_customer, Customer, CustomerId, CustomerParsingError};
pub use error::{FinderError, Result};
pub use geo::{great_circle_distance, Location, EARTH_RADIUS_KM};
