//! Radius filter over customer streams.

use super::types::Customer;
use crate::geo::{great_circle_distance, Location};

/// Lazily keep the customers at `distance` km or closer to `center`, in input order.
pub fn find_closest_customers<I>(
    customers: I,
    distance: f64,
    center: impl Into<Location>,
) -> impl Iterator<Item = Customer>
where
    I: IntoIterator<Item = Customer>,
{
    let finder = CustomerFinder::new(center, distance);
    customers.into_iter().filter(move |c| finder.is_close_enough(c))
}

/// A fixed center and radius against which customers are tested.
#[derive(Debug, Clone, Copy)]
pub struct CustomerFinder {
    center: Location,
    radius_km: f64,
}

impl CustomerFinder {
    pub fn new(center: impl Into<Location>, radius_km: f64) -> Self {
        Self { center: center.into(), radius_km }
    }

    pub fn distance_to(&self, customer: &Customer) -> f64 {
        great_circle_distance(self.center, customer.location)
    }

    pub fn is_close_enough(&self, customer: &Customer) -> bool {
        self.distance_to(customer) <= self.radius_km
    }
}
