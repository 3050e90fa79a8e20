pub mod aggregate;
pub mod sort;

pub use aggregate::{Aggregation, DomainAggregator, aggregate_domains};
pub use sort::{SortOrder, sort_domains, sorted};
