//! Filters for plain strings.

mod lowercase;

pub use lowercase::LowercaseFilter;
