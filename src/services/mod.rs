pub mod activity_finder;
pub mod autocomplete;
