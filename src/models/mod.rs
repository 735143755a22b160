pub mod activity;
pub mod city_suggestion;
pub mod feature;
pub mod search_parameters;
