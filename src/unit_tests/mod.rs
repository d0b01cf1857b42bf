#[macro_use]
mod test_utils;

mod property_tests;
