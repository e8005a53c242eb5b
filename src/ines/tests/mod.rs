pub(crate) mod test_utils;
mod header_tests;
