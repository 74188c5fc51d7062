//! Review service test suite
