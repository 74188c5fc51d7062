//! Catalog service test suite
