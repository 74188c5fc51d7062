//! Tests for rental service
