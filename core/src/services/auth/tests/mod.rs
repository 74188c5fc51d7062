//! Tests for authentication service
