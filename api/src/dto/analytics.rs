//! Query DTOs for the analytics endpoints.
//!
//! The report payloads themselves are the core read-model types from
//! `de_core::domain::value_objects::reports`, which already serialize with
//! camelCase keys; only the query parameters need DTOs here.

use serde::Deserialize;

/// Date window plus optional category filter for the rental statistics
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalStatsQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub category: Option<String>,
}

/// Date window for the car availability report
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}
