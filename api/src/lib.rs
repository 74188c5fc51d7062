//! DriveEasy API crate
//!
//! HTTP layer of the car rental backend: Actix Web application factory,
//! route handlers, JWT middleware, and the request/response DTOs. Domain
//! logic lives in `de_core`, persistence in `de_infra`.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
