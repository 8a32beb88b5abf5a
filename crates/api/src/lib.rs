//! HTTP layer: configuration, routing, handlers, and the startup seeder.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod seed;
pub mod state;
