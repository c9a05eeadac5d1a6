//! HTTP layer: configuration, page assembly, routes and the server itself.
//!
//! Endpoints:
//!
//! - `GET  /` - dimension selection forms
//! - `POST /cnt_trade_plot`, `/decade_plot`, `/region_year_plot`,
//!   `/income_year_plot` - rendered charts
//! - `GET  /health` - liveness probe

pub mod config;
pub mod pages;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::DashboardServer;
