//! # spektr-api
//!
//! HTTP transport adapter built with Axum. Every data operation arrives as
//! `POST /?action=<name>` with a JSON body; the transport decodes it into
//! an action and hands it to the dispatcher.

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
