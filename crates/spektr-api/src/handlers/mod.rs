//! Request handlers

pub mod actions;
pub mod health;
