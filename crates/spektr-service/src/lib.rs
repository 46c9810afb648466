//! # spektr-service
//!
//! Application layer containing the action dispatcher, business logic
//! services, and DTOs.

pub mod dispatch;
pub mod dto;
pub mod services;

pub use dispatch::{dispatch, Action, ActionReply};
pub use dto::{HealthResponse, ReadinessResponse};
pub use services::{ServiceContext, ServiceError, ServiceResult};
