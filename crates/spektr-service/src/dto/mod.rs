//! Data transfer objects for action payloads and responses
//!
//! This module provides:
//! - Request DTOs with validation for action payloads
//! - Response DTOs for serializing action results
//! - Mappers for converting domain entities to DTOs
//!
//! Wire keys are camelCase throughout, matching the client contract.

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    ChatListRequest, LoginRequest, MessageListRequest, RegisterRequest, SearchUsersRequest,
    SendMessageRequest, UpdateProfileRequest,
};

pub use responses::{
    AuthResponse, ChatResponse, HealthChecks, HealthResponse, MessageResponse, ReactionResponse,
    ReadinessResponse, UserResponse, UserSummaryResponse,
};
