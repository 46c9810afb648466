//! Model → entity mappers

mod chat;
mod message;
mod reaction;
mod user;
