//! Portal API adapter.

mod client;
mod dto;

pub use client::PortalClient;
pub use dto::{AuthResponse, ErrorResponse, UserResponse};
