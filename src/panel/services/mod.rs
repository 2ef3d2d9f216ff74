//! # Services Layer
//!
//! Talks to the remote authentication API and decodes what it answers.

pub mod auth;
pub mod responses;

pub use auth::{AuthEndpoints, AuthReply, AuthRequest, AuthService, RequestError, RequestKind};
pub use responses::{
    RawResponse, RegistrationResponse, ResponseError, SignInResponse, SignUpResponse,
};
