//! Request/response bodies

pub mod claims;
