//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id with pepper and zeroization)
//! - Compact signed tokens (HS256 JWT)
//! - Bearer token extraction from the `Authorization` header
//! - Secret generation and decoding

pub mod bearer;
pub mod crypto;
pub mod password;
pub mod token;
