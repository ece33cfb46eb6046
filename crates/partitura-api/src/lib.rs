//! Typed JSON contract of the Partitura catalog REST API.
//!
//! The storefront core never speaks HTTP itself; callers fetch
//! `GET /api/scores` (and friends) with whatever client they have and use
//! these types to build query strings and decode the payloads. The shapes
//! here mirror the backend's responses exactly, camelCase and all.

pub mod error;
pub mod request;
pub mod response;

pub use error::ContractError;
pub use request::ScoresRequest;
pub use response::{ApiResponse, ListMeta, ScoreList};
