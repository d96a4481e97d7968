//! # tt-core
//!
//! Core types shared across all timetrack crates:
//! - Entity structs for the local domain (companies, employees, customers,
//!   service items, time activities, OAuth app info)
//! - `Money` value type for service item rates
//! - ID prefix constants
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod errors;
pub mod ids;
pub mod money;
pub mod responses;
