//! # tt-qbo
//!
//! QuickBooks Online integration for timetrack:
//! - wire types for the handful of QBO entities the app uses
//! - query builders for name-based lookups
//! - mappers from local entities to QBO objects
//! - the [`DataService`] capability and its `reqwest` implementation
//! - [`QboGateway`], which performs idempotent lookup-or-create per entity
//!   and persists the returned remote IDs

pub mod client;
pub mod gateway;
pub mod mappers;
pub mod model;
pub mod query;
pub mod service;

mod error;
mod http;

#[cfg(test)]
mod test_support;

pub use client::{HttpDataService, HttpDataServiceFactory};
pub use error::QboError;
pub use gateway::QboGateway;
pub use service::{DataService, DataServiceFactory};
