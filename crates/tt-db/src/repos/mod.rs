//! Repository modules implementing persistence for all timetrack entities.
//!
//! Each module adds methods to `TtService` via `impl TtService` blocks.

pub mod app_info;
pub mod company;
pub mod customer;
pub mod employee;
pub mod service_item;
pub mod status;
pub mod time_activity;
