//! Entity structs for the timetrack domain.
//!
//! Each entity maps to a table in the libSQL database. Entities that are
//! pushed to QuickBooks Online carry an optional `qbo_id` that stays `None`
//! until the first successful sync.

mod app_info;
mod company;
mod customer;
mod employee;
mod service_item;
mod time_activity;

pub use app_info::AppInfo;
pub use company::{Company, CompanyDetail};
pub use customer::Customer;
pub use employee::Employee;
pub use service_item::ServiceItem;
pub use time_activity::TimeActivity;
