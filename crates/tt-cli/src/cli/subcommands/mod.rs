pub mod company;
pub mod listing;
pub mod sync;
pub mod time;

pub use company::CompanyCommands;
pub use listing::{CustomerCommands, EmployeeCommands, ItemCommands, ListArgs};
pub use sync::SyncCommands;
pub use time::TimeCommands;
