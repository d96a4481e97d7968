pub mod company;
pub mod dispatch;
pub mod init;
pub mod listing;
pub mod schema;
pub mod shared;
pub mod status;
pub mod sync;
pub mod time;
