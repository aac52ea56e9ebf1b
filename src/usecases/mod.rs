pub mod leagues;
pub mod match_status;
pub mod matches;
pub mod notifications;
pub mod teams;
