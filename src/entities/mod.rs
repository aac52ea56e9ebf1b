pub mod leagues;
pub mod matches;
pub mod teams;
