pub mod cache;
pub mod dispatch;
pub mod history;
pub mod pick;
pub mod repos;
pub mod round;
pub mod schema;
