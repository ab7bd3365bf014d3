pub mod auction;
pub mod database;
pub mod error;
pub mod handlers;
pub mod store;
