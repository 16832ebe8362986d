pub mod business;
mod db;
pub mod disposal_request;
pub mod testing;
pub mod timeslot;

pub use db::*;
