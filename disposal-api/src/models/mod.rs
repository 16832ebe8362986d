pub mod business;
pub mod disposal_request;
pub mod timeslot;

// Re-export models for easier access
pub use business::*;
pub use disposal_request::*;
pub use timeslot::*;
