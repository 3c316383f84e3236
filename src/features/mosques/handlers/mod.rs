pub mod mosque_handler;
pub mod submission_handler;

pub use mosque_handler::*;
pub use submission_handler::*;
