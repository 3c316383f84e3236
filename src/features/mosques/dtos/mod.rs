pub mod mosque_dto;
pub mod submission_dto;

pub use mosque_dto::*;
pub use submission_dto::*;
