pub mod auth_dto;
pub mod disbursement_dto;

pub use auth_dto::*;
pub use disbursement_dto::*;
