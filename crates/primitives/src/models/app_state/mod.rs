pub mod airtel_details;

pub use airtel_details::*;
