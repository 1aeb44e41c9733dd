pub mod clients;

pub use airtelmoney_primitives::error::{ApiError, ProviderError};
pub use clients::AirtelClient;
