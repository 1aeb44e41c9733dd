pub mod airtel;

pub use airtel::AirtelClient;
