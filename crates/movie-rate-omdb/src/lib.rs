pub mod api;
pub mod client;
pub mod error;
pub mod traits;

pub use client::{OmdbClient, DEFAULT_BASE_URL};
pub use error::FetchError;
pub use traits::MovieDatabase;
