pub mod client;
pub mod error;

pub use client::{RecordStore, RestStore, SessionUser};
pub use error::StoreError;
