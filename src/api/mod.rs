pub mod client;
pub mod traits;
pub mod types;

#[cfg(test)]
pub mod stub;

pub use client::HttpApi;
pub use traits::ListingsApi;
pub use types::LocationRecord;
