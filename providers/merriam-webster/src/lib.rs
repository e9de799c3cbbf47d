pub mod client;
pub mod markup;
pub mod response;

pub use client::MerriamWebsterClient;
pub use response::parse_response;
