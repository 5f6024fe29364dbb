mod client;
mod envelope;
mod error;

pub use client::HttpContentApi;
pub use envelope::ApiEnvelope;
