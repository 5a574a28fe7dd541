//! Stream helpers for data persisted outside of Kafka
//!
//! [`CompressionType`] maps a compression name to its file extension and
//! wraps readers and writers in the matching codec. Kafka's own message
//! compression is configured through `compression.type` and is not handled
//! here.

mod compression;

pub use compression::{CompressedReader, CompressedWriter, CompressionType};

#[cfg(test)]
mod tests;
