//! Collections
//!
//! Bounded containers used to track recently seen items.

mod ring_buffer;

pub use ring_buffer::{DuplicateHandling, RingBuffer};
