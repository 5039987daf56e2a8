//! Storage implementations for result records

pub mod in_memory;

pub use in_memory::InMemoryRecordStore;
