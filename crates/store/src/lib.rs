//! Storage adapters for the order repository contract.

pub mod memory;

pub use memory::MemoryOrderRepository;
