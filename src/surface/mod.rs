pub mod contract;
pub mod memory;
