//! Human feedback adapters

pub mod console;
