/// Outbound adapters - infrastructure implementations of the outbound ports
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod repository;
