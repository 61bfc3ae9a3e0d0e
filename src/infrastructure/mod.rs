//! Adapters for the domain ports: the in-memory log, approval sources, and the mock
//! payment gateway.

pub mod approval;
pub mod gateway;
pub mod in_memory;
