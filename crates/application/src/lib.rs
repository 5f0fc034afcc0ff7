//! solcasa Application Layer
//!
//! Ports (traits implemented by infrastructure) and the resolution pipeline
//! built on top of them.
pub mod ports;
pub mod services;
pub mod use_cases;
