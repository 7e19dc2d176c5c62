#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod system;

// Re-export system probe implementation
pub use system::DefaultSystemProbe;
