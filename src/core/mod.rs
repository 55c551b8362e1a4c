//! Configuration and the random value source

pub mod config;
pub mod rng;
