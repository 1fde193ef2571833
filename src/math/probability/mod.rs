// src/math/probability/mod.rs

pub mod seed;

pub use seed::SeedResource;
