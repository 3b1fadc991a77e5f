// src/services/mod.rs
pub mod completion;
pub mod gemini;
pub mod relay;
