//! Compiles a structured South Indian print-design intent into an English
//! image-generation prompt and a Tamil summary of the same design.

pub mod cli;
pub mod compiler;
pub mod config;
pub mod describe;
pub mod errors;
pub mod intent;
pub mod knowledge;
pub mod log;
pub mod prompt;
pub mod provider;
pub mod synth;
pub mod ux;
pub mod wire;

pub use compiler::compile;
pub use describe::describe_in_tamil;
pub use errors::DesignError;
pub use intent::{Category, DesignIntent, JobType, Modifier, ModifierSet};
pub use synth::{generate_prompt, Generated, Source, Synthesizer};
