//! Command workflow, kept apart from argument parsing in `main.rs`

pub mod orchestration;

pub use orchestration::{run_bump, BumpOptions};
