//! # Cardz CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! Cardz is organized as a Cargo workspace with two crates:
//! - `crates/cardzapp/` — Core library with UI-agnostic business logic
//! - `crates/cardz/` — This CLI tool, depends on the `cardzapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/cardz/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Command dispatch + context wiring (commands.rs)          │
//! │  - Terminal rendering via console (render.rs)               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/cardzapp/src/api.rs)                     │
//! │  - Owns the in-memory card, loads once, persists each edit  │
//! │  - Normalizes display indexes → link ids                    │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (crates/cardzapp/src/commands/*)             │
//! │  - Pure business logic                                      │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer is therefore
//! responsible for **all** user-facing concerns: argument parsing, context
//! initialization, confirmation prompts, error handling, and rendering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
