//! Public entry points: the `Engine` handle and its error type.

mod engine;
mod types;

pub use engine::Engine;
pub use types::EngineError;

pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
