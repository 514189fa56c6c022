//! Embedding facade for the Okinawan transcription engine.
//!
//! `Engine` owns the frozen lookup tables behind an `Arc`; clone it freely
//! and call `convert`/`analyze` from any thread.

pub mod api;
pub mod trace_init;

pub use api::{engine_version, Engine, EngineError};
pub use oki_core::render::MoraReading;
pub use oki_core::segment::Mora;
pub use oki_core::tables::{self, PhoneticTables, TableConfigError};
pub use oki_core::unicode;
pub use oki_core::{ConvertError, PhonemeSymbols, Pronunciation, Register, WordPhonetics};
