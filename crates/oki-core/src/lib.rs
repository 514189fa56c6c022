//! Transcription-to-pronunciation engine for the Okinawan dictionary
//! notation: mora segmentation, kana spellings and register-aware IPA.

pub mod error;
pub mod phoneme;
pub mod render;
pub mod segment;
pub mod tables;
pub mod transliterate;
pub mod unicode;
pub mod word;

pub use error::ConvertError;
pub use tables::PhoneticTables;
pub use word::{analyze, convert, PhonemeSymbols, Pronunciation, Register, WordPhonetics};
