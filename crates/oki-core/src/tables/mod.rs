//! Startup lookup tables.
//!
//! Two resources are loaded once and frozen:
//! - `KanaTable`: mora → flat list of standard spellings, with derived
//!   long-vowel entries.
//! - `PhoneticsTable`: mora → per-variant kana spellings and IPA, indexed by
//!   every equivalent roman key of a record.
//!
//! There is no global instance: callers build `PhoneticTables` once and pass
//! a reference (or an `Arc`) to every conversion.

mod config;
mod kana;
mod phonetics;

pub use config::{parse_kana_toml, parse_phonetics_toml, PhoneticEntry, TableConfigError};
pub use kana::{derive_long_vowels, KanaTable};
pub use phonetics::{PhoneticRecord, PhoneticsTable};

use tracing::{debug, debug_span};

pub const DEFAULT_KANA_TOML: &str = include_str!("default_kana.toml");
pub const DEFAULT_PHONETICS_TOML: &str = include_str!("default_phonetics.toml");

/// Lengthening mark appended to kana spellings of long vowels.
pub const LONG_VOWEL_KANA: &str = "ー";
/// Length mark appended to IPA strings of long vowels.
pub const LONG_VOWEL_IPA: &str = "ː";

/// Returns the embedded default kana table TOML.
pub fn default_kana_toml() -> &'static str {
    DEFAULT_KANA_TOML
}

/// Returns the embedded default phonetics table TOML.
pub fn default_phonetics_toml() -> &'static str {
    DEFAULT_PHONETICS_TOML
}

/// The two frozen lookup tables. Read-only after construction, so a single
/// instance can serve any number of concurrent conversions.
#[derive(Debug, Clone)]
pub struct PhoneticTables {
    kana: KanaTable,
    phonetics: PhoneticsTable,
}

impl PhoneticTables {
    pub fn new(kana: KanaTable, phonetics: PhoneticsTable) -> Self {
        Self { kana, phonetics }
    }

    /// Build from the embedded default tables.
    pub fn builtin() -> Self {
        // build.rs only checks TOML syntax; the table tests cover the rest.
        Self::from_toml(DEFAULT_KANA_TOML, DEFAULT_PHONETICS_TOML)
            .expect("embedded tables must be valid")
    }

    /// Parse, validate and freeze both tables.
    pub fn from_toml(kana_toml: &str, phonetics_toml: &str) -> Result<Self, TableConfigError> {
        let _span = debug_span!("build_tables").entered();
        let kana = KanaTable::build(parse_kana_toml(kana_toml)?);
        let phonetics = PhoneticsTable::build(parse_phonetics_toml(phonetics_toml)?);
        debug!(kana_keys = kana.len(), phonetic_keys = phonetics.len());
        Ok(Self::new(kana, phonetics))
    }

    pub fn kana(&self) -> &KanaTable {
        &self.kana
    }

    pub fn phonetics(&self) -> &PhoneticsTable {
        &self.phonetics
    }
}
