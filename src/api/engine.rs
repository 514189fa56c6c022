use std::fs;
use std::path::Path;
use std::sync::Arc;

use oki_core::render::{render_mora, MoraReading};
use oki_core::segment::{split_moras, Mora};
use oki_core::tables::{PhoneticTables, DEFAULT_KANA_TOML, DEFAULT_PHONETICS_TOML};
use oki_core::{ConvertError, WordPhonetics};
use tracing::info;

use super::EngineError;

/// Shared handle over the frozen phonetic tables.
#[derive(Debug, Clone)]
pub struct Engine {
    tables: Arc<PhoneticTables>,
}

impl Engine {
    pub fn new(tables: PhoneticTables) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }

    /// Engine over the embedded default tables.
    pub fn builtin() -> Self {
        Self::new(PhoneticTables::builtin())
    }

    pub fn from_toml(kana_toml: &str, phonetics_toml: &str) -> Result<Self, EngineError> {
        Ok(Self::new(PhoneticTables::from_toml(kana_toml, phonetics_toml)?))
    }

    /// Load tables from files. `None` selects the embedded default for that
    /// table.
    pub fn open(kana: Option<&Path>, phonetics: Option<&Path>) -> Result<Self, EngineError> {
        let kana_toml = read_or_default(kana, DEFAULT_KANA_TOML)?;
        let phonetics_toml = read_or_default(phonetics, DEFAULT_PHONETICS_TOML)?;
        let engine = Self::from_toml(&kana_toml, &phonetics_toml)?;
        info!(
            kana_keys = engine.tables.kana().len(),
            phonetic_keys = engine.tables.phonetics().len(),
            "phonetic tables loaded"
        );
        Ok(engine)
    }

    pub fn tables(&self) -> &PhoneticTables {
        &self.tables
    }

    /// All kana spellings of the word, first mora varying slowest.
    pub fn convert(&self, transcription: &str) -> Result<Vec<String>, ConvertError> {
        oki_core::convert(&self.tables, transcription)
    }

    pub fn analyze(&self, transcription: &str) -> Result<WordPhonetics, ConvertError> {
        oki_core::analyze(&self.tables, transcription)
    }

    pub fn split_moras(&self, transcription: &str) -> Result<Vec<Mora>, ConvertError> {
        split_moras(transcription)
    }

    /// Each mora of the word with its per-variant readings.
    pub fn mora_readings(
        &self,
        transcription: &str,
    ) -> Result<Vec<(Mora, MoraReading)>, ConvertError> {
        split_moras(transcription)?
            .into_iter()
            .map(|mora| {
                let reading = render_mora(self.tables.phonetics(), &mora)?;
                Ok((mora, reading))
            })
            .collect()
    }
}

fn read_or_default(path: Option<&Path>, default: &str) -> Result<String, EngineError> {
    match path {
        Some(p) => fs::read_to_string(p).map_err(|source| EngineError::Io {
            path: p.to_path_buf(),
            source,
        }),
        None => Ok(default.to_string()),
    }
}
