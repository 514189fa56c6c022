use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use crate::phoneme::{classify, CharClass};
use crate::segment::split_moras;
use crate::unicode::is_katakana_spelling;

#[derive(Deserialize)]
struct KanaConfig {
    mappings: BTreeMap<String, Vec<String>>,
}

#[derive(Deserialize)]
struct PhoneticsConfig {
    #[serde(default)]
    entry: Vec<PhoneticEntry>,
}

/// One `[[entry]]` of the phonetics table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhoneticEntry {
    /// Equivalent transcription keys sharing this record.
    pub roman: Vec<String>,
    /// Kana spellings, one list per variant index.
    pub kana: Vec<Vec<String>>,
    /// IPA, one string per variant index.
    pub ipa: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("table is empty")]
    Empty,
    #[error("key {key:?} contains {symbol:?}, which is not a phonetic symbol")]
    UnknownSymbol { key: String, symbol: char },
    #[error("key {0:?} is not a single mora")]
    NotAMora(String),
    #[error("empty spelling for key: {0}")]
    EmptyValue(String),
    #[error("spelling {value:?} for key {key:?} is not katakana")]
    NotKatakana { key: String, value: String },
    #[error("entry #{0} lists no roman keys")]
    NoRomans(usize),
    #[error("entry for {0:?} has no kana or IPA variant")]
    NoVariants(String),
    #[error("roman key {0:?} appears in more than one entry")]
    DuplicateRoman(String),
}

/// Parse TOML text into a sorted `BTreeMap<mora, spellings>`.
pub fn parse_kana_toml(toml_str: &str) -> Result<BTreeMap<String, Vec<String>>, TableConfigError> {
    let config: KanaConfig =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(TableConfigError::Empty);
    }

    for (key, spellings) in &config.mappings {
        validate_key(key)?;
        validate_spellings(key, spellings)?;
    }

    Ok(config.mappings)
}

/// Parse TOML text into the list of phonetic records.
pub fn parse_phonetics_toml(toml_str: &str) -> Result<Vec<PhoneticEntry>, TableConfigError> {
    let config: PhoneticsConfig =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;

    if config.entry.is_empty() {
        return Err(TableConfigError::Empty);
    }

    let mut seen = HashSet::new();
    for (i, entry) in config.entry.iter().enumerate() {
        let first = entry.roman.first().ok_or(TableConfigError::NoRomans(i))?;
        if entry.kana.is_empty() || entry.ipa.is_empty() {
            return Err(TableConfigError::NoVariants(first.clone()));
        }
        for roman in &entry.roman {
            validate_key(roman)?;
            if !seen.insert(roman.as_str()) {
                return Err(TableConfigError::DuplicateRoman(roman.clone()));
            }
        }
        for spellings in &entry.kana {
            validate_spellings(first, spellings)?;
        }
        if entry.ipa.iter().any(|ipa| ipa.is_empty()) {
            return Err(TableConfigError::EmptyValue(first.clone()));
        }
    }

    Ok(config.entry)
}

fn validate_key(key: &str) -> Result<(), TableConfigError> {
    for symbol in key.chars() {
        match classify(symbol) {
            None | Some(CharClass::Ignorable) => {
                return Err(TableConfigError::UnknownSymbol {
                    key: key.to_string(),
                    symbol,
                })
            }
            Some(_) => {}
        }
    }
    match split_moras(key) {
        Ok(moras) if moras.len() == 1 && moras[0] == key => Ok(()),
        _ => Err(TableConfigError::NotAMora(key.to_string())),
    }
}

fn validate_spellings(key: &str, spellings: &[String]) -> Result<(), TableConfigError> {
    if spellings.is_empty() {
        return Err(TableConfigError::EmptyValue(key.to_string()));
    }
    for value in spellings {
        if value.is_empty() {
            return Err(TableConfigError::EmptyValue(key.to_string()));
        }
        if !is_katakana_spelling(value) {
            return Err(TableConfigError::NotKatakana {
                key: key.to_string(),
                value: value.clone(),
            });
        }
    }
    Ok(())
}
