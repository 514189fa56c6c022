//! Word-level conversion: segmentation, per-mora lookup and combination
//! into register-specific pronunciations.

mod product;
#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::error::ConvertError;
use crate::render::{render_mora, MoraReading};
use crate::segment::split_moras;
use crate::tables::PhoneticTables;
use crate::transliterate::to_original_phonemes;

use product::join_product;

/// Speaker register whose pronunciation diverged historically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Register {
    /// Commoner reading; always present.
    #[serde(rename = "HEIMIN")]
    Primary,
    /// Samurai-class reading; present only where the registers diverge.
    #[serde(rename = "SHIZOKU")]
    Secondary,
}

impl Register {
    pub fn name(self) -> &'static str {
        match self {
            Register::Primary => "HEIMIN",
            Register::Secondary => "SHIZOKU",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronunciation {
    #[serde(rename = "IPA")]
    pub ipa: String,
    pub kana: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhonemeSymbols {
    /// The transcription as given.
    pub simplified: String,
    /// Display form with IPA glyphs.
    pub original: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPhonetics {
    pub phonemes: PhonemeSymbols,
    #[serde(rename = "pronunciation")]
    pub pronunciations: BTreeMap<Register, Pronunciation>,
}

impl WordPhonetics {
    pub fn get(&self, register: Register) -> Option<&Pronunciation> {
        self.pronunciations.get(&register)
    }

    pub fn primary(&self) -> Option<&Pronunciation> {
        self.get(Register::Primary)
    }

    pub fn secondary(&self) -> Option<&Pronunciation> {
        self.get(Register::Secondary)
    }
}

/// Token whose notation does not follow the mora grammar.
const EXCEPTION: &str = "hNN";

fn exception_pronunciation() -> Pronunciation {
    Pronunciation {
        ipa: "hnː".to_string(),
        kana: vec!["フンー".to_string()],
    }
}

fn combine<'a>(
    readings: &'a [MoraReading],
    ipa: impl Fn(&'a MoraReading) -> &'a str,
    kana: impl Fn(&'a MoraReading) -> &'a [String],
) -> Pronunciation {
    Pronunciation {
        ipa: readings.iter().map(ipa).collect(),
        kana: join_product(readings.iter().map(kana)),
    }
}

/// Pronunciation per register for one transcription.
///
/// The secondary register is emitted only when at least one mora has more
/// than one variant; moras with a single variant contribute it unchanged
/// to both registers.
pub fn pronunciations(
    tables: &PhoneticTables,
    transcription: &str,
) -> Result<BTreeMap<Register, Pronunciation>, ConvertError> {
    if transcription == EXCEPTION {
        return Ok(BTreeMap::from([(
            Register::Primary,
            exception_pronunciation(),
        )]));
    }

    let readings = split_moras(transcription)?
        .iter()
        .map(|mora| render_mora(tables.phonetics(), mora))
        .collect::<Result<Vec<_>, _>>()?;

    let mut result = BTreeMap::new();
    result.insert(
        Register::Primary,
        combine(&readings, MoraReading::primary_ipa, MoraReading::primary_kana),
    );
    if readings.iter().any(MoraReading::has_variants) {
        result.insert(
            Register::Secondary,
            combine(
                &readings,
                MoraReading::secondary_ipa,
                MoraReading::secondary_kana,
            ),
        );
    }
    Ok(result)
}

/// Full phonetic analysis of one transcription.
pub fn analyze(tables: &PhoneticTables, transcription: &str) -> Result<WordPhonetics, ConvertError> {
    let _span = debug_span!("analyze", transcription).entered();
    let pronunciations = pronunciations(tables, transcription)?;
    debug!(registers = pronunciations.len());
    Ok(WordPhonetics {
        phonemes: PhonemeSymbols {
            simplified: transcription.to_string(),
            original: to_original_phonemes(transcription),
        },
        pronunciations,
    })
}

/// Every standard kana spelling of a transcription, from the kana table.
pub fn convert(tables: &PhoneticTables, transcription: &str) -> Result<Vec<String>, ConvertError> {
    let _span = debug_span!("convert", transcription).entered();
    if transcription == EXCEPTION {
        return Ok(exception_pronunciation().kana);
    }

    let moras = split_moras(transcription)?;
    let slots = moras
        .iter()
        .map(|mora| {
            tables
                .kana()
                .get(mora.as_str())
                .ok_or_else(|| ConvertError::UnknownMora {
                    mora: mora.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let spellings = join_product(slots);
    debug!(spelling_count = spellings.len());
    Ok(spellings)
}
