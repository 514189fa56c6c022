//! Per-mora pronunciation lookup.

use tracing::trace;

use crate::error::ConvertError;
use crate::segment::Mora;
use crate::tables::{PhoneticsTable, LONG_VOWEL_IPA, LONG_VOWEL_KANA};

/// Kana spellings and IPA of one mora, per variant index.
#[derive(Debug, Clone, PartialEq)]
pub struct MoraReading {
    pub kana: Vec<Vec<String>>,
    pub ipa: Vec<String>,
}

impl MoraReading {
    pub fn primary_kana(&self) -> &[String] {
        self.kana.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn primary_ipa(&self) -> &str {
        self.ipa.first().map(String::as_str).unwrap_or("")
    }

    /// The last variant; equal to the primary one when there is only one.
    pub fn secondary_kana(&self) -> &[String] {
        self.kana.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn secondary_ipa(&self) -> &str {
        self.ipa.last().map(String::as_str).unwrap_or("")
    }

    pub fn has_variants(&self) -> bool {
        self.ipa.len() > 1
    }
}

/// Look up one mora. A long vowel is looked up without its repeated
/// vowel, and every spelling and IPA string then gets a length mark.
pub fn render_mora(table: &PhoneticsTable, mora: &Mora) -> Result<MoraReading, ConvertError> {
    let (key, kana_mark, ipa_mark) = if mora.has_long_vowel() {
        (mora.shortened(), LONG_VOWEL_KANA, LONG_VOWEL_IPA)
    } else {
        (mora.as_str(), "", "")
    };

    let record = table.get(key).ok_or_else(|| ConvertError::UnknownMora {
        mora: mora.to_string(),
    })?;
    trace!(mora = %mora, key, variants = record.variant_count());

    Ok(MoraReading {
        kana: record
            .kana
            .iter()
            .map(|spellings| spellings.iter().map(|s| format!("{s}{kana_mark}")).collect())
            .collect(),
        ipa: record.ipa.iter().map(|ipa| format!("{ipa}{ipa_mark}")).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::split_moras;
    use crate::tables::PhoneticTables;

    fn render(s: &str) -> Result<MoraReading, ConvertError> {
        let tables = PhoneticTables::builtin();
        let moras = split_moras(s).unwrap();
        assert_eq!(moras.len(), 1, "{s} is not a single mora");
        render_mora(tables.phonetics(), &moras[0])
    }

    #[test]
    fn test_short_mora() {
        let r = render("ka").unwrap();
        assert_eq!(r.primary_kana(), ["カ"]);
        assert_eq!(r.primary_ipa(), "ka");
        assert!(!r.has_variants());
        assert_eq!(r.secondary_ipa(), "ka");
    }

    #[test]
    fn test_long_mora_gets_marks() {
        let r = render("kaa").unwrap();
        assert_eq!(r.primary_kana(), ["カー"]);
        assert_eq!(r.primary_ipa(), "kaː");
    }

    #[test]
    fn test_long_mora_with_alternates() {
        let r = render("tuu").unwrap();
        assert_eq!(r.primary_kana(), ["トゥー", "ツー"]);
        assert_eq!(r.primary_ipa(), "tuː");
    }

    #[test]
    fn test_register_variants() {
        let r = render("zii").unwrap();
        assert!(r.has_variants());
        assert_eq!(r.primary_kana(), ["ジー"]);
        assert_eq!(r.primary_ipa(), "ʑiː");
        assert_eq!(r.secondary_kana(), ["ヂー"]);
        assert_eq!(r.secondary_ipa(), "dʑiː");
    }

    #[test]
    fn test_glottal_prefix() {
        let r = render("?a").unwrap();
        assert_eq!(r.primary_ipa(), "ʔa");
        let r = render("'a").unwrap();
        assert_eq!(r.primary_ipa(), "a");
    }

    #[test]
    fn test_unknown_mora() {
        let err = render("la").unwrap_err();
        assert_eq!(err, ConvertError::UnknownMora { mora: "la".into() });
        let err = render("laa").unwrap_err();
        assert_eq!(err, ConvertError::UnknownMora { mora: "laa".into() });
    }
}
