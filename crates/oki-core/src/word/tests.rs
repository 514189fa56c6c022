use super::*;
use crate::tables::{PhoneticTables, TableConfigError};

fn tables() -> PhoneticTables {
    PhoneticTables::builtin()
}

fn small_tables() -> Result<PhoneticTables, TableConfigError> {
    let kana = r#"
[mappings]
ka = ["カ"]
zi = ["ジ", "ヂ"]
tu = ["トゥ", "ツ"]
"#;
    let phonetics = r#"
[[entry]]
roman = ["ka"]
kana = [["カ"]]
ipa = ["ka"]

[[entry]]
roman = ["zi"]
kana = [["ジ"], ["ヂ"]]
ipa = ["ʑi", "dʑi"]

[[entry]]
roman = ["tu"]
kana = [["トゥ", "ツ"]]
ipa = ["tu"]
"#;
    PhoneticTables::from_toml(kana, phonetics)
}

#[test]
fn convert_single_mora() {
    let kana = convert(&tables(), "ka").unwrap();
    assert_eq!(kana, vec!["カ"]);
    assert!(kana.iter().all(|k| !k.contains('ー')));
}

#[test]
fn convert_long_vowel() {
    let t = tables();
    let short = convert(&t, "ka").unwrap();
    let long = convert(&t, "kaa").unwrap();
    let expected: Vec<String> = short.iter().map(|k| format!("{k}ー")).collect();
    assert_eq!(long, expected);
}

#[test]
fn convert_cartesian_order() {
    let t = small_tables().unwrap();
    let kana = convert(&t, "zitu").unwrap();
    assert_eq!(kana, vec!["ジトゥ", "ジツ", "ヂトゥ", "ヂツ"]);
}

#[test]
fn convert_sokuon() {
    let kana = convert(&tables(), "kaQta").unwrap();
    assert_eq!(kana, vec!["カッタ"]);
}

#[test]
fn convert_ignorables() {
    let kana = convert(&tables(), "(?uci-naa) =guci]").unwrap();
    assert_eq!(kana, vec!["ウチナーグチ"]);
}

#[test]
fn convert_exception_token() {
    assert_eq!(convert(&tables(), "hNN").unwrap(), vec!["フンー"]);
}

#[test]
fn convert_unknown_mora() {
    let err = convert(&tables(), "kala").unwrap_err();
    assert_eq!(err, ConvertError::UnknownMora { mora: "la".into() });
}

#[test]
fn convert_malformed() {
    let err = convert(&tables(), "kak").unwrap_err();
    assert!(matches!(err, ConvertError::MalformedTranscription { .. }));
}

#[test]
fn analyze_primary_only() {
    let w = analyze(&tables(), "?ama]").unwrap();
    assert_eq!(w.phonemes.simplified, "?ama]");
    assert_eq!(w.phonemes.original, "ʔama<sup>¬</sup>");
    let p = w.primary().unwrap();
    assert_eq!(p.ipa, "ʔama");
    assert_eq!(p.kana, vec!["アマ"]);
    assert!(w.secondary().is_none());
}

#[test]
fn analyze_long_vowel() {
    let w = analyze(&tables(), "kaa").unwrap();
    let p = w.primary().unwrap();
    assert_eq!(p.ipa, "kaː");
    assert_eq!(p.kana, vec!["カー"]);
}

#[test]
fn analyze_secondary_reuses_single_variant_moras() {
    let t = small_tables().unwrap();
    let w = analyze(&t, "kazi").unwrap();
    assert_eq!(
        w.primary(),
        Some(&Pronunciation {
            ipa: "kaʑi".into(),
            kana: vec!["カジ".into()],
        })
    );
    assert_eq!(
        w.secondary(),
        Some(&Pronunciation {
            ipa: "kadʑi".into(),
            kana: vec!["カヂ".into()],
        })
    );
}

#[test]
fn analyze_secondary_long_vowel() {
    let w = analyze(&tables(), "zii").unwrap();
    assert_eq!(w.primary().unwrap().ipa, "ʑiː");
    assert_eq!(w.secondary().unwrap().ipa, "dʑiː");
    assert_eq!(w.secondary().unwrap().kana, vec!["ヂー"]);
}

#[test]
fn analyze_primary_keeps_alternate_spellings() {
    let t = small_tables().unwrap();
    let w = analyze(&t, "tuka").unwrap();
    assert_eq!(w.primary().unwrap().kana, vec!["トゥカ", "ツカ"]);
    assert_eq!(w.primary().unwrap().ipa, "tuka");
}

#[test]
fn analyze_exception_token() {
    let w = analyze(&tables(), "hNN").unwrap();
    assert_eq!(w.pronunciations.len(), 1);
    assert_eq!(w.primary().unwrap(), &exception_pronunciation());
    assert_eq!(w.primary().unwrap().ipa, "hnː");
    assert!(w.secondary().is_none());
    assert_eq!(w.phonemes.original, "hNN");
}

#[test]
fn analyze_exception_requires_exact_match() {
    // With surrounding formatting the token goes through the automaton.
    assert!(analyze(&tables(), "hNN ").is_err());
}

#[test]
fn analyze_empty_transcription() {
    let w = analyze(&tables(), "").unwrap();
    let p = w.primary().unwrap();
    assert_eq!(p.ipa, "");
    assert_eq!(p.kana, vec![""]);
}

#[test]
fn analyze_errors() {
    let t = tables();
    assert_eq!(
        analyze(&t, "la").unwrap_err(),
        ConvertError::UnknownMora { mora: "la".into() }
    );
    assert!(matches!(
        analyze(&t, "kat").unwrap_err(),
        ConvertError::MalformedTranscription { ref partial, .. } if partial == "t"
    ));
}

#[test]
fn failures_leave_tables_usable() {
    let t = tables();
    assert!(analyze(&t, "kat").is_err());
    assert!(analyze(&t, "ka").is_ok());
}

#[test]
fn serialize_word_phonetics() {
    let t = small_tables().unwrap();
    let w = analyze(&t, "zi").unwrap();
    let json = serde_json::to_value(&w).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "phonemes": { "simplified": "zi", "original": "zi" },
            "pronunciation": {
                "HEIMIN": { "IPA": "ʑi", "kana": ["ジ"] },
                "SHIZOKU": { "IPA": "dʑi", "kana": ["ヂ"] },
            }
        })
    );
    let back: WordPhonetics = serde_json::from_value(json).unwrap();
    assert_eq!(back, w);
}

#[test]
fn register_names() {
    assert_eq!(Register::Primary.name(), "HEIMIN");
    assert_eq!(Register::Secondary.name(), "SHIZOKU");
    assert!(Register::Primary < Register::Secondary);
}
