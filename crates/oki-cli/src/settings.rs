//! ETL settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Upper bound on meaning columns per headword in the source dictionary.
const MAX_MEANINGS: usize = 5;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub index: IndexSettings,
    pub o2y: OkiToYamatoColumns,
    pub y2o: YamatoToOkiColumns,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KanaScript {
    Katakana,
    Hiragana,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexSettings {
    pub script: KanaScript,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OkiToYamatoColumns {
    pub page: String,
    pub headword: String,
    pub accent: String,
    pub pos: String,
    pub bungo_type: String,
    pub amendment: String,
    pub meanings: Vec<String>,
    pub remarks: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YamatoToOkiColumns {
    pub page: String,
    pub headword: String,
    pub kanji: String,
    pub explanation: String,
    pub contents: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_column {
        ($section:ident . $field:ident) => {
            if s.$section.$field.trim().is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "column name must not be empty".to_string(),
                });
            }
        };
    }

    check_column!(o2y.page);
    check_column!(o2y.headword);
    check_column!(o2y.accent);
    check_column!(o2y.pos);
    check_column!(o2y.bungo_type);
    check_column!(o2y.amendment);
    check_column!(o2y.remarks);

    check_column!(y2o.page);
    check_column!(y2o.headword);
    check_column!(y2o.kanji);
    check_column!(y2o.explanation);
    check_column!(y2o.contents);

    let meanings = &s.o2y.meanings;
    if meanings.is_empty() || meanings.len() > MAX_MEANINGS {
        return Err(SettingsError::InvalidValue {
            field: "o2y.meanings".to_string(),
            reason: format!("must list 1 to {MAX_MEANINGS} columns"),
        });
    }
    if meanings.iter().any(|m| m.trim().is_empty()) {
        return Err(SettingsError::InvalidValue {
            field: "o2y.meanings".to_string(),
            reason: "column name must not be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const Y2O: &str = r#"
[y2o]
page = "page"
headword = "head"
kanji = "kanji"
explanation = "expl"
contents = "contents"
"#;

    fn with_o2y(o2y: &str) -> String {
        format!("[index]\nscript = \"hiragana\"\n\n[o2y]\n{o2y}\n{Y2O}")
    }

    const O2Y_VALID: &str = r#"
page = "page"
headword = "head"
accent = "accent"
pos = "pos"
bungo_type = "bungo"
amendment = "amend"
meanings = ["m1", "m2"]
remarks = "remarks"
"#;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.index.script, KanaScript::Katakana);
        assert_eq!(s.o2y.page, "辞書\nページ");
        assert_eq!(s.o2y.headword, "見出し語");
        assert_eq!(s.o2y.meanings.len(), 5);
        assert_eq!(s.o2y.meanings[0], "意味 1.");
        assert_eq!(s.y2o.contents, "内容");
    }

    #[test]
    fn parse_valid_custom_toml() {
        let s = parse_settings_toml(&with_o2y(O2Y_VALID)).unwrap();
        assert_eq!(s.index.script, KanaScript::Hiragana);
        assert_eq!(s.o2y.meanings, vec!["m1", "m2"]);
        assert_eq!(s.y2o.headword, "head");
    }

    #[test]
    fn error_empty_column() {
        let toml = with_o2y(&O2Y_VALID.replace("pos = \"pos\"", "pos = \"  \""));
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("o2y.pos"));
    }

    #[test]
    fn error_too_many_meanings() {
        let toml = with_o2y(&O2Y_VALID.replace(
            "[\"m1\", \"m2\"]",
            "[\"1\", \"2\", \"3\", \"4\", \"5\", \"6\"]",
        ));
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("o2y.meanings"));
    }

    #[test]
    fn error_no_meanings() {
        let toml = with_o2y(&O2Y_VALID.replace("[\"m1\", \"m2\"]", "[]"));
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("o2y.meanings"));
    }

    #[test]
    fn error_unknown_script() {
        let toml = with_o2y(O2Y_VALID).replace("hiragana", "romaji");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("[index]\nscript = \"katakana\"\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
