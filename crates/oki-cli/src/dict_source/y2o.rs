use oki_engine::unicode::{is_hiragana, is_kanji, is_katakana, katakana_to_hiragana};
use serde::Serialize;
use tracing::trace;

use super::{DictSource, DictSourceError, Row};
use crate::settings::YamatoToOkiColumns;

/// Separates translation groups in the contents column.
const GROUP_SEPARATOR: char = '/';
/// Full-width comma separating alternatives.
const FULLWIDTH_COMMA: char = '，';
/// A chunk consisting of this arrow is glued to the next script run.
const ARROW: &str = "→";

/// Japanese → Okinawan dictionary. Headwords are Japanese; the Okinawan
/// side lives in the free-text contents column.
pub struct YamatoToOki {
    columns: YamatoToOkiColumns,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translations {
    pub base: Vec<String>,
    pub related: Vec<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct YamatoToOkiRecord {
    #[serde(rename = "page-in-dict")]
    pub page_in_dict: String,
    pub index: Vec<String>,
    pub kanji: String,
    pub explanation: String,
    pub translations: Translations,
}

impl YamatoToOki {
    pub fn new(columns: YamatoToOkiColumns) -> Self {
        Self { columns }
    }
}

impl DictSource for YamatoToOki {
    type Record = YamatoToOkiRecord;

    fn convert_row(&self, row: &Row<'_>) -> Result<YamatoToOkiRecord, DictSourceError> {
        let c = &self.columns;
        Ok(YamatoToOkiRecord {
            page_in_dict: row.get(&c.page)?.to_string(),
            index: vec![katakana_to_hiragana(row.get(&c.headword)?)],
            kanji: row.get(&c.kanji)?.to_string(),
            explanation: row.get(&c.explanation)?.to_string(),
            translations: parse_contents(row.get(&c.contents)?),
        })
    }
}

/// Split the contents column into base translations and related-word
/// groups.
pub fn parse_contents(contents: &str) -> Translations {
    let mut groups = contents.split(GROUP_SEPARATOR);
    let base = groups
        .next()
        .unwrap_or("")
        .split(FULLWIDTH_COMMA)
        .map(str::to_string)
        .collect();
    let related = groups
        .map(|group| split_related_words(&group.replace(' ', "")))
        .collect();
    let translations = Translations { base, related };
    trace!(?translations);
    translations
}

fn is_japanese(c: char) -> bool {
    is_hiragana(c)
        || is_katakana(c)
        || is_kanji(c)
        // CJK symbols and punctuation
        || ('\u{3000}'..='\u{303F}').contains(&c)
        // full-width ASCII variants
        || ('\u{FF01}'..='\u{FF5E}').contains(&c)
        // half-width katakana
        || ('\u{FF61}'..='\u{FF9F}').contains(&c)
}

fn is_romanized(c: char) -> bool {
    (c.is_ascii() && !c.is_ascii_digit()) || "ĀāĪīŪūĒēŌō‘’“”".contains(c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run {
    Japanese,
    Romanized,
}

/// Split one related-words group into chunks by script run.
///
/// A parenthesised group sticks to the current chunk. `，` stays inside
/// Japanese runs but ends a chunk inside romanized runs. A lone `→` is
/// glued to whatever run follows it. Any other symbol starts a chunk.
pub fn split_related_words(group: &str) -> Vec<String> {
    let chars: Vec<char> = group.chars().collect();
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut run = Run::Japanese;
    let mut i = 0;

    // Start a new chunk at `c`, unless the current chunk is a lone arrow.
    fn switch(chunks: &mut Vec<String>, current: &mut String, c: char) {
        if !current.is_empty() && current.as_str() != ARROW {
            chunks.push(std::mem::take(current));
        }
        current.push(c);
    }

    while i < chars.len() {
        let c = chars[i];
        if c == '(' {
            let end = chars[i..]
                .iter()
                .position(|&x| x == ')')
                .map_or(chars.len(), |p| i + p + 1);
            current.extend(&chars[i..end]);
            i = end;
            continue;
        }

        if c == FULLWIDTH_COMMA {
            match run {
                Run::Japanese => current.push(c),
                Run::Romanized => {
                    if !current.is_empty() {
                        chunks.push(std::mem::take(&mut current));
                    }
                }
            }
        } else if is_japanese(c) || c.is_ascii_digit() {
            match run {
                Run::Japanese => current.push(c),
                Run::Romanized => {
                    run = Run::Japanese;
                    switch(&mut chunks, &mut current, c);
                }
            }
        } else if is_romanized(c) {
            match run {
                Run::Romanized => current.push(c),
                Run::Japanese => {
                    run = Run::Romanized;
                    switch(&mut chunks, &mut current, c);
                }
            }
        } else {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
        i += 1;
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
