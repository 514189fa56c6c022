use oki_engine::unicode::katakana_to_hiragana;
use oki_engine::{Engine, WordPhonetics};
use serde::Serialize;

use super::{DictSource, DictSourceError, Row};
use crate::settings::{KanaScript, OkiToYamatoColumns};

/// Okinawan → Japanese dictionary. Headwords are transcriptions, so every
/// row goes through the engine.
pub struct OkiToYamato {
    engine: Engine,
    columns: OkiToYamatoColumns,
    script: KanaScript,
}

#[derive(Debug, Serialize)]
pub struct OkiToYamatoRecord {
    #[serde(rename = "page-in-dict")]
    pub page_in_dict: String,
    pub pronunciation: String,
    pub index: Vec<String>,
    pub phonetics: WordPhonetics,
    pub accent: String,
    pub pos: String,
    #[serde(rename = "bungo-type")]
    pub bungo_type: String,
    pub amendment: String,
    pub meaning: Vec<String>,
    pub remarks: String,
}

impl OkiToYamato {
    pub fn new(engine: Engine, columns: OkiToYamatoColumns, script: KanaScript) -> Self {
        Self {
            engine,
            columns,
            script,
        }
    }

    fn index(&self, headword: &str) -> Result<Vec<String>, DictSourceError> {
        let kana = self.engine.convert(headword).map_err(|source| DictSourceError::Convert {
            headword: headword.to_string(),
            source,
        })?;
        Ok(match self.script {
            KanaScript::Katakana => kana,
            KanaScript::Hiragana => kana.iter().map(|k| katakana_to_hiragana(k)).collect(),
        })
    }
}

impl DictSource for OkiToYamato {
    type Record = OkiToYamatoRecord;

    fn convert_row(&self, row: &Row<'_>) -> Result<OkiToYamatoRecord, DictSourceError> {
        let c = &self.columns;
        let page_in_dict = row.get(&c.page)?.to_string();
        let headword = row.get(&c.headword)?;
        let meaning = c
            .meanings
            .iter()
            .map(|col| row.get(col).map(str::to_string))
            .collect::<Result<Vec<_>, _>>()?;

        let index = self.index(headword)?;
        let phonetics = self
            .engine
            .analyze(headword)
            .map_err(|source| DictSourceError::Convert {
                headword: headword.to_string(),
                source,
            })?;

        Ok(OkiToYamatoRecord {
            page_in_dict,
            pronunciation: headword.to_string(),
            index,
            phonetics,
            accent: row.get(&c.accent)?.to_string(),
            pos: row.get(&c.pos)?.to_string(),
            bungo_type: row.get(&c.bungo_type)?.to_string(),
            amendment: row.get(&c.amendment)?.to_string(),
            meaning,
            remarks: row.get(&c.remarks)?.to_string(),
        })
    }
}
