use std::fs;

use clap::ValueEnum;
use oki_engine::tables::{
    default_kana_toml, default_phonetics_toml, parse_kana_toml, parse_phonetics_toml,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableKind {
    /// Mora → kana spellings
    Kana,
    /// Mora → per-register kana and IPA
    Phonetics,
}

pub fn tables_export(kind: TableKind) {
    match kind {
        TableKind::Kana => print!("{}", default_kana_toml()),
        TableKind::Phonetics => print!("{}", default_phonetics_toml()),
    }
}

pub fn tables_validate(kind: TableKind, file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    match kind {
        TableKind::Kana => {
            let map = die!(parse_kana_toml(&content), "Error: {}");
            println!("OK: {} mappings", map.len());
        }
        TableKind::Phonetics => {
            let entries = die!(parse_phonetics_toml(&content), "Error: {}");
            let divergent = entries.iter().filter(|e| e.ipa.len() > 1).count();
            println!(
                "OK: {} entries ({} with register variants)",
                entries.len(),
                divergent
            );
        }
    }
}

pub fn settings_export() {
    print!("{}", crate::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(crate::settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: index.script={:?}, o2y.headword={:?}, o2y.meanings={}",
        s.index.script,
        s.o2y.headword,
        s.o2y.meanings.len()
    );
}
