use oki_engine::unicode::katakana_to_hiragana;
use oki_engine::{Engine, Register};
use unicode_width::UnicodeWidthStr;

pub fn convert_cmd(engine: &Engine, transcription: &str, hiragana: bool) {
    let spellings = die!(engine.convert(transcription), "Error: {}");
    for kana in spellings {
        if hiragana {
            println!("{}", katakana_to_hiragana(&kana));
        } else {
            println!("{kana}");
        }
    }
}

pub fn analyze_cmd(engine: &Engine, transcription: &str) {
    let phonetics = die!(engine.analyze(transcription), "Error: {}");
    let json = die!(serde_json::to_string_pretty(&phonetics), "Error: {}");
    println!("{json}");
}

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

/// Render rows as width-aligned columns.
fn format_table(rows: &[Vec<String>]) -> Vec<String> {
    let ncols = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..ncols)
        .map(|c| {
            rows.iter()
                .filter_map(|r| r.get(c))
                .map(|s| UnicodeWidthStr::width(s.as_str()))
                .max()
                .unwrap_or(0)
        })
        .collect();
    rows.iter()
        .map(|r| {
            let cells: Vec<String> = r
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| pad(cell, w))
                .collect();
            cells.join("  ").trim_end().to_string()
        })
        .collect()
}

pub fn moras_cmd(engine: &Engine, transcription: &str) {
    let readings = die!(engine.mora_readings(transcription), "Error: {}");
    let diverges = readings.iter().any(|(_, r)| r.has_variants());

    let mut header = vec![
        "mora".to_string(),
        "kana".to_string(),
        Register::Primary.name().to_string(),
    ];
    if diverges {
        header.push(Register::Secondary.name().to_string());
    }
    let mut rows = vec![header];
    for (mora, reading) in &readings {
        let mut row = vec![
            mora.to_string(),
            reading.primary_kana().join("/"),
            reading.primary_ipa().to_string(),
        ];
        if diverges {
            row.push(reading.secondary_ipa().to_string());
        }
        rows.push(row);
    }
    for line in format_table(&rows) {
        println!("{line}");
    }
}
