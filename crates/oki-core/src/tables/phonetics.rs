use std::collections::HashMap;

use super::config::PhoneticEntry;

/// Per-variant readings of one mora. Variant 0 is the primary register;
/// the last variant is the secondary one.
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneticRecord {
    pub kana: Vec<Vec<String>>,
    pub ipa: Vec<String>,
}

impl PhoneticRecord {
    /// Number of IPA variants; more than one means the registers diverge.
    pub fn variant_count(&self) -> usize {
        self.ipa.len()
    }
}

/// Roman key → phonetic record. Records listing several equivalent keys
/// are stored once and shared by all of them.
#[derive(Debug, Clone, Default)]
pub struct PhoneticsTable {
    records: Vec<PhoneticRecord>,
    by_roman: HashMap<String, usize>,
}

impl PhoneticsTable {
    pub fn build(entries: Vec<PhoneticEntry>) -> Self {
        let mut table = Self::default();
        for entry in entries {
            let id = table.records.len();
            for roman in entry.roman {
                table.by_roman.insert(roman, id);
            }
            table.records.push(PhoneticRecord {
                kana: entry.kana,
                ipa: entry.ipa,
            });
        }
        table
    }

    pub fn get(&self, roman: &str) -> Option<&PhoneticRecord> {
        self.by_roman.get(roman).map(|&id| &self.records[id])
    }

    /// Number of roman keys.
    pub fn len(&self) -> usize {
        self.by_roman.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_roman.is_empty()
    }

    /// Number of distinct records.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}
