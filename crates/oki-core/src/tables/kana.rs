use std::collections::BTreeMap;

use crate::phoneme::is_vowel;

use super::LONG_VOWEL_KANA;

/// Mora → alternate standard spellings. Alternates are kept in table order
/// and never deduplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct KanaTable {
    map: BTreeMap<String, Vec<String>>,
}

impl KanaTable {
    /// Derive long-vowel entries and freeze.
    pub fn build(mut mappings: BTreeMap<String, Vec<String>>) -> Self {
        derive_long_vowels(&mut mappings);
        Self { map: mappings }
    }

    pub fn get(&self, mora: &str) -> Option<&[String]> {
        self.map.get(mora).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// True when `mora` already ends in a doubled vowel, e.g. `kaa`.
fn ends_in_long_vowel(mora: &str) -> bool {
    let mut tail = mora.chars().rev();
    match (tail.next(), tail.next()) {
        (Some(a), Some(b)) => a == b && is_vowel(a),
        _ => false,
    }
}

/// For every mora ending in a vowel, add the same mora with that vowel
/// doubled, spelled with ー appended to each original spelling.
///
/// Derived entries replace any existing entry under the same key. Keys that
/// already end in a doubled vowel are not extended again, so applying this
/// twice gives the same table as applying it once.
pub fn derive_long_vowels(mappings: &mut BTreeMap<String, Vec<String>>) {
    let derived: Vec<(String, Vec<String>)> = mappings
        .iter()
        .filter(|(mora, _)| !ends_in_long_vowel(mora))
        .filter_map(|(mora, spellings)| {
            let last = mora.chars().last().filter(|&c| is_vowel(c))?;
            let mut long = mora.clone();
            long.push(last);
            let spellings = spellings
                .iter()
                .map(|s| format!("{s}{LONG_VOWEL_KANA}"))
                .collect();
            Some((long, spellings))
        })
        .collect();
    mappings.extend(derived);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> BTreeMap<String, Vec<String>> {
        BTreeMap::from([
            ("ka".to_string(), vec!["カ".to_string()]),
            ("tu".to_string(), vec!["トゥ".to_string(), "ツ".to_string()]),
            ("N".to_string(), vec!["ン".to_string()]),
        ])
    }

    #[test]
    fn test_long_vowel_derivation() {
        let table = KanaTable::build(base());
        assert_eq!(table.get("kaa").unwrap(), ["カー"]);
        assert_eq!(table.get("tuu").unwrap(), ["トゥー", "ツー"]);
        assert_eq!(table.get("ka").unwrap(), ["カ"]);
        assert!(table.get("NN").is_none());
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let mut once = base();
        derive_long_vowels(&mut once);
        let mut twice = once.clone();
        derive_long_vowels(&mut twice);
        assert_eq!(once, twice);
        assert!(!twice.contains_key("kaaa"));
    }

    #[test]
    fn test_derived_entry_overrides_existing() {
        let mut map = base();
        map.insert("kaa".to_string(), vec!["カア".to_string()]);
        derive_long_vowels(&mut map);
        assert_eq!(map["kaa"], vec!["カー"]);
    }

    #[test]
    fn test_ends_in_long_vowel() {
        assert!(ends_in_long_vowel("kaa"));
        assert!(ends_in_long_vowel("?ii"));
        assert!(!ends_in_long_vowel("ka"));
        assert!(!ends_in_long_vowel("a"));
        assert!(!ends_in_long_vowel("NN"));
        assert!(!ends_in_long_vowel(""));
    }
}
