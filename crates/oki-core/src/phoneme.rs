//! Character classes of the transcription alphabet.
//!
//! ```text
//! mora ::= [g] ( P | [C] [v] V [V] )
//! ```
//! g: glottal stop, P: pseudo-consonant, C: consonant, v: semivowel, V: vowel.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Vowel,
    Consonant,
    SemiVowel,
    /// Q (っ)
    Sokuon,
    /// N (ん)
    Hatsuon,
    GlottalStop,
    /// Formatting punctuation with no phonetic content.
    Ignorable,
}

impl CharClass {
    /// Sokuon or hatsuon: a complete mora that never takes a vowel.
    pub fn is_pseudo_consonant(self) -> bool {
        matches!(self, CharClass::Sokuon | CharClass::Hatsuon)
    }
}

/// Classify one character. Returns `None` for characters outside the alphabet.
pub fn classify(c: char) -> Option<CharClass> {
    let class = match c {
        'a' | 'i' | 'u' | 'e' | 'o' => CharClass::Vowel,
        'C' | 'S' | 'Z' | 'b' | 'c' | 'd' | 'g' | 'h' | 'k' | 'l' | 'm' | 'n' | 'p' | 'q'
        | 'r' | 's' | 't' | 'z' => CharClass::Consonant,
        'j' | 'w' => CharClass::SemiVowel,
        'Q' => CharClass::Sokuon,
        'N' => CharClass::Hatsuon,
        '\'' | '?' => CharClass::GlottalStop,
        ' ' | '(' | ')' | ',' | '-' | '=' | ']' => CharClass::Ignorable,
        _ => return None,
    };
    Some(class)
}

pub fn is_vowel(c: char) -> bool {
    classify(c) == Some(CharClass::Vowel)
}

pub fn is_ignorable(c: char) -> bool {
    classify(c) == Some(CharClass::Ignorable)
}

/// Drop every ignorable character, wherever it appears.
pub fn strip_ignorable(transcription: &str) -> String {
    transcription.chars().filter(|&c| !is_ignorable(c)).collect()
}
