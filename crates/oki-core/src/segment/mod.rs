//! Mora segmentation automaton.
//!
//! The cleaned transcription is consumed one mora at a time by a small
//! finite-state machine. Each step looks at the next character only and
//! either takes it into the current mora, skips the optional slot, or
//! fails when the mandatory vowel is missing.


use std::fmt;

use tracing::{debug, debug_span, warn};

use crate::error::ConvertError;
use crate::phoneme::{classify, strip_ignorable, CharClass};

/// One segmented mora, in the transcription alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mora(String);

impl Mora {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A vowel character occurring more than once marks a long vowel.
    pub fn has_long_vowel(&self) -> bool {
        ['a', 'i', 'u', 'e', 'o']
            .iter()
            .any(|&v| self.0.chars().filter(|&c| c == v).count() > 1)
    }

    /// The mora without its last character (the doubled vowel).
    pub fn shortened(&self) -> &str {
        match self.0.char_indices().next_back() {
            Some((idx, _)) => &self.0[..idx],
            None => "",
        }
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Mora {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Mora {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Mora {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Optional glottal stop.
    Start,
    /// Pseudo-consonant, or an optional consonant.
    Onset,
    /// Optional semivowel.
    Glide,
    /// Mandatory vowel.
    Nucleus,
    /// Optional repeat of the vowel just taken.
    Length(char),
    Done,
}

#[derive(Debug, PartialEq, Eq)]
enum Action {
    /// Append the next character and move on.
    Take(State),
    /// Discard what was collected, then append the next character.
    TakeAlone(State),
    /// Leave the next character for a later state.
    Skip(State),
    /// The mandatory vowel is missing.
    Fail,
}

fn transition(state: State, next: Option<char>) -> Action {
    let class = next.and_then(classify);
    match state {
        State::Start => match class {
            Some(CharClass::GlottalStop) => Action::Take(State::Onset),
            _ => Action::Skip(State::Onset),
        },
        State::Onset => match class {
            Some(c) if c.is_pseudo_consonant() => Action::TakeAlone(State::Done),
            Some(CharClass::Consonant) => Action::Take(State::Glide),
            _ => Action::Skip(State::Glide),
        },
        State::Glide => match class {
            Some(CharClass::SemiVowel) => Action::Take(State::Nucleus),
            _ => Action::Skip(State::Nucleus),
        },
        State::Nucleus => match (class, next) {
            (Some(CharClass::Vowel), Some(v)) => Action::Take(State::Length(v)),
            _ => Action::Fail,
        },
        State::Length(v) => {
            if next == Some(v) {
                Action::Take(State::Done)
            } else {
                Action::Skip(State::Done)
            }
        }
        State::Done => Action::Skip(State::Done),
    }
}

struct Cursor<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(chars: &'a [char]) -> Self {
        Self { chars, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn remainder(&self) -> String {
        self.chars[self.pos..].iter().collect()
    }
}

/// Consume one mora from the front of `cursor`.
fn next_mora(cursor: &mut Cursor<'_>) -> Result<Mora, ConvertError> {
    let mut mora = String::new();
    let mut state = State::Start;
    while state != State::Done {
        let next = cursor.peek();
        state = match (transition(state, next), next) {
            (Action::Take(to), Some(c)) => {
                mora.push(c);
                cursor.pos += 1;
                to
            }
            (Action::TakeAlone(to), Some(c)) => {
                if !mora.is_empty() {
                    warn!(dropped = %mora, "glottal stop before a pseudo-consonant is dropped");
                    mora.clear();
                }
                mora.push(c);
                cursor.pos += 1;
                to
            }
            (Action::Take(to) | Action::TakeAlone(to) | Action::Skip(to), _) => to,
            (Action::Fail, _) => {
                return Err(ConvertError::MalformedTranscription {
                    partial: mora,
                    remainder: cursor.remainder(),
                })
            }
        };
    }
    Ok(Mora(mora))
}

/// Split a transcription into moras.
///
/// Ignorable characters are removed first, wherever they occur. Fails on
/// the first mora that lacks its vowel; nothing past that point is
/// segmented.
pub fn split_moras(transcription: &str) -> Result<Vec<Mora>, ConvertError> {
    let _span = debug_span!("split_moras", transcription).entered();
    let chars: Vec<char> = strip_ignorable(transcription).chars().collect();
    let mut cursor = Cursor::new(&chars);
    let mut moras = Vec::new();
    while !cursor.is_empty() {
        moras.push(next_mora(&mut cursor)?);
    }
    debug!(mora_count = moras.len());
    Ok(moras)
}
