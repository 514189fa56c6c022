//! Display form of a transcription in IPA-standard glyphs.

/// Annotation substituted for every `]` in the display form.
pub const FALL_MARK: &str = "<sup>¬</sup>";

fn ipa_glyph(c: char) -> char {
    match c {
        '?' => 'ʔ',
        'C' => 'ç',
        'Z' => 'ʐ',
        'S' => 'ş',
        other => other,
    }
}

/// Replace the transcription's ASCII stand-ins with IPA glyphs, then
/// expand `]` into [`FALL_MARK`].
pub fn to_original_phonemes(transcription: &str) -> String {
    let substituted: String = transcription.chars().map(ipa_glyph).collect();
    substituted.replace(']', FALL_MARK)
}
