/// Failure of a single conversion call.
///
/// Both variants carry the offending substring so callers can report it.
/// Neither one touches the shared tables, so the engine stays usable for
/// the next call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("malformed transcription: expected a vowel {{aiueo}} after \"{partial}\" (remaining: \"{remainder}\")")]
    MalformedTranscription { partial: String, remainder: String },

    #[error("unknown mora: \"{mora}\"")]
    UnknownMora { mora: String },
}
