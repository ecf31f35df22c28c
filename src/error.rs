use thiserror::Error;

/// Failures reported by the text-generation collaborator
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Missing API credential")]
    MissingCredential,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Why a free-text mood was not accepted
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("Please type a mood first.")]
    EmptyInput,

    #[error("That doesn't sound like a mood. Try describing how you feel.")]
    NotEmotional,

    #[error("Couldn't tell whether that was a mood. Please try rephrasing it.")]
    Unparseable,

    #[error("The mood checker is unavailable right now. Please try again.")]
    UpstreamFailure,
}

/// Why generated text could not be turned into a playlist
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionFailure {
    #[error("the generator returned an empty response")]
    EmptyResponse,

    #[error("no song lines could be parsed from the response")]
    NoParseableLines,

    #[error("the response contained a malformed song list")]
    MalformedStructuredPayload,
}

/// Outcome of a failed extraction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error(transparent)]
    Failed(#[from] ExtractionFailure),

    /// The generator answered with an explicit `error` record instead of songs
    #[error("the generator rejected the mood: {message}")]
    UpstreamRejected { message: String },
}

/// Everything that can stop a mood from turning into a playlist
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error("{0}")]
    Rejected(RejectionReason),

    #[error("No playlist available: {0}")]
    NoPlaylist(ExtractionFailure),

    #[error("No playlist available: {0}")]
    Upstream(GenerationError),
}

impl From<ExtractError> for RecommendError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::Failed(reason) => RecommendError::NoPlaylist(reason),
            ExtractError::UpstreamRejected { .. } => {
                RecommendError::Rejected(RejectionReason::NotEmotional)
            }
        }
    }
}

impl From<GenerationError> for RecommendError {
    fn from(err: GenerationError) -> Self {
        RecommendError::Upstream(err)
    }
}
