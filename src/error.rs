use async_openai::error::OpenAIError;
use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
    #[from]
    #[display("{_0}")]
    Custom(String),

    #[display("Could not retrieve a transcript for {video_id}: {reason}")]
    TranscriptUnavailable { video_id: String, reason: String },

    #[display("Post generation failed: {reason}")]
    GenerationFailed { reason: String },

    // -- Externals
    #[from]
    #[display("{_0}")]
    Io(std::io::Error),
}

impl Error {
    pub fn custom(val: impl std::fmt::Display) -> Self {
        Self::Custom(val.to_string())
    }

    pub fn transcript_unavailable(video_id: &str, reason: impl std::fmt::Display) -> Self {
        Self::TranscriptUnavailable {
            video_id: video_id.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn generation_failed(reason: impl std::fmt::Display) -> Self {
        Self::GenerationFailed {
            reason: reason.to_string(),
        }
    }
}

impl From<OpenAIError> for Error {
    fn from(err: OpenAIError) -> Self {
        Self::generation_failed(err)
    }
}

impl std::error::Error for Error {}
