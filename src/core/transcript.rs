use crate::error::{Error, Result};
use std::future::Future;
use yt_transcript_rs::api::YouTubeTranscriptApi;

const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";
const MAX_VIDEO_ID_LEN: usize = 128;

/// One timed caption unit. Only `text` ends up in the generated output.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptFragment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

impl TranscriptFragment {
    #[cfg(test)]
    pub fn untimed(text: &str) -> Self {
        Self {
            text: text.to_string(),
            start: 0.0,
            duration: 0.0,
        }
    }
}

/// Where caption fragments come from.
pub trait TranscriptSource {
    /// Fetch the ordered fragments of `video_id`, preferring captions in `lang`.
    fn fetch(
        &self,
        video_id: &str,
        lang: &str,
    ) -> impl Future<Output = Result<Vec<TranscriptFragment>>> + Send;
}

#[derive(Clone)]
pub struct TranscriptService {
    api: YouTubeTranscriptApi,
}

impl TranscriptService {
    pub fn new() -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| Error::custom(format!("Failed to set up transcript client: {e}")))?;
        Ok(Self { api })
    }
}

impl TranscriptSource for TranscriptService {
    async fn fetch(&self, video_id: &str, lang: &str) -> Result<Vec<TranscriptFragment>> {
        tracing::debug!(video_id, lang, "Fetching transcript");

        let transcript = self
            .api
            .fetch_transcript(video_id, &[lang], false)
            .await
            .map_err(|e| Error::transcript_unavailable(video_id, e))?;

        Ok(transcript
            .snippets
            .into_iter()
            .map(|snippet| TranscriptFragment {
                text: snippet.text,
                start: snippet.start,
                duration: snippet.duration,
            })
            .collect())
    }
}

/// Concatenate fragment texts in order, each followed by a newline.
pub fn join_fragments(fragments: &[TranscriptFragment]) -> String {
    fragments.iter().fold(String::new(), |mut acc, fragment| {
        acc.push_str(&fragment.text);
        acc.push('\n');
        acc
    })
}

pub fn watch_url(video_id: &str) -> String {
    format!("{WATCH_URL_PREFIX}{video_id}")
}

pub fn extract_video_id(url: &str) -> Option<String> {
    // Extract video ID from various YouTube URL formats
    let raw_id = if let Some(v_param) = url.split("v=").nth(1) {
        v_param.split('&').next().unwrap_or(v_param)
    } else if let Some(youtu_be) = url.split("youtu.be/").nth(1) {
        youtu_be.split('?').next().unwrap_or(youtu_be)
    } else {
        url
    };

    sanitize_video_id(raw_id).ok()
}

/// Ensure a video identifier is safe to put in a URL.
/// Only ASCII alphanumeric characters plus `_` and `-` are allowed.
pub fn sanitize_video_id(raw: &str) -> Result<String> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(Error::transcript_unavailable(raw, "video ID cannot be empty"));
    }

    if trimmed.len() > MAX_VIDEO_ID_LEN {
        return Err(Error::transcript_unavailable(
            raw,
            "video ID is unexpectedly long",
        ));
    }

    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
    {
        return Err(Error::transcript_unavailable(
            raw,
            "video ID contains unsupported characters; expected only letters, numbers, '-' or '_'",
        ));
    }

    Ok(trimmed.to_string())
}
