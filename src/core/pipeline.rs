use crate::core::post::PostWriter;
use crate::core::transcript::{TranscriptSource, join_fragments, sanitize_video_id, watch_url};
use crate::error::Result;
use serde::Serialize;

pub const DEFAULT_LANG: &str = "en";

/// What one run of the pipeline produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    #[serde(rename = "videoId")]
    pub video_id: String,
    pub transcript: String,
    pub linkedin_post: String,
}

/// Fetch a transcript, then hand it to the post writer. Holds no mutable state,
/// so a single instance is shared by every request.
pub struct PostPipeline<T, W> {
    transcripts: T,
    writer: W,
}

impl<T, W> PostPipeline<T, W>
where
    T: TranscriptSource + Sync,
    W: PostWriter + Sync,
{
    pub fn new(transcripts: T, writer: W) -> Self {
        Self {
            transcripts,
            writer,
        }
    }

    pub async fn run(&self, video_id: &str, lang: &str) -> Result<GenerationResult> {
        let clean_id = sanitize_video_id(video_id)?;

        let fragments = self.transcripts.fetch(&clean_id, lang).await?;
        let transcript = join_fragments(&fragments);
        tracing::info!(
            video_id,
            lang,
            fragments = fragments.len(),
            "Transcript retrieved"
        );

        let video_url = watch_url(&clean_id);
        let linkedin_post = self.writer.write_post(&transcript, &video_url).await?;
        tracing::info!(video_id, chars = linkedin_post.len(), "Post generated");

        Ok(GenerationResult {
            video_id: video_id.to_string(),
            transcript,
            linkedin_post,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::mocks::{MockTranscripts, MockWriter};
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn run_joins_transcript_and_passes_watch_url() {
        let transcripts = MockTranscripts::default().with_video("abc123", &["Hello", "world"]);
        let writer = MockWriter::default();
        let writer_calls = writer.calls.clone();

        let pipeline = PostPipeline::new(transcripts, writer);
        let result = pipeline.run("abc123", DEFAULT_LANG).await.expect("pipeline runs");

        assert_eq!(result.video_id, "abc123");
        assert_eq!(result.transcript, "Hello\nworld\n");
        assert!(!result.linkedin_post.is_empty());

        let calls = writer_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "Hello\nworld\n");
        assert_eq!(calls[0].1, "https://www.youtube.com/watch?v=abc123");
    }

    #[tokio::test]
    async fn missing_transcript_skips_generation() {
        let writer = MockWriter::default();
        let writer_calls = writer.calls.clone();
        let pipeline = PostPipeline::new(MockTranscripts::default(), writer);

        let err = pipeline.run("nocaptions", "en").await.unwrap_err();

        assert!(matches!(err, Error::TranscriptUnavailable { .. }));
        assert!(writer_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn generation_failure_is_its_own_variant() {
        let transcripts = MockTranscripts::default().with_video("abc123", &["Hello"]);
        let pipeline = PostPipeline::new(transcripts, MockWriter::failing("quota exceeded"));

        let err = pipeline.run("abc123", "en").await.unwrap_err();

        assert!(matches!(err, Error::GenerationFailed { .. }));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[tokio::test]
    async fn malformed_id_never_reaches_the_network() {
        let transcripts = MockTranscripts::default();
        let transcript_calls = transcripts.calls.clone();
        let pipeline = PostPipeline::new(transcripts, MockWriter::default());

        let err = pipeline.run("../etc/passwd", "en").await.unwrap_err();

        assert!(matches!(err, Error::TranscriptUnavailable { .. }));
        assert!(transcript_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn forwards_requested_language() {
        let transcripts = MockTranscripts::default().with_video("abc123", &["Hola"]);
        let transcript_calls = transcripts.calls.clone();
        let pipeline = PostPipeline::new(transcripts, MockWriter::default());

        pipeline.run("abc123", "es").await.expect("pipeline runs");

        let calls = transcript_calls.lock().unwrap();
        assert_eq!(calls[0], ("abc123".to_string(), "es".to_string()));
    }
}
