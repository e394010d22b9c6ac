use crate::error::{Error, Result};
use async_openai::{
    self,
    config::OpenAIConfig,
    types::responses::{
        CreateResponse, CreateResponseArgs, EasyInputMessageArgs, InputItem, InputParam,
        OutputItem, OutputMessageContent, Response, Role,
    },
};
use std::future::Future;

pub const POST_MODEL: &str = "gpt-4.1";
pub const POST_TEMPERATURE: f32 = 0.0;

const SYSTEM_PROMPT: &str = r#"You are an expert content strategist specializing in writing high-engagement LinkedIn posts.
Your task is to take a raw YouTube video transcript and transform it into a polished LinkedIn post that feels
authentic, thought-provoking, and shareable.

Guidelines:
- Start with a strong hook in the first 1-2 lines to capture attention.
- Summarize or reframe the key insights from the transcript in a clear and conversational tone.
- Keep sentences short and scannable for LinkedIn readers.
- Avoid jargon unless the video is highly technical; use plain, relatable language.
- Add a personal or reflective angle so it reads like the author's lived takeaway, not a transcript summary.
- Use a few well-placed emojis to add personality and highlight key ideas (avoid overuse).
- End with either:
  - A thought-provoking call to action (e.g., "What do you think?"), OR
  - A concise takeaway that inspires discussion.
- Include a link to the original video for context.
- Include 3-5 relevant hashtags at the end for visibility.
- Limit the post to 120-180 words.
- Avoid hashtags or emojis unless highly relevant.

Output Format:
Return only the LinkedIn post text, ready to be published."#;

/// Credentials and endpoint for the LLM provider.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    /// Overrides the provider's default base URL when set.
    pub api_base: Option<String>,
}

/// Turns a transcript into a social-media post.
///
/// The post text comes back exactly as the model wrote it, with no trimming or
/// length checks. The one exception: a completion with no text at all is a
/// `GenerationFailed` error rather than an empty post.
pub trait PostWriter {
    fn write_post(
        &self,
        transcript: &str,
        video_url: &str,
    ) -> impl Future<Output = Result<String>> + Send;
}

#[derive(Clone)]
pub struct PostService {
    client: async_openai::Client<OpenAIConfig>,
}

impl PostService {
    pub fn new(config: LlmConfig) -> Self {
        let mut openai = OpenAIConfig::new().with_api_key(config.api_key);
        if let Some(base) = config.api_base {
            openai = openai.with_api_base(base);
        }

        Self {
            client: async_openai::Client::with_config(openai),
        }
    }
}

impl PostWriter for PostService {
    async fn write_post(&self, transcript: &str, video_url: &str) -> Result<String> {
        let request = build_post_request(transcript, video_url)?;

        tracing::debug!(model = POST_MODEL, video_url, "Requesting post generation");
        let response = self.client.responses().create(request).await?;

        output_text(response)
    }
}

/// Concatenate every output text part of the response, untouched.
pub fn output_text(response: Response) -> Result<String> {
    let mut content = String::new();
    for output in response.output {
        if let OutputItem::Message(out) = output {
            for c in out.content {
                match c {
                    OutputMessageContent::OutputText(text) => content.push_str(&text.text),
                    _ => {
                        tracing::warn!(content = ?c, "Unexpected content type");
                        continue;
                    }
                }
            }
        }
    }

    if content.is_empty() {
        return Err(Error::generation_failed("model returned no text"));
    }

    Ok(content)
}

pub fn user_prompt(transcript: &str, video_url: &str) -> String {
    format!(
        "Here is the Video URL: {video_url} \n\nHere is the Transcript of the Youtube Video: {transcript}"
    )
}

/// The full completion request: fixed model, zero temperature, system + user message.
pub fn build_post_request(transcript: &str, video_url: &str) -> Result<CreateResponse> {
    let request = CreateResponseArgs::default()
        .model(POST_MODEL)
        .temperature(POST_TEMPERATURE)
        .input(InputParam::Items(vec![
            InputItem::EasyMessage(
                EasyInputMessageArgs::default()
                    .role(Role::System)
                    .content(SYSTEM_PROMPT)
                    .build()?,
            ),
            InputItem::EasyMessage(
                EasyInputMessageArgs::default()
                    .role(Role::User)
                    .content(user_prompt(transcript, video_url))
                    .build()?,
            ),
        ]))
        .build()?;

    Ok(request)
}
