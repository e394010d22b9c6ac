use crate::core::{DEFAULT_LANG, GenerationResult, PostPipeline, PostWriter, TranscriptSource};
use crate::error::Error;
use crate::server::error::HttpError;
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use std::sync::Arc;

/// Query pairs in arrival order, so a repeated `lang` resolves to its last value.
type QueryPairs = Vec<(String, String)>;

fn requested_lang(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .rev()
        .find(|(key, value)| key == "lang" && !value.is_empty())
        .map(|(_, value)| value.clone())
        .unwrap_or_else(|| DEFAULT_LANG.to_string())
}

pub async fn get_transcript<T, W>(
    State(pipeline): State<Arc<PostPipeline<T, W>>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<GenerationResult>, HttpError>
where
    T: TranscriptSource + Send + Sync + 'static,
    W: PostWriter + Send + Sync + 'static,
{
    let Path(video_id) = path.map_err(|rejection| Error::custom(rejection.body_text()))?;
    let Query(pairs) = query.map_err(|rejection| Error::custom(rejection.body_text()))?;
    let lang = requested_lang(&pairs);

    tracing::info!(video_id, %lang, "Post requested");
    let result = pipeline.run(&video_id, &lang).await?;
    Ok(Json(result))
}
