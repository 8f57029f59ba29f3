//! Route handlers.

use super::{ApiError, AppState};
use crate::transcript::extract_video_id;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Deserialize)]
pub(super) struct TranscribeRequest {
    /// YouTube watch URL
    #[serde(default)]
    url: Option<String>,
}

#[derive(Serialize)]
pub(super) struct TranscriptResponse {
    result: String,
}

pub(super) async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub(super) async fn transcribe(
    State(state): State<Arc<AppState>>,
    body: Result<Json<TranscribeRequest>, JsonRejection>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    let url = body
        .ok()
        .and_then(|Json(req)| req.url)
        .filter(|u| !u.trim().is_empty())
        .ok_or(ApiError::MissingUrl)?;

    let video_id = extract_video_id(&url).ok_or(ApiError::InvalidUrl)?;
    info!("Transcribe request for {}", video_id);

    let result = state
        .pipeline
        .process(&video_id)
        .await
        .map_err(ApiError::Internal)?;

    Ok(Json(TranscriptResponse { result }))
}

pub(super) async fn get_transcript(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    info!("Transcript request for {}", video_id);

    let result = state
        .pipeline
        .process(&video_id)
        .await
        .map_err(ApiError::Transcript)?;

    Ok(Json(TranscriptResponse { result }))
}

#[cfg(test)]
mod tests {
    use super::super::{router, AppState, API_KEY_HEADER};
    use crate::chunking::TokenChunker;
    use crate::completion::{Completer, Dispatcher, MISSING_API_KEY_MESSAGE};
    use crate::error::{Result, TubescribeError};
    use crate::pipeline::Pipeline;
    use crate::tokenizer::Tokenizer;
    use crate::transcript::{TranscriptEntry, TranscriptFetcher};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    const SECRET: &str = "s3cret";

    struct WordTokenizer;

    impl Tokenizer for WordTokenizer {
        fn count_tokens(&self, text: &str) -> usize {
            text.split_whitespace().count()
        }
        fn name(&self) -> &str {
            "words"
        }
    }

    #[derive(Clone, Copy)]
    enum Captions {
        Present,
        Missing,
        Blank,
    }

    /// Serves a canned transcript, an error or an empty track. Counts calls.
    struct FakeFetcher {
        captions: Captions,
        calls: AtomicUsize,
        last_id: std::sync::Mutex<Option<String>>,
    }

    #[async_trait]
    impl TranscriptFetcher for FakeFetcher {
        async fn fetch(&self, video_id: &str) -> Result<Vec<TranscriptEntry>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_id.lock().unwrap() = Some(video_id.to_string());
            match self.captions {
                Captions::Missing => {
                    return Err(TubescribeError::Transcript(format!("video {} unavailable", video_id)))
                }
                Captions::Blank => return Ok(Vec::new()),
                Captions::Present => {}
            }
            Ok(vec![
                TranscriptEntry {
                    text: "hello world".to_string(),
                    start: 0.0,
                    duration: 1.5,
                },
                TranscriptEntry {
                    text: "how are you".to_string(),
                    start: 1.5,
                    duration: 1.5,
                },
            ])
        }
    }

    struct Capitalize;

    #[async_trait]
    impl Completer for Capitalize {
        async fn complete(&self, _system: &str, user: &str) -> Result<String> {
            let mut chars = user.chars();
            Ok(match chars.next() {
                Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
                None => String::new(),
            })
        }
        fn model(&self) -> &str {
            "capitalize"
        }
    }

    struct Harness {
        app: Router,
        fetcher: Arc<FakeFetcher>,
    }

    fn harness(captions: Captions, completer: Option<Arc<dyn Completer>>, auth_token: Option<&str>) -> Harness {
        let fetcher = Arc::new(FakeFetcher {
            captions,
            calls: AtomicUsize::new(0),
            last_id: std::sync::Mutex::new(None),
        });
        let pipeline = Pipeline::new(
            fetcher.clone(),
            TokenChunker::new(Arc::new(WordTokenizer), 3),
            Dispatcher::new(completer, "fix"),
        );
        let state = Arc::new(AppState::new(pipeline, auth_token.map(String::from)));
        Harness {
            app: router(state),
            fetcher,
        }
    }

    fn default_harness() -> Harness {
        harness(Captions::Present, Some(Arc::new(Capitalize)), Some(SECRET))
    }

    fn post_transcribe(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/transcribe")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {}", SECRET))
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_transcribe_invalid_url() {
        let h = default_harness();
        let (status, json) = send(h.app, post_transcribe(r#"{"url": "not-a-url"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({ "error": "Invalid YouTube URL" }));
        assert_eq!(h.fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_transcribe_missing_url() {
        for body in [r#"{}"#, r#"{"url": null}"#, r#"{"url": ""}"#, "not json"] {
            let h = default_harness();
            let (status, json) = send(h.app, post_transcribe(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
            assert_eq!(json, serde_json::json!({ "error": "No YouTube URL provided" }));
        }
    }

    #[tokio::test]
    async fn test_transcribe_success() {
        let h = default_harness();
        let (status, json) = send(
            h.app,
            post_transcribe(r#"{"url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"], "Hello world how. Are you.");
        assert_eq!(h.fetcher.last_id.lock().unwrap().as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[tokio::test]
    async fn test_transcribe_fetch_failure() {
        let h = harness(Captions::Missing, Some(Arc::new(Capitalize)), Some(SECRET));
        let (status, json) = send(
            h.app,
            post_transcribe(r#"{"url": "https://youtu.be/dQw4w9WgXcQ"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({ "error": "Internal server error" }));
    }

    #[tokio::test]
    async fn test_transcribe_rejects_bad_credentials_before_work() {
        let h = default_harness();
        let req = Request::builder()
            .method("POST")
            .uri("/transcribe")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, "Bearer wrong")
            .body(Body::from(r#"{"url": "https://youtu.be/dQw4w9WgXcQ"}"#))
            .unwrap();

        let (status, json) = send(h.app, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json, serde_json::json!({ "error": "Unauthorized" }));
        assert_eq!(h.fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_transcribe_accepts_api_key_header() {
        let h = default_harness();
        let req = Request::builder()
            .method("POST")
            .uri("/transcribe")
            .header(header::CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, SECRET)
            .body(Body::from(r#"{"url": "https://youtu.be/dQw4w9WgXcQ"}"#))
            .unwrap();

        let (status, _) = send(h.app, req).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_transcribe_locked_without_configured_secret() {
        let h = harness(Captions::Present, Some(Arc::new(Capitalize)), None);
        let (status, _) = send(
            h.app,
            post_transcribe(r#"{"url": "https://youtu.be/dQw4w9WgXcQ"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(h.fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_get_transcript_success() {
        let h = default_harness();
        let req = Request::builder()
            .uri("/transcript/dQw4w9WgXcQ")
            .body(Body::empty())
            .unwrap();

        let (status, json) = send(h.app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"], "Hello world how. Are you.");
    }

    #[tokio::test]
    async fn test_get_transcript_fetch_failure() {
        let h = harness(Captions::Missing, Some(Arc::new(Capitalize)), Some(SECRET));
        let req = Request::builder()
            .uri("/transcript/dQw4w9WgXcQ")
            .body(Body::empty())
            .unwrap();

        let (status, json) = send(h.app, req).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json,
            serde_json::json!({ "error": "Failed to fetch or process transcript." })
        );
    }

    #[tokio::test]
    async fn test_get_transcript_empty_captions() {
        let h = harness(Captions::Blank, Some(Arc::new(Capitalize)), Some(SECRET));
        let req = Request::builder()
            .uri("/transcript/dQw4w9WgXcQ")
            .body(Body::empty())
            .unwrap();

        let (status, json) = send(h.app, req).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json,
            serde_json::json!({ "error": "Failed to fetch or process transcript." })
        );
        assert_eq!(h.fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_get_transcript_without_api_key() {
        let h = harness(Captions::Present, None, Some(SECRET));
        let req = Request::builder()
            .uri("/transcript/dQw4w9WgXcQ")
            .body(Body::empty())
            .unwrap();

        let (status, json) = send(h.app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"], MISSING_API_KEY_MESSAGE);
    }

    #[tokio::test]
    async fn test_health() {
        let h = default_harness();
        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, json) = send(h.app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
    }
}
