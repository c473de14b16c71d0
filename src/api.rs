//! HTTP transport: one POST route over the shared processing function.

use axum::routing::post;
use axum::{Json, Router};

use crate::pipeline::{self, NlpResponse};

/// Request body for POST /. `nlp_pipeline` is optional; unknown names fall
/// back to the default pipeline rather than erroring.
#[derive(Debug, serde::Deserialize)]
pub struct SentenceRequest {
    pub sentence: String,
    pub known_words: Vec<String>,
    #[serde(default)]
    pub nlp_pipeline: Option<String>,
}

/// POST / -> 200 with `{ processed_words, bag }`.
pub async fn apply_nlp(Json(payload): Json<SentenceRequest>) -> Json<NlpResponse> {
    Json(pipeline::apply(
        &payload.sentence,
        &payload.known_words,
        payload.nlp_pipeline.as_deref(),
    ))
}

/// Build the application router. Malformed bodies get axum's default
/// rejection responses; there is no custom schema error surface.
pub fn router() -> Router {
    Router::new().route("/", post(apply_nlp))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn handler_returns_processed_words_and_bag() {
        let request = SentenceRequest {
            sentence: "The cats are running.".to_string(),
            known_words: words(&["cat", "run", "dog"]),
            nlp_pipeline: Some("nltk_POS_lemmatizer".to_string()),
        };
        let Json(response) = apply_nlp(Json(request)).await;
        assert!(response.processed_words.contains(&"cat".to_string()));
        assert!(response.processed_words.contains(&"run".to_string()));
        assert_eq!(response.bag, vec![1, 1, 0]);
    }

    #[tokio::test]
    async fn omitted_and_unknown_pipeline_agree() {
        let omitted = SentenceRequest {
            sentence: "The cats are running.".to_string(),
            known_words: words(&["cat"]),
            nlp_pipeline: None,
        };
        let unknown = SentenceRequest {
            sentence: "The cats are running.".to_string(),
            known_words: words(&["cat"]),
            nlp_pipeline: Some("definitely_not_registered".to_string()),
        };
        let Json(a) = apply_nlp(Json(omitted)).await;
        let Json(b) = apply_nlp(Json(unknown)).await;
        assert_eq!(a, b);
    }

    #[test]
    fn optional_pipeline_deserializes_when_absent() {
        let request: SentenceRequest =
            serde_json::from_str(r#"{"sentence": "hi", "known_words": []}"#).unwrap();
        assert!(request.nlp_pipeline.is_none());
    }

    #[test]
    fn router_builds() {
        let _router = router();
    }
}
