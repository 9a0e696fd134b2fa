//! Transport to the external screening service. The service is the single
//! point of intelligence: it parses, scores and partitions the batch. This
//! client only packages the files and decodes the verdict.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use super::batch::UploadedDoc;
use crate::models::screening::ScreeningOutcome;

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

/// Screens a resume batch against a job description. Carried in `AppState`
/// as `Arc<dyn ResumeScreener>` so the transport can be swapped without
/// touching handler code; tests use stubs.
#[async_trait]
pub trait ResumeScreener: Send + Sync {
    async fn screen(
        &self,
        job_description: &UploadedDoc,
        resumes: &[UploadedDoc],
    ) -> Result<ScreeningOutcome, ScreeningError>;
}

/// Default screener: one multipart POST to the configured endpoint. A failed
/// attempt is surfaced to the caller, never replayed automatically.
pub struct HttpScreener {
    client: Client,
    endpoint: String,
}

impl HttpScreener {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
        }
    }
}

#[async_trait]
impl ResumeScreener for HttpScreener {
    async fn screen(
        &self,
        job_description: &UploadedDoc,
        resumes: &[UploadedDoc],
    ) -> Result<ScreeningOutcome, ScreeningError> {
        let mut form = Form::new().part("jd", file_part(job_description)?);
        for resume in resumes {
            form = form.part("resumes", file_part(resume)?);
        }

        debug!(
            "submitting job description '{}' and {} resumes to {}",
            job_description.name,
            resumes.len(),
            self.endpoint
        );

        let response = self.client.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ScreeningError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let outcome: ScreeningOutcome = serde_json::from_str(&body)?;
        validate_outcome(&outcome)?;
        Ok(outcome)
    }
}

fn file_part(doc: &UploadedDoc) -> Result<Part, ScreeningError> {
    Ok(Part::bytes(doc.data.to_vec())
        .file_name(doc.name.clone())
        .mime_str(&doc.content_type)?)
}

/// The service is trusted for classification, not blindly for shape: a score
/// outside 0-100 means the payload cannot be treated as authoritative.
fn validate_outcome(outcome: &ScreeningOutcome) -> Result<(), ScreeningError> {
    for entry in outcome.relevant.iter().chain(outcome.irrelevant.iter()) {
        if entry.score > 100 {
            return Err(ScreeningError::InvalidPayload(format!(
                "score {} for '{}' is outside 0-100",
                entry.score, entry.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use httpmock::prelude::*;

    fn doc(name: &str, body: &'static str) -> UploadedDoc {
        UploadedDoc {
            name: name.to_string(),
            content_type: "application/pdf".to_string(),
            data: Bytes::from_static(body.as_bytes()),
        }
    }

    #[tokio::test]
    async fn success_body_is_decoded_in_order() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/screen");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(
                        r#"{
                            "relevant": [
                                {"name": "a.pdf", "score": 91, "reasoning": ["Strong overlap with the role"]},
                                {"name": "c.pdf", "score": 74, "reasoning": ["Adjacent experience"]}
                            ],
                            "irrelevant": [
                                {"name": "b.pdf", "score": 12, "reasoning": ["Different discipline"]}
                            ]
                        }"#,
                    );
            })
            .await;

        let screener = HttpScreener::new(server.url("/api/screen"));
        let outcome = screener
            .screen(
                &doc("jd.pdf", "role"),
                &[doc("a.pdf", "x"), doc("b.pdf", "y"), doc("c.pdf", "z")],
            )
            .await
            .unwrap();

        mock.assert_async().await;
        let relevant: Vec<&str> = outcome.relevant.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(relevant, ["a.pdf", "c.pdf"]);
        assert_eq!(outcome.relevant[0].score, 91);
        assert_eq!(
            outcome.relevant[0].reasoning,
            ["Strong overlap with the role"]
        );
        assert_eq!(outcome.irrelevant.len(), 1);
    }

    #[tokio::test]
    async fn non_success_status_is_an_api_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/screen");
                then.status(500).body("internal error");
            })
            .await;

        let screener = HttpScreener::new(server.url("/api/screen"));
        let err = screener
            .screen(&doc("jd.pdf", "role"), &[doc("a.pdf", "x")])
            .await
            .unwrap_err();

        assert!(matches!(err, ScreeningError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/screen");
                then.status(200).body("not json at all");
            })
            .await;

        let screener = HttpScreener::new(server.url("/api/screen"));
        let err = screener
            .screen(&doc("jd.pdf", "role"), &[doc("a.pdf", "x")])
            .await
            .unwrap_err();

        assert!(matches!(err, ScreeningError::Parse(_)));
    }

    #[tokio::test]
    async fn out_of_range_score_is_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/screen");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"relevant":[{"name":"a.pdf","score":250,"reasoning":[]}],"irrelevant":[]}"#);
            })
            .await;

        let screener = HttpScreener::new(server.url("/api/screen"));
        let err = screener
            .screen(&doc("jd.pdf", "role"), &[doc("a.pdf", "x")])
            .await
            .unwrap_err();

        assert!(matches!(err, ScreeningError::InvalidPayload(_)));
    }

    #[tokio::test]
    async fn transport_failure_is_an_http_error() {
        // Nothing is listening on this port.
        let screener = HttpScreener::new("http://127.0.0.1:1/api/screen".to_string());
        let err = screener
            .screen(&doc("jd.pdf", "role"), &[doc("a.pdf", "x")])
            .await
            .unwrap_err();

        assert!(matches!(err, ScreeningError::Http(_)));
    }
}
