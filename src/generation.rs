//! Simulated text-generation service.
//!
//! Stands in for a hosted language model. No request leaves the process:
//! the output is chosen by substring dispatch on the request context,
//! after an optional artificial delay.

use std::{future::Future, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    config::{GenerationConfig, GenerationParameters},
    error::{Error, Result},
    synthesis::mentions_graduate,
    templates::{GENERATION_FAILED, GenerationTemplate},
};

pub const STOP_REASON: &str = "eos_token";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub input: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<GenerationParameters>,
}

impl GenerationRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            context: None,
            parameters: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_parameters(mut self, parameters: GenerationParameters) -> Self {
        self.parameters = Some(parameters);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub generated_text: String,
    pub input_token_count: usize,
    pub generated_token_count: usize,
    pub stop_reason: String,
}

/// Anything that turns a generation request into text.
pub trait TextGenerator: Send + Sync {
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<GenerationResponse>> + Send;
}

/// Word count as the service reports it: pieces between single spaces.
///
/// An empty string counts as one token.
pub fn count_tokens(text: &str) -> usize {
    text.split(' ').count()
}

/// Pick the output body for a request.
///
/// The context is checked verbatim, in order, for "admission
/// requirements", "deadlines", "fees" or "tuition", then "programs" or
/// "courses". Only the requirements branch looks at the input.
pub fn select_template(request: &GenerationRequest) -> GenerationTemplate {
    let context = request.context.as_deref().unwrap_or_default();

    if context.contains("admission requirements") {
        let input = request.input.to_lowercase();
        if mentions_graduate(&input, &["graduate", "master", "phd"]) {
            GenerationTemplate::GraduateRequirements
        } else {
            GenerationTemplate::UndergraduateRequirements
        }
    } else if context.contains("deadlines") {
        GenerationTemplate::Deadlines
    } else if context.contains("fees") || context.contains("tuition") {
        GenerationTemplate::Fees
    } else if context.contains("programs") || context.contains("courses") {
        GenerationTemplate::Programs
    } else {
        GenerationTemplate::General
    }
}

pub fn simulate_generation(request: &GenerationRequest) -> String {
    select_template(request).text().to_string()
}

/// In-process replacement for the hosted generation endpoint.
#[derive(Debug, Clone)]
pub struct GenerationService {
    config: GenerationConfig,
    delay: Duration,
}

impl GenerationService {
    pub fn new(config: GenerationConfig, delay: Duration) -> Self {
        tracing::info!(
            model = %config.model_id,
            delay_ms = delay.as_millis() as u64,
            "generation service ready"
        );
        Self { config, delay }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Default request parameters from the configuration.
    pub fn default_parameters(&self) -> GenerationParameters {
        self.config.parameters
    }
}

impl Default for GenerationService {
    fn default() -> Self {
        Self::new(GenerationConfig::default(), Duration::ZERO)
    }
}

impl TextGenerator for GenerationService {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let generated_text = simulate_generation(request);
        let response = GenerationResponse {
            input_token_count: count_tokens(&request.input),
            generated_token_count: count_tokens(&generated_text),
            generated_text,
            stop_reason: STOP_REASON.to_string(),
        };

        tracing::debug!(
            input_tokens = response.input_token_count,
            generated_tokens = response.generated_token_count,
            "generated text"
        );

        Ok(response)
    }
}

/// Generate text for `input`, returning only the generated string.
///
/// Any failure of the generator is logged and replaced by a single
/// [`Error::GenerationFailed`] with a fixed message.
pub async fn generate_text<G: TextGenerator>(
    generator: &G,
    input: &str,
    context: Option<&str>,
    parameters: GenerationParameters,
) -> Result<String> {
    let mut request = GenerationRequest::new(input).with_parameters(parameters);
    if let Some(context) = context {
        request = request.with_context(context);
    }

    match generator.generate(&request).await {
        Ok(response) => Ok(response.generated_text),
        Err(e) => {
            tracing::error!(error = %e, "generation service failed");
            Err(Error::GenerationFailed(GENERATION_FAILED.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl TextGenerator for Broken {
        async fn generate(
            &self,
            _request: &GenerationRequest,
        ) -> Result<GenerationResponse> {
            Err(Error::Config("endpoint unreachable".into()))
        }
    }

    fn with_context(input: &str, context: &str) -> GenerationRequest {
        GenerationRequest::new(input).with_context(context)
    }

    #[test]
    fn dispatch_order() {
        let cases = [
            (
                "admission requirements and deadlines",
                GenerationTemplate::UndergraduateRequirements,
            ),
            ("deadlines and fees", GenerationTemplate::Deadlines),
            ("tuition programs", GenerationTemplate::Fees),
            ("fees", GenerationTemplate::Fees),
            ("courses", GenerationTemplate::Programs),
            ("programs", GenerationTemplate::Programs),
            ("campus life", GenerationTemplate::General),
        ];
        for (context, expected) in cases {
            assert_eq!(
                select_template(&with_context("hello", context)),
                expected,
                "context {context:?}"
            );
        }
    }

    #[test]
    fn context_match_is_case_sensitive() {
        let request = with_context("hi", "Admission Requirements");
        assert_eq!(select_template(&request), GenerationTemplate::General);
    }

    #[test]
    fn missing_context_is_general() {
        let request = GenerationRequest::new("graduate deadlines");
        assert_eq!(select_template(&request), GenerationTemplate::General);
    }

    #[test]
    fn requirements_branch_reads_input() {
        let context = "admission requirements";
        assert_eq!(
            select_template(&with_context("PhD programs?", context)),
            GenerationTemplate::GraduateRequirements
        );
        assert_eq!(
            select_template(&with_context("a Master's degree", context)),
            GenerationTemplate::GraduateRequirements
        );
        assert_eq!(
            select_template(&with_context(
                "undergraduate requirements",
                context
            )),
            GenerationTemplate::UndergraduateRequirements
        );
    }

    #[test]
    fn token_counts_split_on_single_spaces() {
        assert_eq!(count_tokens("one two three"), 3);
        assert_eq!(count_tokens("one  two"), 3);
        assert_eq!(count_tokens(""), 1);
    }

    #[tokio::test]
    async fn service_reports_counts_and_stop_reason() {
        let service = GenerationService::default();
        let request = with_context("what are the fees", "fees");
        let response = service.generate(&request).await.unwrap();

        assert_eq!(response.generated_text, GenerationTemplate::Fees.text());
        assert_eq!(response.input_token_count, 4);
        assert_eq!(
            response.generated_token_count,
            GenerationTemplate::Fees.text().split(' ').count()
        );
        assert_eq!(response.stop_reason, "eos_token");
    }

    #[tokio::test]
    async fn generate_text_returns_body() {
        let service = GenerationService::default();
        let text = generate_text(
            &service,
            "when is it due",
            Some("deadlines"),
            service.default_parameters(),
        )
        .await
        .unwrap();
        assert_eq!(text, GenerationTemplate::Deadlines.text());
    }

    #[tokio::test]
    async fn generate_text_wraps_failures() {
        let err = generate_text(
            &Broken,
            "anything",
            None,
            GenerationParameters::default(),
        )
        .await
        .unwrap_err();
        match err {
            Error::GenerationFailed(msg) => assert_eq!(msg, GENERATION_FAILED),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn request_omits_absent_fields() {
        let json = serde_json::to_value(GenerationRequest::new("hi")).unwrap();
        assert_eq!(json, serde_json::json!({ "input": "hi" }));
    }
}
