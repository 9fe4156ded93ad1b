use std::sync::Arc;

use rmcp::{
    ServerHandler,
    ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult,
        Content,
        Implementation,
        ServerCapabilities,
        ServerInfo,
    },
    tool,
    tool_handler,
    tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    config::{AssistantConfig, LatencyConfig},
    error,
    matcher,
    strategy::{Assistant, Reply, Strategy},
};

const DEFAULT_SEARCH_LIMIT: usize = 3;

#[derive(Clone)]
pub struct AdmitbotMcpServer {
    assistant: Arc<Assistant>,
    tool_router: ToolRouter<Self>,
}

impl AdmitbotMcpServer {
    fn new(assistant: Assistant) -> Self {
        Self {
            assistant: Arc::new(assistant),
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router(router = tool_router)]
impl AdmitbotMcpServer {
    /// Answer an admissions question.
    #[tool(
        name = "admissions_ask",
        description = "Answer a prospective student's admissions question. Strategy is one of faq, rag (default) or context."
    )]
    pub async fn admissions_ask(
        &self,
        params: Parameters<AskParams>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        let params = params.0;
        let strategy = params.strategy.unwrap_or_default();

        let (reply, is_error) =
            match self.assistant.reply(&params.query, strategy).await {
                Ok(reply) => (reply, false),
                Err(e) => {
                    tracing::error!(%strategy, error = %e, "answer failed");
                    (Reply::apology(strategy), true)
                }
            };

        let structured = serde_json::to_value(AskResponse {
            query: params.query,
            strategy: reply.strategy,
            answer: reply.answer.clone(),
            sources: reply.sources,
            confidence: reply.confidence,
        })
        .map_err(|e| mcp_error("failed to serialize answer", e))?;

        let mut result = CallToolResult::success(vec![Content::text(reply.answer)]);
        result.structured_content = Some(structured);
        result.is_error = Some(is_error);
        result.meta = None;
        Ok(result)
    }

    /// Rank knowledge entries against a query.
    #[tool(
        name = "admissions_search",
        description = "Rank admissions knowledge entries by keyword overlap with a query."
    )]
    pub async fn admissions_search(
        &self,
        params: Parameters<SearchParams>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        let params = params.0;
        let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);

        let items: Vec<SearchResultItem> = matcher::rank(
            &params.query,
            self.assistant.store().entries(),
            &self.assistant.config().matcher,
        )
        .into_iter()
        .take(limit)
        .map(|s| SearchResultItem {
            id: s.entry.id.clone(),
            title: s.entry.title.clone(),
            category: s.entry.category.to_string(),
            score: s.score,
        })
        .collect();

        let summary = format_search_summary(&items, &params.query);
        let structured = serde_json::to_value(SearchResponse {
            query: params.query,
            result_count: items.len(),
            results: items,
        })
        .map_err(|e| mcp_error("failed to serialize search results", e))?;

        let mut result = CallToolResult::success(vec![Content::text(summary)]);
        result.structured_content = Some(structured);
        result.is_error = Some(false);
        result.meta = None;
        Ok(result)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for AdmitbotMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_server_info(
                Implementation::new("admitbot", env!("CARGO_PKG_VERSION"))
                    .with_title("admitbot MCP"),
            )
            .with_instructions(
                "Use admissions_ask to answer admissions questions and admissions_search to see which knowledge entries match a query.",
            )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AskParams {
    /// The question to answer.
    pub query: String,
    /// Answer strategy: faq, rag or context (default: rag).
    pub strategy: Option<Strategy>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Search query string.
    pub query: String,
    /// Maximum number of results (default: 3).
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AskResponse {
    query: String,
    strategy: Strategy,
    answer: String,
    sources: Vec<String>,
    confidence: Option<f32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    query: String,
    result_count: usize,
    results: Vec<SearchResultItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultItem {
    id: String,
    title: String,
    category: String,
    score: usize,
}

fn format_search_summary(results: &[SearchResultItem], query: &str) -> String {
    if results.is_empty() {
        return format!("No entries match \"{query}\"");
    }

    let mut lines = Vec::with_capacity(results.len() + 1);
    let suffix = if results.len() == 1 { "y" } else { "ies" };
    lines.push(format!(
        "Found {} entr{} for \"{query}\":",
        results.len(),
        suffix
    ));

    for item in results {
        lines.push(format!(
            "#{} {} [{}] {}",
            item.id, item.score, item.category, item.title
        ));
    }

    lines.join("\n")
}

fn mcp_error(message: &str, error: impl std::fmt::Display) -> rmcp::ErrorData {
    rmcp::ErrorData::internal_error(
        message.to_string(),
        Some(json!({ "error": error.to_string() })),
    )
}

/// Serve the assistant over stdio until the client disconnects.
///
/// Simulated latency is always disabled here.
pub fn run_mcp(mut config: AssistantConfig) -> error::Result<()> {
    config.latency = LatencyConfig::none();
    let server = AdmitbotMcpServer::new(Assistant::new(config)?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            error::Error::Config(format!("failed to start tokio runtime: {e}"))
        })?;

    runtime.block_on(async move {
        let transport = rmcp::transport::stdio();
        let running = server.serve(transport).await.map_err(|e| {
            error::Error::Config(format!(
                "MCP server initialization failed: {e}"
            ))
        })?;
        running.waiting().await.map_err(|e| {
            error::Error::Config(format!("MCP server error: {e}"))
        })?;
        Ok(())
    })
}
