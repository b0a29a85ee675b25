//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes resume scoring over stdio so editors and assistants can grade a
//! resume document without shelling out to the CLI. Every tool delegates to
//! `resume_score_core`; nothing here scores on its own.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use resume_score_core::{InputFormat, Lexicon, LexiconKind, ResumeScorer, parse_resume};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `score_resume` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScoreResumeParams {
    /// The resume document as JSON or YAML text.
    pub resume: String,
    /// Encoding of `resume`: "json" (default) or "yaml".
    #[serde(default)]
    pub format: Option<String>,
}

/// Parameters for the `list_lexicon` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ListLexiconParams {
    /// List to print: "action-verbs", "weak-verbs", "cliches" or "soft-skills".
    pub kind: String,
}

/// MCP server exposing the resume scorer.
#[derive(Clone)]
pub struct ProjectServer {
    scorer: ResumeScorer,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server with the built-in lexicon and no input limit.
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::builtin().clone(), None)
    }

    /// Create a server that scores with `lexicon` and rejects resumes larger
    /// than `max_input_bytes`.
    pub fn with_lexicon(lexicon: Lexicon, max_input_bytes: Option<usize>) -> Self {
        Self {
            scorer: ResumeScorer::new(lexicon),
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score a resume document.
    #[tool(
        description = "Score a resume (JSON or YAML). Returns the overall score, per-metric breakdown, and top recommendations."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn score_resume(
        &self,
        Parameters(params): Parameters<ScoreResumeParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "score_resume",
            format = ?params.format,
            len = params.resume.len(),
            "executing MCP tool"
        );

        if let Some(max) = self.max_input_bytes
            && params.resume.len() > max
        {
            return Err(McpError::invalid_params(
                format!(
                    "input too large: {} bytes (limit: {max} bytes)",
                    params.resume.len()
                ),
                None,
            ));
        }

        let format = match params.format.as_deref() {
            None => InputFormat::Json,
            Some(name) => parse_format(name)?,
        };
        let resume = parse_resume(&params.resume, format)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        let score = self.scorer.score(&resume);

        let json = serde_json::to_string_pretty(&score)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "score_resume",
            overall = score.overall,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// List the terms of one lexicon list.
    #[tool(description = "List the terms the scorer uses for one word list.")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn list_lexicon(
        &self,
        Parameters(params): Parameters<ListLexiconParams>,
    ) -> Result<CallToolResult, McpError> {
        let kind = LexiconKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == params.kind)
            .ok_or_else(|| {
                McpError::invalid_params(format!("unknown lexicon list: {}", params.kind), None)
            })?;

        let terms = self.scorer.lexicon().terms(kind);
        let count = terms.len();
        let json = serde_json::to_string_pretty(&serde_json::json!({
            "kind": kind.as_str(),
            "terms": terms,
        }))
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "list_lexicon", count, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

fn parse_format(name: &str) -> Result<InputFormat, McpError> {
    match name.to_ascii_lowercase().as_str() {
        "json" => Ok(InputFormat::Json),
        "yaml" | "yml" => Ok(InputFormat::Yaml),
        other => Err(McpError::invalid_params(
            format!("unknown format: {other} (expected json or yaml)"),
            None,
        )),
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Call score_resume with a JSON or YAML resume to get a 0-100 score and recommendations.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    const RESUME: &str = r#"{
        "personalInfo": {"firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com"},
        "workExperience": [{"description": ["Increased revenue by 20% in a year"]}],
        "skills": [{"name": "Rust", "category": "Languages"}]
    }"#;

    #[test]
    fn server_info_has_correct_name() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn server_has_tools_capability() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn server_has_instructions() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        let instructions = info.instructions.expect("server should have instructions");
        assert!(instructions.contains("score_resume"));
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = ProjectServer::new();
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value =
            serde_json::from_str(text).expect("output should be valid JSON");

        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn score_resume_tool_returns_score() {
        let server = ProjectServer::new();
        let params = Parameters(ScoreResumeParams {
            resume: RESUME.to_string(),
            format: None,
        });

        let result = server
            .score_resume(params)
            .expect("score_resume should succeed");
        assert!(!result.is_error.unwrap_or(false));

        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");
        let overall = json["overall"].as_u64().unwrap();
        assert!(overall <= 100);
        assert!(json["breakdown"]["atsCompatibility"]["score"].is_u64());
        assert!(json["recommendations"].as_array().unwrap().len() <= 5);
    }

    #[test]
    fn score_resume_accepts_yaml() {
        let server = ProjectServer::new();
        let params = Parameters(ScoreResumeParams {
            resume: "skills:\n  - name: Rust\n    category: Languages\n".to_string(),
            format: Some("yaml".to_string()),
        });
        assert!(server.score_resume(params).is_ok());
    }

    #[test]
    fn score_resume_rejects_unknown_format() {
        let server = ProjectServer::new();
        let params = Parameters(ScoreResumeParams {
            resume: RESUME.to_string(),
            format: Some("toml".to_string()),
        });
        let err = server.score_resume(params).unwrap_err();
        assert!(err.message.contains("unknown format"));
    }

    #[test]
    fn score_resume_rejects_malformed_input() {
        let server = ProjectServer::new();
        let params = Parameters(ScoreResumeParams {
            resume: "{ nope".to_string(),
            format: None,
        });
        assert!(server.score_resume(params).is_err());
    }

    #[test]
    fn score_resume_enforces_input_limit() {
        let server = ProjectServer::with_lexicon(Lexicon::builtin().clone(), Some(16));
        let params = Parameters(ScoreResumeParams {
            resume: RESUME.to_string(),
            format: None,
        });
        let err = server.score_resume(params).unwrap_err();
        assert!(err.message.contains("input too large"));
    }

    #[test]
    fn list_lexicon_tool_lists_terms() {
        let server = ProjectServer::new();
        let params = Parameters(ListLexiconParams {
            kind: "cliches".to_string(),
        });
        let result = server.list_lexicon(params).expect("list_lexicon");
        let text = extract_text(&result).expect("text");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");
        assert!(!json["terms"].as_array().unwrap().is_empty());
    }

    #[test]
    fn list_lexicon_rejects_unknown_kind() {
        let server = ProjectServer::new();
        let params = Parameters(ListLexiconParams {
            kind: "buzzwords".to_string(),
        });
        assert!(server.list_lexicon(params).is_err());
    }
}
