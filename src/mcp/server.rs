use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    cli::args::CommonArgs,
    config::load_config,
    core::{ScanContext, extract_from_source},
};

use super::types::{
    ConfigDto, ConfigValues, DependencyItem, DependencyScanResult, ExtractSourceParams,
    ExtractSourceResult, GetConfigParams, Pagination, ParseErrorItem, ScanDependenciesParams,
};

const DEFAULT_LIMIT: usize = 50;
const MAX_LIMIT: usize = 200;

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[derive(Clone)]
pub struct GoogDepsMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for GoogDepsMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl GoogDepsMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current goog-deps configuration
    #[tool(description = "Get the goog-deps configuration for a project.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// Scan a project for goog.provide / goog.require namespaces
    #[tool(
        description = "Scan a project's JavaScript/TypeScript files and list the namespaces each file declares with goog.provide and depends on with goog.require. Returns a paginated list of files."
    )]
    pub async fn scan_dependencies(
        &self,
        params: Parameters<ScanDependenciesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params
            .limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);

        let common_args = CommonArgs {
            source_root: Some(PathBuf::from(&params.project_root_path)),
            verbose: false,
        };

        let ctx = ScanContext::new(&common_args)
            .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))?;
        let analysis = ctx.analysis();

        let matching: Vec<_> = analysis
            .files
            .iter()
            .filter(|file| params.include_empty || !file.is_empty())
            .collect();

        let total_count = matching.len();
        let provide_count: usize = matching.iter().map(|f| f.provides.len()).sum();
        let require_count: usize = matching.iter().map(|f| f.requires.len()).sum();

        let items: Vec<DependencyItem> = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .map(DependencyItem::from)
            .collect();

        let has_more = offset + items.len() < total_count;

        json_result(&DependencyScanResult {
            total_file_count: ctx.files.len(),
            total_count,
            provide_count,
            require_count,
            items,
            parse_errors: analysis
                .parse_errors
                .iter()
                .cloned()
                .map(ParseErrorItem::from)
                .collect(),
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// Extract namespaces from an inline source snippet
    #[tool(
        description = "Extract goog.provide and goog.require namespaces from a JavaScript/TypeScript source snippet."
    )]
    pub async fn extract_source(
        &self,
        params: Parameters<ExtractSourceParams>,
    ) -> Result<CallToolResult, McpError> {
        let ExtractSourceParams { code, file_name } = params.0;
        let file_name = file_name.unwrap_or_else(|| "input.js".to_string());

        let result = extract_from_source(code, &file_name)
            .map_err(|e| McpError::invalid_params(format!("Failed to parse: {}", e), None))?;

        json_result(&ExtractSourceResult::from(result))
    }
}

#[tool_handler]
impl ServerHandler for GoogDepsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "goog-deps MCP extracts Closure Library dependencies from JavaScript/TypeScript projects.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. scan_dependencies - List goog.provide / goog.require namespaces per file (paginated)\n\
                 3. extract_source - Extract namespaces from a source snippet\n\n\
                 Only the first string argument of goog.provide(...) and goog.require(...) calls is\n\
                 recorded. Other call shapes are ignored."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = GoogDepsMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
