use std::sync::Arc;

use rmcp::{
    RoleServer,
    ServerHandler,
    ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        Annotated,
        Annotations,
        CallToolResult,
        Content,
        Implementation,
        ListResourcesResult,
        PaginatedRequestParams,
        RawResource,
        ReadResourceRequestParams,
        ReadResourceResult,
        Resource,
        ResourceContents,
        Role,
        ServerCapabilities,
        ServerInfo,
    },
    service::RequestContext,
    tool,
    tool_handler,
    tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    browse,
    category::{BrowseScope, SearchScope},
    corpus::Corpus,
    error,
    resources::{self, AUDIENCE, Audience, ResourceContent, ResourceDescriptor},
    search::{self, DEFAULT_LIMIT},
};

const DEFAULT_SERVER_NAME: &str = "docscout";

/// Identity the server reports to clients.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
        }
    }
}

impl ServerConfig {
    /// Override the server name; blank names keep the default.
    pub fn with_name(mut self, name: Option<String>) -> Self {
        if let Some(name) = name.filter(|n| !n.trim().is_empty()) {
            self.name = name;
        }
        self
    }
}

#[derive(Clone)]
pub struct DocscoutMcpServer {
    corpus: Arc<Corpus>,
    config: ServerConfig,
    tool_router: ToolRouter<Self>,
}

impl DocscoutMcpServer {
    pub fn new(corpus: Corpus, config: ServerConfig) -> Self {
        Self {
            corpus: Arc::new(corpus),
            config,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router(router = tool_router)]
impl DocscoutMcpServer {
    /// Keyword search with relevance ranking and matched line context.
    #[tool(
        name = "search_docs",
        description = "Search the documentation using keywords or phrases. Returns relevant documents ranked by relevance, with matching lines and context."
    )]
    pub async fn search_docs(
        &self,
        params: Parameters<SearchDocsParams>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        let params = params.0;
        let search_params = search::SearchParams {
            query: params.query,
            scope: params.category,
            limit: params.limit.unwrap_or(DEFAULT_LIMIT),
        };

        let outcome = search::execute_search(&search_params, &self.corpus);
        let summary = search::format_markdown(&outcome);
        let structured = serde_json::to_value(&outcome)
            .map_err(|e| mcp_error("failed to serialize search results", e))?;

        let mut result = CallToolResult::success(vec![Content::text(summary)]);
        result.structured_content = Some(structured);
        Ok(result)
    }

    /// Browse documents by category, or get an overview of all of them.
    #[tool(
        name = "get_docs_by_category",
        description = "Get documentation organized by category. Use \"overview\" for a summary of every category."
    )]
    pub async fn get_docs_by_category(
        &self,
        params: Parameters<CategoryParams>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        let outcome = browse::browse(&self.corpus, params.0.category);
        let summary = browse::format_markdown(&outcome);
        let structured = serde_json::to_value(&outcome)
            .map_err(|e| mcp_error("failed to serialize category listing", e))?;

        let mut result = CallToolResult::success(vec![Content::text(summary)]);
        result.structured_content = Some(structured);
        Ok(result)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for DocscoutMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = self.config.name.clone();
        server_info.title = Some("docscout MCP".to_string());
        server_info.version = env!("CARGO_PKG_VERSION").to_string();

        ServerInfo::new(
            ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
        )
        .with_server_info(server_info)
        .with_instructions(
            "Use search_docs to find documentation by keyword, get_docs_by_category to browse, and read docs:// resources for full documents.",
        )
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, rmcp::ErrorData> {
        let resources = resources::list(&self.corpus)
            .iter()
            .map(to_mcp_resource)
            .collect();
        Ok(ListResourcesResult::with_all_items(resources))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, rmcp::ErrorData> {
        let content = resources::read(&self.corpus, &request.uri)
            .map_err(|e| read_error(&request.uri, e))?;
        Ok(ReadResourceResult::new(vec![to_mcp_contents(content)]))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchDocsParams {
    /// Keywords, phrases, or specific concepts to find.
    pub query: String,
    /// Limit the search to one documentation category (default: all).
    #[serde(default)]
    pub category: SearchScope,
    /// Maximum number of results (default: 10).
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryParams {
    /// The documentation category to explore, or "overview".
    pub category: BrowseScope,
}

fn to_role(audience: Audience) -> Role {
    match audience {
        Audience::User => Role::User,
        Audience::Assistant => Role::Assistant,
    }
}

fn to_mcp_resource(descriptor: &ResourceDescriptor) -> Resource {
    let mut raw =
        RawResource::new(descriptor.uri.clone(), descriptor.name.clone());
    raw.description = Some(descriptor.description.clone());
    raw.mime_type = Some(descriptor.mime_type.to_string());

    let mut annotations =
        Annotations::for_resource(descriptor.priority, descriptor.last_modified);
    annotations.audience = Some(AUDIENCE.into_iter().map(to_role).collect());

    Annotated::new(raw, Some(annotations))
}

fn to_mcp_contents(content: ResourceContent) -> ResourceContents {
    let mut contents = ResourceContents::text(content.text, content.uri);
    if let ResourceContents::TextResourceContents { mime_type, .. } =
        &mut contents
    {
        *mime_type = Some(content.mime_type.to_string());
    }
    contents
}

fn read_error(uri: &str, error: error::Error) -> rmcp::ErrorData {
    let data = Some(json!({ "uri": uri, "error": error.to_string() }));
    match error {
        error::Error::InvalidIdentifier { .. } => {
            rmcp::ErrorData::invalid_params(error.to_string(), data)
        }
        error::Error::NotFound { .. } => {
            rmcp::ErrorData::resource_not_found(error.to_string(), data)
        }
        _ => rmcp::ErrorData::internal_error("failed to read resource", data),
    }
}

fn mcp_error(message: &str, error: impl std::fmt::Display) -> rmcp::ErrorData {
    rmcp::ErrorData::internal_error(
        message.to_string(),
        Some(json!({ "error": error.to_string() })),
    )
}

pub fn run_mcp(corpus: Corpus, config: ServerConfig) -> error::Result<()> {
    tracing::info!(
        root = %corpus.root().display(),
        name = %config.name,
        "starting MCP server on stdio"
    );
    let server = DocscoutMcpServer::new(corpus, config);

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
