/// MCP server over the councillor directory.
///
/// Exposes three read-only tools:
/// - `search_councillors`: case-insensitive name filter
/// - `get_councillor`: full record by exact name
/// - `directory_info`: store size, category totals and dataset fingerprint
use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tracing::{debug, info};

use directory_common::mcp_api::{
    CategoryCount, CouncillorDetailResponse, CouncillorSummary, DirectoryInfoResponse,
    GetCouncillorParams, SearchCouncillorsParams, SearchCouncillorsResponse,
};
use directory_common::store::Store;

const DEFAULT_LIMIT: u32 = 50;
const MAX_LIMIT: u32 = 200;

#[derive(Clone)]
pub struct CouncillorDirectoryServer {
    store: Arc<Store>,
    tool_router: ToolRouter<CouncillorDirectoryServer>,
}

impl CouncillorDirectoryServer {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl CouncillorDirectoryServer {
    #[tool(description = "Search councillors by name. Matches a case-insensitive substring of the display name; an empty query lists everyone. Returns summary counts per councillor in directory order.")]
    async fn search_councillors(
        &self,
        Parameters(params): Parameters<SearchCouncillorsParams>,
    ) -> Result<Json<SearchCouncillorsResponse>, String> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;

        let matches: Vec<CouncillorSummary> = self
            .store
            .filter(&params.query)
            .map(CouncillorSummary::from)
            .collect();
        let total_matches = matches.len();
        debug!(query = %params.query, total_matches, limit, "search_councillors");

        Ok(Json(SearchCouncillorsResponse {
            total_matches,
            councillors: matches.into_iter().take(limit).collect(),
        }))
    }

    #[tool(description = "Get the full research record for one councillor by exact display name (e.g. 'Jane Doe'), including every result in basic_info, social_media, business_interests and controversy.")]
    async fn get_councillor(
        &self,
        Parameters(params): Parameters<GetCouncillorParams>,
    ) -> Result<Json<CouncillorDetailResponse>, String> {
        if params.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }

        let councillor = self.store.get(&params.name).ok_or_else(|| {
            info!(name = %params.name, "councillor not found");
            format!("councillor not found: {}", params.name)
        })?;

        Ok(Json(CouncillorDetailResponse::from(councillor)))
    }

    #[tool(description = "Describe the loaded directory: number of councillors, result totals per category, and the SHA-256 fingerprint of the results file.")]
    async fn directory_info(&self) -> Result<Json<DirectoryInfoResponse>, String> {
        let stats = self.store.stats();
        Ok(Json(DirectoryInfoResponse {
            councillor_count: stats.councillors,
            category_totals: stats
                .category_totals
                .into_iter()
                .map(|(category, count)| CategoryCount { category, count })
                .collect(),
            fingerprint: self.store.fingerprint().to_string(),
        }))
    }
}

#[tool_handler]
impl ServerHandler for CouncillorDirectoryServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "councillor-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Councillor research directory. Use search_councillors to find councillors by \
                 name, get_councillor for the full categorized results of one councillor, and \
                 directory_info to see what data is loaded. All data is read-only."
                    .to_string(),
            ),
        }
    }
}
