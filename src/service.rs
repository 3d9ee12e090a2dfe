use anyhow::Result;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::models::WeatherRequest;
use crate::report::current_weather_report;
use crate::source::OpenMeteo;

/// MCP service exposing the city weather tool.
#[derive(Clone)]
pub struct Clima {
    source: Arc<OpenMeteo>,
    tool_router: ToolRouter<Self>,
}

impl Clima {
    pub fn new() -> Result<Self> {
        Ok(Self {
            source: Arc::new(OpenMeteo::new()?),
            tool_router: Self::tool_router(),
        })
    }
}

#[tool_handler]
impl ServerHandler for Clima {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-clima-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Serviço de clima atual por cidade, usando a api Open-Meteo para \
                 geocodificação e condições atuais."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Clima {
    #[tool(description = "Informações sobre o clima de uma cidade (usando api Open-Meteo)")]
    async fn clima_api(
        &self,
        Parameters(request): Parameters<WeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting weather for city: {}", request.city);

        let report = current_weather_report(
            self.source.as_ref(),
            self.source.as_ref(),
            &request.city,
        )
        .await
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let json = serde_json::to_string(&report).map_err(|e| {
            McpError::internal_error(format!("Failed to serialize report: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}
