//! Connection to a spawned RIMS MCP server over stdio.

use async_trait::async_trait;
use rmcp::{
    ClientHandler, RoleClient, ServiceExt,
    model::{CallToolRequestParam, CallToolResult, ClientInfo, Implementation},
    service::RunningService,
    transport::{ConfigureCommandExt, TokioChildProcess},
};
use serde_json::{Map, Value};
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info};

use super::catalog::OperationDescriptor;
use super::config::ClientConfig;
use super::error::ClientError;

/// Something that can list and call tools.
///
/// Implemented by [`RimsClient`]; sessions are written against this trait so
/// they can be driven without a child process.
#[async_trait]
pub trait ToolInvoker: Send + Sync {
    async fn list_operations(&self) -> Result<Vec<OperationDescriptor>, ClientError>;

    async fn invoke(
        &self,
        name: &str,
        arguments: Map<String, Value>,
    ) -> Result<CallToolResult, ClientError>;
}

struct RimsClientHandler;

impl ClientHandler for RimsClientHandler {
    fn get_info(&self) -> ClientInfo {
        ClientInfo {
            protocol_version: Default::default(),
            capabilities: Default::default(),
            client_info: Implementation {
                name: "rims-mcp-client".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// An initialized session with a child server process.
pub struct RimsClient {
    service: RunningService<RoleClient, RimsClientHandler>,
    call_timeout: Duration,
}

impl RimsClient {
    /// Spawn the configured server and complete the MCP handshake.
    ///
    /// The child inherits the environment; its log level defaults to `warn`
    /// so server logs do not drown the prompts on the shared terminal.
    pub async fn connect(config: &ClientConfig) -> Result<Self, ClientError> {
        let command = &config.server_command;
        let transport = TokioChildProcess::new(Command::new(command).configure(|cmd| {
            cmd.args(&config.server_args);
            if std::env::var_os("MCP_LOG_LEVEL").is_none() {
                cmd.env("MCP_LOG_LEVEL", "warn");
            }
        }))
        .map_err(|e| ClientError::Transport(format!("Failed to spawn process '{command}': {e}")))?;

        let service = RimsClientHandler.serve(transport).await.map_err(|e| {
            ClientError::Transport(format!("Failed to connect to stdio MCP server '{command}': {e}"))
        })?;

        if let Some(server) = service.peer_info() {
            info!(
                "Connected to {} v{}",
                server.server_info.name, server.server_info.version
            );
        }

        Ok(Self {
            service,
            call_timeout: config.call_timeout(),
        })
    }

    /// Shut the session down and reap the child.
    pub async fn close(self) -> Result<(), ClientError> {
        self.service
            .cancel()
            .await
            .map_err(|e| ClientError::Transport(format!("Failed to close connection: {e}")))?;
        Ok(())
    }
}

#[async_trait]
impl ToolInvoker for RimsClient {
    async fn list_operations(&self) -> Result<Vec<OperationDescriptor>, ClientError> {
        let listed = self
            .service
            .list_tools(Default::default())
            .await
            .map_err(|e| ClientError::Transport(format!("Failed to list tools: {e}")))?;

        debug!("Server listed {} tools", listed.tools.len());
        listed.tools.iter().map(OperationDescriptor::from_tool).collect()
    }

    async fn invoke(
        &self,
        name: &str,
        arguments: Map<String, Value>,
    ) -> Result<CallToolResult, ClientError> {
        let request = call_request(name, arguments);

        tokio::time::timeout(self.call_timeout, self.service.call_tool(request))
            .await
            .map_err(|_| ClientError::Timeout(self.call_timeout))?
            .map_err(|e| ClientError::Invocation(format!("Failed to call tool '{name}': {e}")))
    }
}

fn call_request(name: &str, arguments: Map<String, Value>) -> CallToolRequestParam {
    CallToolRequestParam {
        name: name.to_string().into(),
        arguments: Some(arguments),
    }
}
