//! MCP server surface: six curl tools behind rmcp's tool router.
//!
//! CurlServer -> tool methods -> curl::run_request
//! Every tool returns a single text content item; failures are reported in
//! that text, never as protocol errors.

use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, ErrorData as McpError, Implementation, ServerCapabilities,
        ServerInfo,
    },
    tool, tool_handler, tool_router,
};

use crate::curl::{
    self, AdvancedRequest, BodyMethod, BodyRequest, DeleteRequest, DownloadRequest, Executor,
    GetRequest, RequestSpec,
};

pub const SERVER_NAME: &str = "mcp-curl";

/// Stateless apart from the executor settings; clones share nothing mutable.
#[derive(Debug, Clone)]
pub struct CurlServer {
    executor: Executor,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CurlServer {
    pub fn new(executor: Executor) -> Self {
        Self {
            executor,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Make an HTTP GET request using curl")]
    async fn curl_get(
        &self,
        Parameters(req): Parameters<GetRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(RequestSpec::Get(req)).await)
    }

    #[tool(description = "Make an HTTP POST request using curl")]
    async fn curl_post(
        &self,
        Parameters(req): Parameters<BodyRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(RequestSpec::Body(BodyMethod::Post, req)).await)
    }

    #[tool(description = "Make an HTTP PUT request using curl")]
    async fn curl_put(
        &self,
        Parameters(req): Parameters<BodyRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(RequestSpec::Body(BodyMethod::Put, req)).await)
    }

    #[tool(description = "Make an HTTP DELETE request using curl")]
    async fn curl_delete(
        &self,
        Parameters(req): Parameters<DeleteRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(RequestSpec::Delete(req)).await)
    }

    #[tool(description = "Download a file using curl")]
    async fn curl_download(
        &self,
        Parameters(req): Parameters<DownloadRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(RequestSpec::Download(req)).await)
    }

    #[tool(description = "Execute curl with custom arguments (advanced usage)")]
    async fn curl_advanced(
        &self,
        Parameters(req): Parameters<AdvancedRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(RequestSpec::Advanced(req)).await)
    }
}

impl CurlServer {
    async fn dispatch(&self, spec: RequestSpec) -> CallToolResult {
        tracing::info!(
            tool = spec.tool_name(),
            url = spec.url().unwrap_or("-"),
            "tool call"
        );
        let text = curl::run_request(&self.executor, &spec).await;
        CallToolResult::success(vec![Content::text(text)])
    }
}

#[tool_handler]
impl ServerHandler for CurlServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Runs the local curl binary. Use curl_get/curl_post/curl_put/curl_delete for \
                 HTTP requests, curl_download to save files, and curl_advanced for raw curl \
                 arguments (file, config and certificate flags are refused)."
                    .into(),
            ),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const MISSING: &str = "mcp-curl-test-no-such-binary";

    fn server(program: &str) -> CurlServer {
        CurlServer::new(Executor::new(program))
    }

    fn text_of(result: &CallToolResult) -> String {
        let value = serde_json::to_value(result).unwrap();
        let content = value["content"].as_array().unwrap();
        assert_eq!(content.len(), 1);
        assert_eq!(content[0]["type"], "text");
        content[0]["text"].as_str().unwrap().to_string()
    }

    fn params<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> Parameters<T> {
        Parameters(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn registers_six_tools() {
        let s = server("curl");
        let mut names: Vec<String> = s
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "curl_advanced",
                "curl_delete",
                "curl_download",
                "curl_get",
                "curl_post",
                "curl_put"
            ]
        );
    }

    #[test]
    fn schemas_mark_required_fields() {
        let s = server("curl");
        for tool in s.tool_router.list_all() {
            let schema = serde_json::Value::Object((*tool.input_schema).clone());
            let required = schema["required"].as_array().cloned().unwrap_or_default();
            let expected = if tool.name == "curl_advanced" { "args" } else { "url" };
            assert_eq!(required, vec![json!(expected)], "tool {}", tool.name);
        }
    }

    #[test]
    fn server_info_names_the_server() {
        let info = server("curl").get_info();
        assert_eq!(info.server_info.name, SERVER_NAME);
        assert!(info.capabilities.tools.is_some());
    }

    #[tokio::test]
    async fn advanced_refuses_cert_flag() {
        let res = server(MISSING)
            .curl_advanced(params(json!({"args": ["--cert", "/etc/ssl/key"]})))
            .await
            .unwrap();
        let text = text_of(&res);
        assert!(text.contains("unsafe flags"));
        assert!(!text.starts_with("Exit Code"));
    }

    #[tokio::test]
    async fn get_with_missing_binary_reports_exit_one() {
        let res = server(MISSING)
            .curl_get(params(json!({"url": "https://example.com/get"})))
            .await
            .unwrap();
        assert!(text_of(&res).starts_with("Exit Code: 1\n\nResponse:\n"));
    }

    #[tokio::test]
    async fn download_with_missing_binary_reports_failure() {
        let res = server(MISSING)
            .curl_download(params(json!({"url": "https://x/file.zip"})))
            .await
            .unwrap();
        let text = text_of(&res);
        assert!(text.starts_with("Exit Code: 1\n\nDownload failed:\n"));
        assert!(text.contains("\n\nOutput:\n"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn post_json_reaches_process_argv() {
        let res = server("echo")
            .curl_post(params(json!({"url": "https://x", "json_data": {"a": 1}})))
            .await
            .unwrap();
        assert_eq!(
            text_of(&res),
            "Exit Code: 0\n\nResponse:\nhttps://x -X POST -d {\"a\":1} -H Content-Type: application/json -i\n"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn put_and_delete_use_their_methods() {
        let s = server("echo");
        let put = s
            .curl_put(params(json!({"url": "https://x", "data": "v=1"})))
            .await
            .unwrap();
        assert!(text_of(&put).contains("https://x -X PUT -d v=1 -i"));

        let del = s
            .curl_delete(params(json!({"url": "https://x/9"})))
            .await
            .unwrap();
        assert!(text_of(&del).contains("https://x/9 -X DELETE -i"));
    }
}
