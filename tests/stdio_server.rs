//! End-to-end: spawn the `mcp-curl` binary as an MCP child process and talk
//! to it with rmcp's client over stdio.

use anyhow::{Context, Result};
use rmcp::model::{CallToolRequestParam, CallToolResult};
use rmcp::service::RunningService;
use rmcp::transport::{ConfigureCommandExt, TokioChildProcess};
use rmcp::{RoleClient, ServiceExt};
use tokio::process::Command;

const SERVER_BIN: &str = env!("CARGO_BIN_EXE_mcp-curl");

async fn spawn_server(curl_bin: &str) -> Result<RunningService<RoleClient, ()>> {
    let curl_bin = curl_bin.to_string();
    ()
        .serve(TokioChildProcess::new(Command::new(SERVER_BIN).configure(
            |c| {
                c.arg("--curl-bin").arg(&curl_bin);
                c.env_remove("MCP_CURL_PROCESS_TIMEOUT");
                c.stderr(std::process::Stdio::null());
            },
        ))?)
        .await
        .context("Failed to spawn mcp-curl")
}

fn text_of(result: &CallToolResult) -> String {
    let value = serde_json::to_value(result).expect("serialize call result");
    value["content"][0]["text"]
        .as_str()
        .expect("text content")
        .to_string()
}

fn args(value: serde_json::Value) -> Option<serde_json::Map<String, serde_json::Value>> {
    value.as_object().cloned()
}

#[tokio::test]
async fn lists_all_curl_tools() -> Result<()> {
    let service = spawn_server("curl").await?;
    let tools = service.list_tools(Default::default()).await?;

    let mut names: Vec<String> = tools.tools.iter().map(|t| t.name.to_string()).collect();
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

    let _ = service.cancel().await;
    Ok(())
}

#[tokio::test]
async fn advanced_refusal_round_trips() -> Result<()> {
    let service = spawn_server("mcp-curl-test-no-such-binary").await?;
    let result = service
        .call_tool(CallToolRequestParam {
            name: "curl_advanced".into(),
            arguments: args(serde_json::json!({"args": ["-o", "/tmp/x", "https://x"]})),
        })
        .await?;

    let text = text_of(&result);
    assert!(text.contains("unsafe flags"), "got: {text}");
    assert!(!text.starts_with("Exit Code"));

    let _ = service.cancel().await;
    Ok(())
}

#[tokio::test]
async fn missing_curl_is_reported_in_text() -> Result<()> {
    let service = spawn_server("mcp-curl-test-no-such-binary").await?;
    let result = service
        .call_tool(CallToolRequestParam {
            name: "curl_get".into(),
            arguments: args(serde_json::json!({"url": "https://example.com/get"})),
        })
        .await?;

    let text = text_of(&result);
    assert!(text.starts_with("Exit Code: 1\n\nResponse:\n"), "got: {text}");
    assert!(text.contains("\n\nErrors:\n"));

    let _ = service.cancel().await;
    Ok(())
}
