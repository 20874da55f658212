/*!
request.rs - typed tool inputs.

One parameter struct per tool (POST and PUT share `BodyRequest`), plus the
`RequestSpec` tag that the rest of the pipeline dispatches on. Field doc
comments double as the JSON schema descriptions advertised to MCP clients.
*/

use schemars::JsonSchema;
use serde::Deserialize;

/* ---- Parameter Structs ---- */

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetRequest {
    /// The URL to make the GET request to
    pub url: String,
    /// Optional HTTP headers in the format 'Header: Value'
    #[serde(default)]
    pub headers: Vec<String>,
    /// Whether to follow redirects
    #[serde(default)]
    pub follow_redirects: bool,
    /// Request timeout in seconds
    pub timeout: Option<f64>,
    /// Custom User-Agent string
    pub user_agent: Option<String>,
}

/// Input for `curl_post` and `curl_put`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BodyRequest {
    /// The URL to send the request to
    pub url: String,
    /// Data to send in the request body
    pub data: Option<String>,
    /// JSON object to send as the request body (takes precedence over `data`)
    pub json_data: Option<serde_json::Map<String, serde_json::Value>>,
    /// Optional HTTP headers in the format 'Header: Value'
    #[serde(default)]
    pub headers: Vec<String>,
    /// Content-Type header (will be added automatically for JSON data)
    pub content_type: Option<String>,
    /// Whether to follow redirects
    #[serde(default)]
    pub follow_redirects: bool,
    /// Request timeout in seconds
    pub timeout: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteRequest {
    /// The URL to make the DELETE request to
    pub url: String,
    /// Optional HTTP headers in the format 'Header: Value'
    #[serde(default)]
    pub headers: Vec<String>,
    /// Whether to follow redirects
    #[serde(default)]
    pub follow_redirects: bool,
    /// Request timeout in seconds
    pub timeout: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DownloadRequest {
    /// The URL of the file to download
    pub url: String,
    /// Output filename (if not provided, will use remote filename)
    pub output_filename: Option<String>,
    /// Resume partial download if file exists
    #[serde(default)]
    pub resume: bool,
    /// Whether to follow redirects
    #[serde(default = "follow_by_default")]
    pub follow_redirects: bool,
    /// Request timeout in seconds
    pub timeout: Option<f64>,
}

fn follow_by_default() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AdvancedRequest {
    /// Array of curl arguments (excluding 'curl' itself)
    pub args: Vec<String>,
}

/* ---- Request Tag ---- */

/// Method emitted via `-X` for body-carrying requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyMethod {
    Post,
    Put,
}

impl BodyMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyMethod::Post => "POST",
            BodyMethod::Put => "PUT",
        }
    }
}

/// One validated tool invocation.
#[derive(Debug, Clone)]
pub enum RequestSpec {
    Get(GetRequest),
    Body(BodyMethod, BodyRequest),
    Delete(DeleteRequest),
    Download(DownloadRequest),
    Advanced(AdvancedRequest),
}

impl RequestSpec {
    /// MCP tool name this request arrived through.
    pub fn tool_name(&self) -> &'static str {
        match self {
            RequestSpec::Get(_) => "curl_get",
            RequestSpec::Body(BodyMethod::Post, _) => "curl_post",
            RequestSpec::Body(BodyMethod::Put, _) => "curl_put",
            RequestSpec::Delete(_) => "curl_delete",
            RequestSpec::Download(_) => "curl_download",
            RequestSpec::Advanced(_) => "curl_advanced",
        }
    }

    /// Target URL, when the request has a dedicated field for it.
    pub fn url(&self) -> Option<&str> {
        match self {
            RequestSpec::Get(r) => Some(&r.url),
            RequestSpec::Body(_, r) => Some(&r.url),
            RequestSpec::Delete(r) => Some(&r.url),
            RequestSpec::Download(r) => Some(&r.url),
            RequestSpec::Advanced(_) => None,
        }
    }

    /// Only the free-form variant goes through the denylist.
    pub fn needs_screening(&self) -> bool {
        matches!(self, RequestSpec::Advanced(_))
    }
}
