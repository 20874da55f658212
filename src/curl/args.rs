/*!
args.rs - deterministic argv construction for each request kind.

Vectors never contain the program name; the executor supplies it. Tokens are
literal (no shell, no globbing, no env expansion). Flag order is fixed so the
output is easy to assert on, curl itself does not care.
*/

use super::error::CurlError;
use super::request::{
    AdvancedRequest, BodyMethod, BodyRequest, DeleteRequest, DownloadRequest, GetRequest,
    RequestSpec,
};

/* ---- Argument Vector ---- */

/// Ordered curl arguments for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgumentVector(Vec<String>);

impl ArgumentVector {
    fn starting_with(url: &str) -> Self {
        Self(vec![url.to_string()])
    }

    fn push(&mut self, token: impl Into<String>) {
        self.0.push(token.into());
    }

    fn push_pair(&mut self, flag: &str, value: impl Into<String>) {
        self.push(flag);
        self.push(value);
    }

    fn push_headers(&mut self, headers: &[String]) {
        for header in headers {
            self.push_pair("-H", header.as_str());
        }
    }

    fn push_redirects(&mut self, follow: bool) {
        if follow {
            self.push("-L");
        }
    }

    fn push_timeout(&mut self, timeout: Option<f64>) {
        if let Some(secs) = effective_timeout(timeout) {
            self.push_pair("--max-time", format_seconds(secs));
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    /// Shell-quoted rendering for logs only; never executed.
    pub fn command_line(&self, program: &str) -> String {
        shell_words::join(std::iter::once(program).chain(self.0.iter().map(String::as_str)))
    }
}

impl From<Vec<String>> for ArgumentVector {
    fn from(args: Vec<String>) -> Self {
        Self(args)
    }
}

/* ---- Builders ---- */

impl RequestSpec {
    /// Build the argv for this request. Only `json_data` serialization can fail.
    pub fn build_args(&self) -> Result<ArgumentVector, CurlError> {
        match self {
            RequestSpec::Get(r) => Ok(build_get(r)),
            RequestSpec::Body(method, r) => build_body(*method, r),
            RequestSpec::Delete(r) => Ok(build_delete(r)),
            RequestSpec::Download(r) => Ok(build_download(r)),
            RequestSpec::Advanced(r) => Ok(build_advanced(r)),
        }
    }
}

pub fn build_get(req: &GetRequest) -> ArgumentVector {
    let mut args = ArgumentVector::starting_with(&req.url);
    args.push_headers(&req.headers);
    args.push_redirects(req.follow_redirects);
    args.push_timeout(req.timeout);
    if let Some(ua) = non_empty(&req.user_agent) {
        args.push_pair("-A", ua);
    }
    args.push("-i");
    args
}

pub fn build_body(method: BodyMethod, req: &BodyRequest) -> Result<ArgumentVector, CurlError> {
    let mut args = ArgumentVector::starting_with(&req.url);
    args.push_pair("-X", method.as_str());

    let mut content_type = non_empty(&req.content_type).map(str::to_string);
    if let Some(json) = &req.json_data {
        if non_empty(&req.data).is_some() {
            tracing::warn!(
                url = %req.url,
                "both data and json_data supplied; sending json_data and ignoring data"
            );
        }
        args.push_pair("-d", serde_json::to_string(json)?);
        content_type.get_or_insert_with(|| "application/json".to_string());
    } else if let Some(data) = non_empty(&req.data) {
        args.push_pair("-d", data);
    }
    if let Some(ct) = content_type {
        args.push_pair("-H", format!("Content-Type: {ct}"));
    }

    args.push_headers(&req.headers);
    args.push_redirects(req.follow_redirects);
    args.push_timeout(req.timeout);
    args.push("-i");
    Ok(args)
}

pub fn build_delete(req: &DeleteRequest) -> ArgumentVector {
    let mut args = ArgumentVector::starting_with(&req.url);
    args.push_pair("-X", "DELETE");
    args.push_headers(&req.headers);
    args.push_redirects(req.follow_redirects);
    args.push_timeout(req.timeout);
    args.push("-i");
    args
}

pub fn build_download(req: &DownloadRequest) -> ArgumentVector {
    let mut args = ArgumentVector::starting_with(&req.url);
    match non_empty(&req.output_filename) {
        Some(name) => args.push_pair("-o", name),
        None => args.push("-O"),
    }
    if req.resume {
        args.push_pair("-C", "-");
    }
    args.push_redirects(req.follow_redirects);
    args.push_timeout(req.timeout);
    args.push("--progress-bar");
    args
}

pub fn build_advanced(req: &AdvancedRequest) -> ArgumentVector {
    ArgumentVector::from(req.args.clone())
}

/* ---- Helpers ---- */

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Zero and NaN mean "no timeout".
fn effective_timeout(timeout: Option<f64>) -> Option<f64> {
    timeout.filter(|t| *t != 0.0 && !t.is_nan())
}

/// Render seconds the way a JSON number prints (`30`, `2.5`).
fn format_seconds(secs: f64) -> String {
    format!("{secs}")
}

/* ---- Tests ---- */
