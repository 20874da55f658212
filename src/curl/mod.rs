/*!
curl pipeline: request -> argv -> (screen) -> spawn -> capture -> format.

Modules:
  request.rs  typed tool inputs + RequestSpec
  args.rs     ArgumentVector builders
  safety.rs   denylist for the free-form tool
  exec.rs     process executor (never fails)
  format.rs   result text rendering
  error.rs    CurlError

Every call is independent: no shared state, no caching, no retries.
*/

pub mod args;
pub mod error;
pub mod exec;
pub mod format;
pub mod request;
pub mod safety;

pub use error::CurlError;
pub use exec::Executor;
pub use format::{OutputStyle, format_result};
pub use request::{
    AdvancedRequest, BodyMethod, BodyRequest, DeleteRequest, DownloadRequest, GetRequest,
    RequestSpec,
};

impl RequestSpec {
    pub fn output_style(&self) -> OutputStyle {
        match self {
            RequestSpec::Download(_) => OutputStyle::Download,
            _ => OutputStyle::Http,
        }
    }
}

/// Run one request end to end and return the text shown to the caller.
///
/// Refusals come back as the fixed refusal text; any other pre-spawn
/// failure is reported as `Error executing curl: ...`.
pub async fn run_request(executor: &Executor, spec: &RequestSpec) -> String {
    match try_run(executor, spec).await {
        Ok(text) => text,
        Err(err) if err.is_refusal() => err.to_string(),
        Err(err) => {
            tracing::error!(tool = spec.tool_name(), error = %err, "request could not be built");
            format!("Error executing curl: {err}")
        }
    }
}

async fn try_run(executor: &Executor, spec: &RequestSpec) -> Result<String, CurlError> {
    let args = spec.build_args()?;
    if spec.needs_screening()
        && let Err(err) = safety::screen(&args)
    {
        if let CurlError::UnsafeArgument { token, prefix } = &err {
            tracing::warn!(tool = spec.tool_name(), %token, %prefix, "refused unsafe curl argument");
        }
        return Err(err);
    }

    let result = executor.execute(args).await;
    Ok(format_result(&result, spec.output_style()))
}
