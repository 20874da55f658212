//! Render an [`ExecutionResult`] into the text block returned to MCP callers.
//!
//! Layout: `Exit Code: N`, blank line, a label with stdout, then (only when
//! stderr is non-empty) a second label with stderr. Download results use
//! their own labels; the `Output` vs `Errors` difference is relied upon by
//! existing callers.

use super::exec::ExecutionResult;

/// Which label set to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    Http,
    Download,
}

impl OutputStyle {
    fn body_label(&self, exit_code: i32) -> &'static str {
        match self {
            OutputStyle::Http => "Response",
            OutputStyle::Download if exit_code == 0 => "Download completed successfully",
            OutputStyle::Download => "Download failed",
        }
    }

    fn stderr_label(&self) -> &'static str {
        match self {
            OutputStyle::Http => "Errors",
            OutputStyle::Download => "Output",
        }
    }
}

pub fn format_result(result: &ExecutionResult, style: OutputStyle) -> String {
    let mut text = format!(
        "Exit Code: {}\n\n{}:\n{}",
        result.exit_code,
        style.body_label(result.exit_code),
        result.stdout
    );
    if !result.stderr.is_empty() {
        text.push_str(&format!("\n\n{}:\n{}", style.stderr_label(), result.stderr));
    }
    text
}
