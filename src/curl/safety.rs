//! Denylist screening for `curl_advanced`.
//!
//! Matching is by prefix, not exact flag: curl accepts abbreviated and
//! attached forms (`-ofile`, `--output=x`), so anything that merely starts
//! with a listed prefix is refused. This over-rejects (`--outputXYZ`, a bare
//! `-Of`) and that is accepted.

use super::args::ArgumentVector;
use super::error::CurlError;

/// Flag prefixes that can write or read local files, load config/secrets,
/// or change TLS identity.
pub const DENYLIST: &[&str] = &[
    "--output",
    "-o",
    "--remote-name",
    "-O",
    "--upload-file",
    "-T",
    "--data-binary",
    "--data-raw",
    "--config",
    "-K",
    "--netrc-file",
    "--key",
    "--cert",
    "--engine",
];

/// First token that starts with a denylisted prefix, with the prefix it hit.
pub fn find_unsafe<'a>(args: &'a [String]) -> Option<(&'a str, &'static str)> {
    args.iter().find_map(|token| {
        DENYLIST
            .iter()
            .find(|prefix| token.starts_with(**prefix))
            .map(|prefix| (token.as_str(), *prefix))
    })
}

/// Reject the vector if any token is denylisted.
pub fn screen(args: &ArgumentVector) -> Result<(), CurlError> {
    match find_unsafe(args.as_slice()) {
        Some((token, prefix)) => Err(CurlError::UnsafeArgument {
            token: token.to_string(),
            prefix,
        }),
        None => Ok(()),
    }
}
