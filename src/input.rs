use crate::error::InputError;
use anyhow::Context;
use std::io::Read;
use std::path::Path;

/// Parses integers separated by whitespace and/or commas, optionally wrapped
/// in a single pair of square brackets.
pub fn parse_sequence(text: &str) -> Result<Vec<i64>, InputError> {
    let text = text.trim();
    let text = text
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(text);

    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i64>().map_err(|_| InputError::InvalidInteger {
                token: token.to_string(),
                position,
            })
        })
        .collect()
}

/// Reads a sequence from `path`, or from stdin when `path` is `-`.
pub fn read_sequence<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<i64>> {
    let path = path.as_ref();

    let text = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading sequence from stdin")?;
        text
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading sequence from {}", path.display()))?
    };

    Ok(parse_sequence(&text)?)
}
