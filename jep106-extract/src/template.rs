//! Template substitution
//!
//! The template is any text file carrying a version comment line and a data
//! literal delimited by an opening line and a closing-bracket line. Only those
//! two regions are rewritten; every other byte is passed through unchanged.

use crate::config::TemplateConfig;
use crate::types::{GeneratorError, Result};

/// Replace the first line starting with the version prefix
///
/// Returns the new text and whether a version line was found.
pub fn substitute_version(text: &str, new_line: &str, config: &TemplateConfig) -> (String, bool) {
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if line.starts_with(&config.version_prefix) {
            let content_len = line_content(line).len();
            let mut out = String::with_capacity(text.len() + new_line.len());
            out.push_str(&text[..offset]);
            out.push_str(new_line);
            out.push_str(&text[offset + content_len..]);
            return (out, true);
        }
        offset += line.len();
    }

    (text.to_string(), false)
}

/// Locate the data literal: from the opening marker through the end of the
/// first following line that consists solely of the closing marker
///
/// Returns a byte range into `text`.
pub fn find_block(text: &str, config: &TemplateConfig) -> Result<std::ops::Range<usize>> {
    let start = text
        .find(&config.block_start)
        .ok_or_else(|| GeneratorError::MissingBlock(config.block_start.clone()))?;

    let unterminated = || GeneratorError::UnterminatedBlock {
        start: config.block_start.clone(),
        end: config.block_end.clone(),
    };

    // The closing line is searched from the line after the opening marker
    let mut offset = start
        + text[start..]
            .find('\n')
            .map(|pos| pos + 1)
            .ok_or_else(unterminated)?;

    for line in text[offset..].split_inclusive('\n') {
        let content = line_content(line);
        if content == config.block_end {
            return Ok(start..offset + content.len());
        }
        offset += line.len();
    }

    Err(unterminated())
}

/// Replace the data literal with `literal`
pub fn substitute_block(text: &str, literal: &str, config: &TemplateConfig) -> Result<String> {
    let range = find_block(text, config)?;
    log::debug!(
        "Replacing data block at bytes {}..{} ({} bytes)",
        range.start,
        range.end,
        range.len()
    );

    // Match the line endings of the block being replaced
    let literal = if text[range.clone()].contains("\r\n") {
        log::debug!("Template uses CRLF line endings");
        literal.replace('\n', "\r\n")
    } else {
        literal.to_string()
    };

    let mut out = String::with_capacity(text.len() - range.len() + literal.len());
    out.push_str(&text[..range.start]);
    out.push_str(&literal);
    out.push_str(&text[range.end..]);
    Ok(out)
}

/// A line without its `\n` or `\r\n` terminator
fn line_content(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Apply both substitutions to a template
pub fn apply(text: &str, version_line: &str, literal: &str, config: &TemplateConfig) -> Result<String> {
    let (text, found) = substitute_version(text, version_line, config);
    if !found {
        log::warn!(
            "Template has no line starting with {:?}; version left unchanged",
            config.version_prefix
        );
    }

    substitute_block(&text, literal, config)
}
