use crate::domain::model::ContentRecord;
use crate::utils::error::Result;

const FENCE: &str = "```";

/// Removes markdown code-fence decoration around a model reply.
///
/// An opening fence may carry a language tag (```` ```json ````), with or
/// without a newline after it. Either fence may be missing; text without
/// fences comes back trimmed and otherwise untouched. A fenced bare word
/// such as ```` ```true``` ```` is kept as the payload, not read as a tag.
pub fn strip_code_fence(text: &str) -> &str {
    let mut body = text.trim();

    let opened = body.strip_prefix(FENCE);
    if let Some(rest) = opened {
        body = rest;
    }

    if let Some(rest) = body.strip_suffix(FENCE) {
        body = rest;
    }

    if opened.is_some() {
        let tag_len = body
            .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+')))
            .unwrap_or(body.len());
        if !body[tag_len..].trim().is_empty() {
            body = &body[tag_len..];
        }
    }

    body.trim()
}

/// 去除 code fence 後解析為 [`ContentRecord`]，`title` 與 `summary` 必須為字串
pub fn parse_content_record(text: &str) -> Result<ContentRecord> {
    let cleaned = strip_code_fence(text);
    tracing::debug!("Parsing model reply ({} chars after fence stripping)", cleaned.len());
    let record = serde_json::from_str(cleaned)?;
    Ok(record)
}
