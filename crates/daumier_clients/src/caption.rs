//! Defensive parser for the generative model's caption output.
//!
//! The input here is unconstrained natural-language output from a model
//! that was merely *instructed*, not *guaranteed*, to emit clean JSON.
//! Every failure mode collapses to a single uniform "no caption" result
//! rather than a zoo of parse-error types: downstream only needs to know
//! whether it can proceed. The specific reason is logged for diagnostics.

use daumier_core::CaptionDraft;
use serde_json::Value;
use tracing::debug;

/// Extracts a structured caption from the model's raw text output.
///
/// Markdown code fences (` ```json ` or plain ` ``` `) are stripped before
/// parsing. The remainder must be a JSON object whose `image`, `topText`
/// and `bottomText` fields are all present and truthy; `image` must coerce
/// to a positive integer. Anything else yields `None` — never an error,
/// since malformed model output is expected noise, not a program fault.
///
/// # Examples
///
/// ```
/// use daumier_clients::parse_caption;
///
/// let raw = "```json\n{\"image\": 101, \"topText\": \"A\", \"bottomText\": \"B\"}\n```";
/// let draft = parse_caption(raw).unwrap();
/// assert_eq!(draft.template_id, 101);
///
/// assert!(parse_caption("sorry, I can't do that").is_none());
/// ```
pub fn parse_caption(raw: &str) -> Option<CaptionDraft> {
    let stripped = strip_fences(raw);

    let value: Value = match serde_json::from_str(stripped) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "Model output was not JSON");
            return None;
        }
    };

    let object = match value.as_object() {
        Some(object) => object,
        None => {
            debug!("Model output parsed but was not a JSON object");
            return None;
        }
    };

    let template_id = match object.get("image").and_then(coerce_template_id) {
        Some(id) => id,
        None => {
            debug!("Model output missing a usable image field");
            return None;
        }
    };

    let top_text = coerce_text(object.get("topText")?)?;
    let bottom_text = coerce_text(object.get("bottomText")?)?;

    Some(CaptionDraft {
        template_id,
        top_text,
        bottom_text,
    })
}

/// Removes a leading ```` ```json ````/```` ``` ```` fence and a trailing
/// ```` ``` ```` fence, plus surrounding whitespace.
fn strip_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Coerces the `image` field to a positive template id.
///
/// The model is asked for a number but sometimes quotes it; accept a JSON
/// number or a numeric string. Zero is falsy and treated as missing.
fn coerce_template_id(value: &Value) -> Option<u64> {
    let id = match value {
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    (id > 0).then_some(id)
}

/// Coerces a text field to a non-empty string.
///
/// Empty strings and zero are falsy, so both count as missing.
fn coerce_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.as_f64() != Some(0.0) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_json() {
        let draft =
            parse_caption(r#"{"image": 101, "topText": "A", "bottomText": "B"}"#).unwrap();
        assert_eq!(draft.template_id, 101);
        assert_eq!(draft.top_text, "A");
        assert_eq!(draft.bottom_text, "B");
    }

    #[test]
    fn strips_json_fences_before_parsing() {
        let raw = "```json\n{\"image\": 87, \"topText\": \"top\", \"bottomText\": \"bottom\"}\n```";
        let draft = parse_caption(raw).unwrap();
        assert_eq!(draft.template_id, 87);
    }

    #[test]
    fn strips_plain_fences() {
        let raw = "```\n{\"image\": 5, \"topText\": \"t\", \"bottomText\": \"b\"}\n```";
        assert!(parse_caption(raw).is_some());
    }

    #[test]
    fn accepts_quoted_template_id() {
        let raw = r#"{"image": "181913649", "topText": "t", "bottomText": "b"}"#;
        assert_eq!(parse_caption(raw).unwrap().template_id, 181913649);
    }

    #[test]
    fn missing_image_yields_none() {
        assert!(parse_caption(r#"{"topText": "A", "bottomText": "B"}"#).is_none());
    }

    #[test]
    fn zero_image_is_falsy() {
        assert!(parse_caption(r#"{"image": 0, "topText": "A", "bottomText": "B"}"#).is_none());
    }

    #[test]
    fn empty_text_fields_yield_none() {
        assert!(parse_caption(r#"{"image": 1, "topText": "", "bottomText": "B"}"#).is_none());
        assert!(parse_caption(r#"{"image": 1, "topText": "A", "bottomText": ""}"#).is_none());
    }

    #[test]
    fn non_numeric_image_yields_none() {
        assert!(
            parse_caption(r#"{"image": "drake", "topText": "A", "bottomText": "B"}"#).is_none()
        );
        assert!(
            parse_caption(r#"{"image": [1], "topText": "A", "bottomText": "B"}"#).is_none()
        );
    }

    #[test]
    fn garbage_yields_none_without_panicking() {
        assert!(parse_caption("I'm sorry, here is a caption idea instead").is_none());
        assert!(parse_caption("").is_none());
        assert!(parse_caption("```json\nnot json at all\n```").is_none());
        assert!(parse_caption("[1, 2, 3]").is_none());
    }
}
