//! Extraction of the outcome marker from a raw response body.
//!
//! The legacy endpoints answer with a small HTML page whose only useful
//! content is an `alert('…')` script fragment. Extraction sits behind a trait
//! so tests and deployments with a different page shape can swap it out.

/// A collaborator that pulls the short outcome marker out of a raw response
/// body.
pub trait ResponseParser: Send + Sync {
    /// Extract the marker, or `None` when the body carries nothing usable.
    fn extract(&self, body: &str) -> Option<String>;
}

/// Default parser for the `alert('…')` pages the check-in endpoints return.
///
/// Falls back to the trimmed body when no alert fragment is present, which
/// covers endpoints (and tests) that respond with the bare marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertParser;

impl ResponseParser for AlertParser {
    fn extract(&self, body: &str) -> Option<String> {
        if let Some(msg) = extract_alert(body) {
            return Some(msg);
        }
        let trimmed = body.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

fn extract_alert(body: &str) -> Option<String> {
    let rest = &body[body.find("alert(")? + "alert(".len()..];
    let quote = rest.chars().next()?;
    if quote != '\'' && quote != '"' {
        return None;
    }
    let inner = &rest[1..];
    let end = inner.find(quote)?;
    Some(inner[..end].to_string())
}
