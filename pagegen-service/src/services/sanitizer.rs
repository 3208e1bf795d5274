//! Best-effort cleanup of model output into a bare HTML document.
//!
//! This is a text heuristic, not an HTML parser: it removes markdown fences and
//! drops any prose before the first document marker. Output that has no marker
//! is passed through trimmed, and nothing is validated.

const HTML_FENCE: &str = "```html";
const FENCE: &str = "```";
const DOCTYPE_MARKER: &str = "<!DOCTYPE html>";
const ROOT_MARKER: &str = "<html";

/// Strip fences and leading chatter from generated text. Idempotent.
pub fn sanitize_html(raw: &str) -> String {
    let unfenced = raw.trim().replace(HTML_FENCE, "").replace(FENCE, "");
    // Fence removal can expose whitespace that surrounded the fences.
    let text = unfenced.trim();

    let start = text
        .find(DOCTYPE_MARKER)
        .or_else(|| text.find(ROOT_MARKER))
        .unwrap_or(0);

    text[start..].to_string()
}
