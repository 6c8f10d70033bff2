//! Pure helpers: error body parsing, resource names (no HTTP, no status logic).

const MAX_EXCERPT_CHARS: usize = 200;

/// Flatten a tracker error body into one line.
///
/// Expected format: `{"errorMessages": ["..."], "errors": {"field": "..."}}`.
/// Non-JSON bodies are returned as a short excerpt.
pub(crate) fn parse_error_body(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return String::new();
    }

    let Ok(json) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.chars().take(MAX_EXCERPT_CHARS).collect();
    };

    let mut parts: Vec<String> = json
        .get("errorMessages")
        .and_then(|v| v.as_array())
        .map(|msgs| {
            msgs.iter()
                .filter_map(|m| m.as_str())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    if let Some(errors) = json.get("errors").and_then(|v| v.as_object()) {
        for (field, msg) in errors {
            let msg = msg.as_str().map(String::from).unwrap_or_else(|| msg.to_string());
            parts.push(format!("{}: {}", field, msg));
        }
    }

    if parts.is_empty() {
        body.chars().take(MAX_EXCERPT_CHARS).collect()
    } else {
        parts.join("; ")
    }
}

/// Resource path relative to the API root, for error messages.
///
/// `https://host/rest/api/2/issue/PROJ-1?x=y` → `issue/PROJ-1`
pub(crate) fn resource_from_url(url: &str) -> String {
    let path = url.split('?').next().unwrap_or(url);
    match path.split_once("/rest/api/2/") {
        Some((_, rest)) => rest.to_string(),
        None => path.to_string(),
    }
}
