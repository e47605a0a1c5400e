use tracing::info;

pub const DEFAULT_NAME: &str = "World";

/// Builds a greeting, falling back to [`DEFAULT_NAME`] for blank names.
pub fn greet(name: Option<&str>) -> String {
    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_NAME);

    let message = format!("Hello, {}!", name);
    info!("Generated greeting: {}", message);
    message
}
