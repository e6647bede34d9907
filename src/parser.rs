use crate::ast::RelationshipDefinition;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid relationship definitions: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a JSON array of relationship definitions.
///
/// Blank input and a bare `null` are treated as an empty list.
pub fn parse_definitions(input: &str) -> Result<Vec<RelationshipDefinition>, ParseError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let definitions: Option<Vec<RelationshipDefinition>> = serde_json::from_str(input)?;
    let definitions = definitions.unwrap_or_default();

    tracing::debug!(count = definitions.len(), "parsed relationship definitions");
    Ok(definitions)
}
