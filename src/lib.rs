pub mod ast;
pub mod ir;
pub mod parser;
pub mod serializer;

use wasm_bindgen::prelude::*;

use ir::resolve;
use parser::{ParseError, parse_definitions};
use serializer::{OutputFormat, serialize};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Failed to encode entities: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Resolve a JSON definition list and serialize the resulting entities.
pub fn resolve_json(input: &str, format: OutputFormat) -> Result<String, Error> {
    let definitions = parse_definitions(input)?;
    let entities = resolve(Some(definitions.as_slice()));
    Ok(serialize(&entities, format)?)
}

/// Resolve relationship definitions (JSON) to per-entity relations
#[wasm_bindgen(js_name = "resolveEntities")]
pub fn resolve_entities(definitions: &str, format: Option<String>) -> Result<String, String> {
    let format = format
        .as_deref()
        .and_then(OutputFormat::from_str)
        .unwrap_or_default();

    resolve_json(definitions, format).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_json_null() {
        assert_eq!(resolve_json("null", OutputFormat::Json).unwrap(), "[]");
    }

    #[test]
    fn test_resolve_entities_default_format() {
        let input = r#"[{"parent": "a", "child": "b", "kind": "one_to_one", "from": "a.id", "to": "b.a_id"}]"#;
        let out = resolve_entities(input, Some("bogus".to_string())).unwrap();
        assert!(out.starts_with(r#"[{"type":"a","#));
    }

    #[test]
    fn test_resolve_entities_error() {
        let err = resolve_entities("[{}]", None).unwrap_err();
        assert!(err.contains("Invalid relationship definitions"));
    }
}
