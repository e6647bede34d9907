//! Serializer for resolved entities.

use crate::ir::{Entity, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Pretty,
    Text,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            "text" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Serialize resolved entities in the requested format.
pub fn serialize(entities: &[Entity], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string(entities),
        OutputFormat::Pretty => serde_json::to_string_pretty(entities),
        OutputFormat::Text => Ok(serialize_text(entities)),
    }
}

fn serialize_text(entities: &[Entity]) -> String {
    let mut output = String::new();

    for (i, entity) in entities.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        serialize_entity(&mut output, entity);
    }

    output
}

fn serialize_entity(output: &mut String, entity: &Entity) {
    output.push_str(&entity.entity_type);
    output.push('\n');

    for rel in &entity.relations {
        let arrow = match rel.role {
            Role::Parent => "->",
            Role::Child => "<-",
        };
        output.push_str(&format!(
            "  {} {} {} ({} -> {})\n",
            arrow,
            rel.entity_type,
            rel.kind.as_str(),
            rel.from,
            rel.to
        ));
    }
}
