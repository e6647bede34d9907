use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ast::{DefinitionKind, RelationshipDefinition};

/// Cardinality of a relation as seen from the entity that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    OneToOne,
    OneToMany,
    ManyToOne,
}

impl RelationKind {
    /// Kind reported on the parent side of a definition.
    pub fn forward(kind: DefinitionKind) -> Self {
        match kind {
            DefinitionKind::OneToOne => Self::OneToOne,
            DefinitionKind::OneToMany => Self::OneToMany,
        }
    }

    /// Kind reported on the child side of a definition.
    pub fn inverse(kind: DefinitionKind) -> Self {
        match kind {
            DefinitionKind::OneToOne => Self::OneToOne,
            DefinitionKind::OneToMany => Self::ManyToOne,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneToOne => "one_to_one",
            Self::OneToMany => "one_to_many",
            Self::ManyToOne => "many_to_one",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Parent,
    Child,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub kind: RelationKind,
    #[serde(rename = "as")]
    pub role: Role,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub relations: Vec<Relation>,
    /// Always empty for now; field attachment is not resolved yet.
    pub fields: Vec<String>,
}

impl Entity {
    pub fn new(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            relations: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Relations where this entity is the child, i.e. its parents.
    pub fn parents(&self) -> impl Iterator<Item = &Relation> {
        self.relations.iter().filter(|r| r.role == Role::Child)
    }

    /// Relations where this entity is the parent, i.e. its children.
    pub fn children(&self) -> impl Iterator<Item = &Relation> {
        self.relations.iter().filter(|r| r.role == Role::Parent)
    }
}

/// Entities in first-seen order, each carrying its relations.
#[derive(Debug, Clone, Default)]
pub struct EntityGraph {
    entities: Vec<Entity>,
    index: HashMap<String, usize>,
}

impl EntityGraph {
    pub fn from_definitions(definitions: &[RelationshipDefinition]) -> Self {
        let mut graph = Self::default();

        for def in definitions {
            let parent = graph.ensure_entity(&def.parent);
            let child = graph.ensure_entity(&def.child);

            tracing::trace!(
                parent = %def.parent,
                child = %def.child,
                kind = def.kind.as_str(),
                "attaching relation"
            );

            graph.entities[parent].relations.push(Relation {
                entity_type: def.child.clone(),
                kind: RelationKind::forward(def.kind),
                role: Role::Parent,
                from: def.from.clone(),
                to: def.to.clone(),
            });

            // Child-side view starts at the child column.
            graph.entities[child].relations.push(Relation {
                entity_type: def.parent.clone(),
                kind: RelationKind::inverse(def.kind),
                role: Role::Child,
                from: def.to.clone(),
                to: def.from.clone(),
            });
        }

        tracing::debug!(
            definitions = definitions.len(),
            entities = graph.entities.len(),
            "resolved entity relationships"
        );

        graph
    }

    fn ensure_entity(&mut self, entity_type: &str) -> usize {
        if let Some(&idx) = self.index.get(entity_type) {
            return idx;
        }
        let idx = self.entities.len();
        self.entities.push(Entity::new(entity_type));
        self.index.insert(entity_type.to_string(), idx);
        idx
    }

    pub fn get(&self, entity_type: &str) -> Option<&Entity> {
        self.index.get(entity_type).map(|&idx| &self.entities[idx])
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn into_entities(self) -> Vec<Entity> {
        self.entities
    }
}

/// Resolve a flat definition list into per-entity relations.
///
/// Absent or empty input yields no entities.
pub fn resolve(definitions: Option<&[RelationshipDefinition]>) -> Vec<Entity> {
    match definitions {
        Some(defs) if !defs.is_empty() => EntityGraph::from_definitions(defs).into_entities(),
        _ => Vec::new(),
    }
}
