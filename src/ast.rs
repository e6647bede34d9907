use serde::{Deserialize, Serialize};

/// A single parent/child link as declared by the form definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipDefinition {
    pub parent: String,
    pub child: String,
    /// Descriptive label only, never carried into resolved relations.
    #[serde(default)]
    pub field: String,
    pub kind: DefinitionKind,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionKind {
    OneToOne,
    OneToMany,
}

impl DefinitionKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "one_to_one" => Some(Self::OneToOne),
            "one_to_many" => Some(Self::OneToMany),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneToOne => "one_to_one",
            Self::OneToMany => "one_to_many",
        }
    }
}

impl RelationshipDefinition {
    pub fn new(
        parent: impl Into<String>,
        child: impl Into<String>,
        kind: DefinitionKind,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            parent: parent.into(),
            child: child.into(),
            field: String::new(),
            kind,
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    pub fn is_self_referential(&self) -> bool {
        self.parent == self.child
    }
}
