use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of ontology entity a mapping or count refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Class,
    Individual,
    DataProperty,
    ObjectProperty,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Class => "class",
            Self::Individual => "individual",
            Self::DataProperty => "data_property",
            Self::ObjectProperty => "object_property",
        };
        f.write_str(name)
    }
}
