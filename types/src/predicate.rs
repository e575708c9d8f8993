use crate::metadata::MetadataKey;
use crate::metadata::MetadataValue;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// All the operations that can be conducted against a metadata value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Predicate {
    Equals {
        key: MetadataKey,
        value: MetadataValue,
    },
    NotEquals {
        key: MetadataKey,
        value: MetadataValue,
    },
    In {
        key: MetadataKey,
        value: HashSet<MetadataValue>,
    },
    NotIn {
        key: MetadataKey,
        value: HashSet<MetadataValue>,
    },
}

/// All possible representations of a predicate condition
/// We can only have a simple And or Or and we can combine those in any fashion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PredicateCondition {
    And(Box<PredicateCondition>, Box<PredicateCondition>),
    Or(Box<PredicateCondition>, Box<PredicateCondition>),
    Value(Predicate),
}

impl PredicateCondition {
    pub fn and(self, other: PredicateCondition) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: PredicateCondition) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }
}
