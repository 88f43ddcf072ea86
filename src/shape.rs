//! Explicit data model for record shapes.
//!
//! A [`RecordShape`] describes an object structurally: named fields with
//! independent `optional` and `readonly` modifiers, plus an optional index
//! signature (a catch-all entry keyed by a pattern) and an optional call
//! signature (the object is also invocable). A [`Shape`] is either one record
//! or a union of alternatives. Transformations over these values live in
//! [`crate::readonly`].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// The shape of values stored at a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueShape {
    Boolean,
    Number,
    String,
    /// Any value; nothing is known about it.
    Unknown,
    /// A reference to a shape known by name elsewhere.
    Named(String),
    /// A homogeneous list of values.
    List(Box<ValueShape>),
}

/// One named member of a record shape.
///
/// `optional` (the field may be absent) and `readonly` (the field may not be
/// reassigned once set) are independent modifiers; neither implies the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub value: ValueShape,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub readonly: bool,
}

impl Field {
    /// A required, mutable field of the given value shape.
    pub fn of(value: ValueShape) -> Self {
        Field {
            value,
            optional: false,
            readonly: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }
}

/// A catch-all entry governing every key not listed as a named field.
///
/// The signature is addressed in selections by its `key_pattern` (for example
/// `"[string]"`); it carries a `readonly` modifier like any named field but no
/// `optional` modifier, since it never names a concrete key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSignature {
    pub key_pattern: String,
    pub value: ValueShape,
    #[serde(default)]
    pub readonly: bool,
}

/// A call signature: the record additionally behaves as an invocable
/// operation. Orthogonal to the fields; carries no field modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSignature {
    pub params: Vec<ValueShape>,
    /// Variadic tail accepted after the positional parameters.
    #[serde(default)]
    pub rest: Option<ValueShape>,
    pub returns: ValueShape,
}

/// A structural description of an object's members.
///
/// Field names are unique; `BTreeMap` keeps comparisons and serialized output
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordShape {
    #[serde(default)]
    pub fields: BTreeMap<String, Field>,
    #[serde(default)]
    pub index: Option<IndexSignature>,
    #[serde(default)]
    pub call: Option<CallSignature>,
}

impl RecordShape {
    pub fn new() -> Self {
        RecordShape::default()
    }

    /// Add or replace a named field. Chainable for literal construction.
    pub fn with(mut self, name: impl Into<String>, field: Field) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    pub fn with_index(mut self, index: IndexSignature) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_call(mut self, call: CallSignature) -> Self {
        self.call = Some(call);
        self
    }
}

/// One record shape, or a set of alternatives a value may match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Record(RecordShape),
    Union(Vec<RecordShape>),
}

/// The set of field names targeted by a transformation.
///
/// `None` and `All` are sentinels: the empty selection (identity transform)
/// and the universal selection. A finite set is not required to be a subset
/// of any record's actual field names; unmatched names are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeySelector {
    None,
    All,
    Keys(BTreeSet<String>),
}

impl KeySelector {
    /// Build a finite selector from any iterator of names.
    pub fn keys<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        KeySelector::Keys(names.into_iter().map(Into::into).collect())
    }

    pub fn selects(&self, name: &str) -> bool {
        match self {
            KeySelector::None => false,
            KeySelector::All => true,
            KeySelector::Keys(keys) => keys.contains(name),
        }
    }
}
