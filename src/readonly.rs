//! Mark selected fields of a shape as readonly.
//!
//! The transform is a pure, total structural mapping. It never touches field
//! names, value shapes, or the `optional` modifier; only the `readonly`
//! modifier of selected entries changes. Over a union it applies to each
//! alternative independently, and a call signature passes through untouched.
//!
//! ```
//! use tsconfig_model::{set_readonly, Field, KeySelector, RecordShape, Shape, ValueShape};
//!
//! let shape = Shape::Record(
//!     RecordShape::new()
//!         .with("a", Field::of(ValueShape::Number))
//!         .with("b", Field::of(ValueShape::String)),
//! );
//! let out = set_readonly(&shape, &KeySelector::keys(["b"]));
//! let Shape::Record(record) = out else { unreachable!() };
//! assert!(!record.fields["a"].readonly);
//! assert!(record.fields["b"].readonly);
//! ```

use crate::shape::{KeySelector, RecordShape, Shape};

/// Return `shape` with the `readonly` modifier forced on every entry whose
/// name the selector matches.
///
/// Idempotent: selecting an already-readonly field is a no-op, and names that
/// match no entry are ignored. `KeySelector::None` is the identity;
/// `KeySelector::All` forces every named field and the index signature.
pub fn set_readonly(shape: &Shape, keys: &KeySelector) -> Shape {
    match shape {
        Shape::Record(record) => Shape::Record(set_record_readonly(record, keys)),
        Shape::Union(alternatives) => Shape::Union(
            alternatives
                .iter()
                .map(|alternative| set_record_readonly(alternative, keys))
                .collect(),
        ),
    }
}

/// The per-record worker behind [`set_readonly`].
///
/// The index signature participates under its `key_pattern`, by the same rule
/// as named fields. The call signature carries no modifiers and is cloned
/// verbatim, so a bare callable comes back unchanged for any selector.
pub fn set_record_readonly(record: &RecordShape, keys: &KeySelector) -> RecordShape {
    if matches!(keys, KeySelector::None) {
        return record.clone();
    }

    let fields = record
        .fields
        .iter()
        .map(|(name, field)| {
            let mut field = field.clone();
            if keys.selects(name) {
                field.readonly = true;
            }
            (name.clone(), field)
        })
        .collect();

    let index = record.index.as_ref().map(|signature| {
        let mut signature = signature.clone();
        if keys.selects(&signature.key_pattern) {
            signature.readonly = true;
        }
        signature
    });

    RecordShape {
        fields,
        index,
        call: record.call.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{CallSignature, Field, IndexSignature, ValueShape};

    fn abc() -> RecordShape {
        RecordShape::new()
            .with("a", Field::of(ValueShape::Number))
            .with("b", Field::of(ValueShape::String).readonly())
            .with("c", Field::of(ValueShape::Boolean))
    }

    #[test]
    fn marks_selected_fields_only() {
        let out = set_record_readonly(&abc(), &KeySelector::keys(["b", "c"]));
        assert!(!out.fields["a"].readonly);
        assert!(out.fields["b"].readonly);
        assert!(out.fields["c"].readonly);
    }

    #[test]
    fn none_selector_is_identity() {
        let record = abc();
        assert_eq!(set_record_readonly(&record, &KeySelector::None), record);
    }

    #[test]
    fn all_selector_covers_index_signature() {
        let record = abc().with_index(IndexSignature {
            key_pattern: "[string]".to_string(),
            value: ValueShape::Unknown,
            readonly: false,
        });
        let out = set_record_readonly(&record, &KeySelector::All);
        assert!(out.fields.values().all(|field| field.readonly));
        assert!(out.index.expect("index signature kept").readonly);
    }

    #[test]
    fn unknown_names_are_ignored() {
        let record = abc();
        let out = set_record_readonly(&record, &KeySelector::keys(["nope"]));
        assert_eq!(out, record);
    }

    #[test]
    fn bare_callable_is_unchanged() {
        let record = RecordShape::new().with_call(CallSignature {
            params: vec![ValueShape::String],
            rest: None,
            returns: ValueShape::Number,
        });
        let out = set_record_readonly(&record, &KeySelector::All);
        assert_eq!(out, record);
    }

    #[test]
    fn union_alternatives_transform_independently() {
        let shape = Shape::Union(vec![
            RecordShape::new().with("a", Field::of(ValueShape::Number)),
            RecordShape::new().with("b", Field::of(ValueShape::String)),
        ]);
        let out = set_readonly(&shape, &KeySelector::keys(["a"]));
        let Shape::Union(alternatives) = out else {
            panic!("union stayed a union");
        };
        assert_eq!(alternatives.len(), 2);
        assert!(alternatives[0].fields["a"].readonly);
        assert!(!alternatives[1].fields["b"].readonly);
    }
}
