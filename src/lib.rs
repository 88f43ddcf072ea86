//! Data model for TypeScript's `tsconfig.json`, plus a small structural
//! shape model with a readonly-marking transform.
//!
//! The two halves are independent. [`tsconfig`] is a descriptive serde schema
//! for the configuration file, with a JSONC-tolerant [`loader`]. [`shape`]
//! models record shapes as explicit data (fields with `optional` and
//! `readonly` modifiers, index and call signatures, unions) and [`readonly`]
//! provides the one transformation over them: force the `readonly` modifier
//! on a selected set of fields while leaving everything else untouched.

pub mod loader;
pub mod readonly;
pub mod shape;
pub mod tsconfig;

pub use loader::{parse_tsconfig, read_tsconfig};
pub use readonly::{set_readonly, set_record_readonly};
pub use shape::{
    CallSignature, Field, IndexSignature, KeySelector, RecordShape, Shape, ValueShape,
};
pub use tsconfig::{CompilerOptions, TsConfig};
