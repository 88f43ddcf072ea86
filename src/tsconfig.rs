//! Schema types for TypeScript's `tsconfig.json`.
//!
//! A descriptive mapping from configuration keys to their permitted value
//! shapes. Deserializing a document against these types is the validation;
//! there is no behavior here beyond (de)serialization. Unknown keys are
//! tolerated so newer compiler releases do not break older consumers.
//!
//! Enumerated option values accept the same casing alternatives the compiler
//! accepts (for example `"CommonJS"` and `"commonjs"`); serialization always
//! emits the canonical spelling.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root of a `tsconfig.json` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsConfig {
    /// Instructs the compiler how to compile `.ts` files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compiler_options: Option<CompilerOptions>,
    /// Instructs the compiler how to watch files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_options: Option<WatchOptions>,
    /// Auto type (`.d.ts`) acquisition options for this project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_acquisition: Option<TypeAcquisition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compile_on_save: Option<bool>,
    /// Base configuration file(s) to inherit from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<Extends>,
    /// When present, only these files (plus `include` matches) are compiled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    /// Excluded from `include` matches; does not affect `files`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    /// Referenced projects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<ProjectReference>>,
}

/// `extends` accepts a single path or a list of paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Extends {
    Single(String),
    Multiple(Vec<String>),
}

/// One entry of the `references` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReference {
    /// A normalized path on disk.
    pub path: String,
    /// The path as the user originally wrote it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_path: Option<String>,
    /// Prepend the output of this reference. Only valid for `outFile`
    /// compilations; removed in TypeScript 5.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepend: Option<bool>,
    /// True if this reference is intended to form a circularity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circular: Option<bool>,
}

/// A language server plugin entry under `compilerOptions.plugins`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugin {
    pub name: String,
}

/// The `compilerOptions` object. Every member is optional; absent means the
/// compiler default applies. Deprecated members are kept so older configs
/// still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    // Project structure and emit targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incremental: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts_build_info_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<Module>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_resolution: Option<ModuleResolution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_detection: Option<ModuleDetection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_suffixes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lib: Option<Vec<Lib>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_lib: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lib_replacement: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_dirs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_roots: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<Plugin>>,

    // Declaration emit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration_map: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emit_declaration_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isolated_declarations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strip_internal: Option<bool>,

    // Emit behavior.
    #[serde(rename = "emitBOM", skip_serializing_if = "Option::is_none")]
    pub emit_bom: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_emit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_emit_helpers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_emit_on_error: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_helpers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downlevel_iteration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_line: Option<NewLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_comments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_const_enums: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_map: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_source_map: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_sources: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,

    // Strictness family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_strict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_null_checks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_function_types: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_bind_call_apply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_property_initialization: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_builtin_iterator_return: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_implicit_any: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_implicit_this: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_unknown_in_catch_variables: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_optional_property_types: Option<bool>,

    // Linting-adjacent checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_unused_locals: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_unused_parameters: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_implicit_returns: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_implicit_override: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_fallthrough_cases_in_switch: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_unchecked_indexed_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_unchecked_side_effect_imports: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_property_access_from_index_signature: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_unused_labels: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_unreachable_code: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_consistent_casing_in_file_names: Option<bool>,

    // JavaScript interop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_js: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_js: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_node_module_js_depth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub es_module_interop: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_synthetic_default_imports: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_umd_global_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isolated_modules: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbatim_module_syntax: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub erasable_syntax_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_json_module: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_importing_ts_extensions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_arbitrary_extensions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_package_json_exports: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_package_json_imports: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_conditions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_resolve: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_symlinks: Option<bool>,

    // JSX.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsx: Option<Jsx>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub react_namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsx_factory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsx_fragment_factory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsx_import_source: Option<String>,

    // Decorators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental_decorators: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emit_decorator_metadata: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_define_for_class_fields: Option<bool>,

    // Type checking scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_lib_check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_check: Option<bool>,

    // Diagnostics and output reporting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_diagnostics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_error_truncation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_files: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_files_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_emitted_files: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explain_files: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_resolution: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_cpu_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_trace: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_size_limit: Option<bool>,

    // Project references behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_referenced_project_load: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_source_of_project_reference_redirect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_solution_searching: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assume_changes_only_affect_direct_dependencies: Option<bool>,

    // Watch mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_watch_output: Option<bool>,
    /// Deprecated; use the top-level `watchOptions` instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch: Option<bool>,
    /// Deprecated; use `watchOptions.fallbackPolling` instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_polling: Option<FallbackPolling>,
    /// Deprecated; use `watchOptions.watchDirectory` instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_directory: Option<WatchDirectory>,
    /// Deprecated; use `watchOptions.watchFile` instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_file: Option<WatchFile>,

    // Deprecated options kept so older configs still deserialize.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imports_not_used_as_values: Option<ImportsNotUsedAsValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_value_imports: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyof_strings_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_implicit_use_strict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_strict_generic_checks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_default_lib_check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_excess_property_errors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_implicit_any_index_errors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_deprecations: Option<IgnoreDeprecations>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Jsx {
    #[serde(rename = "preserve")]
    Preserve,
    #[serde(rename = "react")]
    React,
    #[serde(rename = "react-jsx")]
    ReactJsx,
    #[serde(rename = "react-jsxdev")]
    ReactJsxDev,
    #[serde(rename = "react-native")]
    ReactNative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Module {
    #[serde(rename = "CommonJS", alias = "commonjs")]
    CommonJs,
    #[serde(rename = "AMD", alias = "amd")]
    Amd,
    #[serde(rename = "System", alias = "system")]
    System,
    #[serde(rename = "UMD", alias = "umd")]
    Umd,
    #[serde(rename = "ES6", alias = "es6")]
    Es6,
    #[serde(rename = "ES2015", alias = "es2015")]
    Es2015,
    #[serde(rename = "ES2020", alias = "es2020")]
    Es2020,
    #[serde(rename = "ES2022", alias = "es2022")]
    Es2022,
    #[serde(rename = "ESNext", alias = "esnext")]
    EsNext,
    #[serde(rename = "Node16", alias = "node16")]
    Node16,
    #[serde(rename = "Node18", alias = "node18")]
    Node18,
    #[serde(rename = "Node20", alias = "node20")]
    Node20,
    #[serde(rename = "NodeNext", alias = "nodenext")]
    NodeNext,
    #[serde(rename = "Preserve", alias = "preserve")]
    Preserve,
    #[serde(rename = "None", alias = "none")]
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModuleResolution {
    #[serde(rename = "classic", alias = "Classic")]
    Classic,
    #[serde(rename = "node", alias = "Node")]
    Node,
    #[serde(rename = "node10", alias = "Node10")]
    Node10,
    #[serde(rename = "node16", alias = "Node16")]
    Node16,
    #[serde(rename = "nodenext", alias = "NodeNext")]
    NodeNext,
    #[serde(rename = "bundler", alias = "Bundler")]
    Bundler,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleDetection {
    Auto,
    Legacy,
    Force,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    #[serde(rename = "ES3", alias = "es3")]
    Es3,
    #[serde(rename = "ES5", alias = "es5")]
    Es5,
    #[serde(rename = "ES6", alias = "es6")]
    Es6,
    #[serde(rename = "ES2015", alias = "es2015")]
    Es2015,
    #[serde(rename = "ES2016", alias = "es2016")]
    Es2016,
    #[serde(rename = "ES2017", alias = "es2017")]
    Es2017,
    #[serde(rename = "ES2018", alias = "es2018")]
    Es2018,
    #[serde(rename = "ES2019", alias = "es2019")]
    Es2019,
    #[serde(rename = "ES2020", alias = "es2020")]
    Es2020,
    #[serde(rename = "ES2021", alias = "es2021")]
    Es2021,
    #[serde(rename = "ES2022", alias = "es2022")]
    Es2022,
    #[serde(rename = "ES2023", alias = "es2023")]
    Es2023,
    #[serde(rename = "ES2024", alias = "es2024")]
    Es2024,
    #[serde(rename = "ESNext", alias = "esnext")]
    EsNext,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewLine {
    #[serde(rename = "CRLF", alias = "crlf")]
    Crlf,
    #[serde(rename = "LF", alias = "lf")]
    Lf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportsNotUsedAsValues {
    Remove,
    Preserve,
    Error,
}

/// The only accepted value is `"5.0"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreDeprecations {
    #[serde(rename = "5.0")]
    V5_0,
}

/// Deprecated `compilerOptions.fallbackPolling` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FallbackPolling {
    FixedPollingInterval,
    PriorityPollingInterval,
    DynamicPriorityPolling,
    FixedInterval,
    PriorityInterval,
    DynamicPriority,
    FixedChunkSize,
}

/// Deprecated `compilerOptions.watchDirectory` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WatchDirectory {
    UseFsEvents,
    FixedPollingInterval,
    DynamicPriorityPolling,
    FixedChunkSizePolling,
}

/// Deprecated `compilerOptions.watchFile` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WatchFile {
    FixedPollingInterval,
    PriorityPollingInterval,
    DynamicPriorityPolling,
    UseFsEvents,
    UseFsEventsOnParentDirectory,
    FixedChunkSizePolling,
}

/// The top-level `watchOptions` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_file: Option<WatchFileKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_directory: Option<WatchDirectoryKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_polling: Option<PollingWatchKind>,
    /// Synchronous directory watcher updates for platforms without native
    /// recursive watching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronous_watch_directory: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_directories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_files: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WatchFileKind {
    #[serde(rename = "FixedPollingInterval", alias = "fixedpollinginterval")]
    FixedPollingInterval,
    #[serde(rename = "PriorityPollingInterval", alias = "prioritypollinginterval")]
    PriorityPollingInterval,
    #[serde(rename = "DynamicPriorityPolling", alias = "dynamicprioritypolling")]
    DynamicPriorityPolling,
    #[serde(rename = "FixedChunkSizePolling", alias = "fixedchunksizepolling")]
    FixedChunkSizePolling,
    #[serde(rename = "UseFsEvents", alias = "usefsevents")]
    UseFsEvents,
    #[serde(
        rename = "UseFsEventsOnParentDirectory",
        alias = "usefseventsonparentdirectory"
    )]
    UseFsEventsOnParentDirectory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WatchDirectoryKind {
    #[serde(rename = "UseFsEvents", alias = "usefsevents")]
    UseFsEvents,
    #[serde(rename = "FixedPollingInterval", alias = "fixedpollinginterval")]
    FixedPollingInterval,
    #[serde(rename = "DynamicPriorityPolling", alias = "dynamicprioritypolling")]
    DynamicPriorityPolling,
    #[serde(rename = "FixedChunkSizePolling", alias = "fixedchunksizepolling")]
    FixedChunkSizePolling,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PollingWatchKind {
    #[serde(rename = "FixedInterval", alias = "fixedinterval")]
    FixedInterval,
    #[serde(rename = "PriorityInterval", alias = "priorityinterval")]
    PriorityInterval,
    #[serde(rename = "DynamicPriority", alias = "dynamicpriority")]
    DynamicPriority,
    #[serde(rename = "FixedChunkSize", alias = "fixedchunksize")]
    FixedChunkSize,
}

/// The top-level `typeAcquisition` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAcquisition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    /// Type declarations to include, for example `["jquery", "lodash"]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_filename_based_type_acquisition: Option<bool>,
}

/// Library files under `compilerOptions.lib`. Canonical spellings serialize;
/// the compiler's lowercase alternatives deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lib {
    #[serde(rename = "ES5", alias = "es5")]
    Es5,
    #[serde(rename = "ES6", alias = "es6")]
    Es6,
    #[serde(rename = "ES7", alias = "es7")]
    Es7,
    #[serde(rename = "ES2015", alias = "es2015")]
    Es2015,
    #[serde(rename = "ES2015.Collection", alias = "es2015.collection")]
    Es2015Collection,
    #[serde(rename = "ES2015.Core", alias = "es2015.core")]
    Es2015Core,
    #[serde(rename = "ES2015.Generator", alias = "es2015.generator")]
    Es2015Generator,
    #[serde(rename = "ES2015.Iterable", alias = "es2015.iterable")]
    Es2015Iterable,
    #[serde(rename = "ES2015.Promise", alias = "es2015.promise")]
    Es2015Promise,
    #[serde(rename = "ES2015.Proxy", alias = "es2015.proxy")]
    Es2015Proxy,
    #[serde(rename = "ES2015.Reflect", alias = "es2015.reflect")]
    Es2015Reflect,
    #[serde(rename = "ES2015.Symbol.WellKnown", alias = "es2015.symbol.wellknown")]
    Es2015SymbolWellKnown,
    #[serde(rename = "ES2015.Symbol", alias = "es2015.symbol")]
    Es2015Symbol,
    #[serde(rename = "ES2016", alias = "es2016")]
    Es2016,
    #[serde(rename = "ES2016.Array.Include", alias = "es2016.array.include")]
    Es2016ArrayInclude,
    #[serde(rename = "ES2017", alias = "es2017")]
    Es2017,
    #[serde(rename = "ES2017.ArrayBuffer", alias = "es2017.arraybuffer")]
    Es2017ArrayBuffer,
    #[serde(rename = "ES2017.Date", alias = "es2017.date")]
    Es2017Date,
    #[serde(rename = "ES2017.Intl", alias = "es2017.intl")]
    Es2017Intl,
    #[serde(rename = "ES2017.Object", alias = "es2017.object")]
    Es2017Object,
    #[serde(rename = "ES2017.SharedMemory", alias = "es2017.sharedmemory")]
    Es2017SharedMemory,
    #[serde(rename = "ES2017.String", alias = "es2017.string")]
    Es2017String,
    #[serde(rename = "ES2017.TypedArrays", alias = "es2017.typedarrays")]
    Es2017TypedArrays,
    #[serde(rename = "ES2018", alias = "es2018")]
    Es2018,
    #[serde(rename = "ES2018.AsyncGenerator", alias = "es2018.asyncgenerator")]
    Es2018AsyncGenerator,
    #[serde(rename = "ES2018.AsyncIterable", alias = "es2018.asynciterable")]
    Es2018AsyncIterable,
    #[serde(rename = "ES2018.Intl", alias = "es2018.intl")]
    Es2018Intl,
    #[serde(rename = "ES2018.Promise", alias = "es2018.promise")]
    Es2018Promise,
    #[serde(rename = "ES2018.Regexp", alias = "es2018.regexp")]
    Es2018Regexp,
    #[serde(rename = "ES2019", alias = "es2019")]
    Es2019,
    #[serde(rename = "ES2019.Array", alias = "es2019.array")]
    Es2019Array,
    #[serde(rename = "ES2019.Object", alias = "es2019.object")]
    Es2019Object,
    #[serde(rename = "ES2019.String", alias = "es2019.string")]
    Es2019String,
    #[serde(rename = "ES2019.Symbol", alias = "es2019.symbol")]
    Es2019Symbol,
    #[serde(rename = "ES2020", alias = "es2020")]
    Es2020,
    #[serde(rename = "ES2020.BigInt", alias = "es2020.bigint")]
    Es2020BigInt,
    #[serde(rename = "ES2020.Promise", alias = "es2020.promise")]
    Es2020Promise,
    #[serde(rename = "ES2020.String", alias = "es2020.string")]
    Es2020String,
    #[serde(rename = "ES2020.Symbol.WellKnown", alias = "es2020.symbol.wellknown")]
    Es2020SymbolWellKnown,
    #[serde(rename = "ES2020.SharedMemory", alias = "es2020.sharedmemory")]
    Es2020SharedMemory,
    #[serde(rename = "ES2020.Intl", alias = "es2020.intl")]
    Es2020Intl,
    #[serde(rename = "ES2021", alias = "es2021")]
    Es2021,
    #[serde(rename = "ES2021.Intl", alias = "es2021.intl")]
    Es2021Intl,
    #[serde(rename = "ES2021.Promise", alias = "es2021.promise")]
    Es2021Promise,
    #[serde(rename = "ES2021.String", alias = "es2021.string")]
    Es2021String,
    #[serde(rename = "ES2021.WeakRef", alias = "es2021.weakref")]
    Es2021WeakRef,
    #[serde(rename = "ES2022", alias = "es2022")]
    Es2022,
    #[serde(rename = "ES2022.Array", alias = "es2022.array")]
    Es2022Array,
    #[serde(rename = "ES2022.Error", alias = "es2022.error")]
    Es2022Error,
    #[serde(rename = "ES2022.Intl", alias = "es2022.intl")]
    Es2022Intl,
    #[serde(rename = "ES2022.Object", alias = "es2022.object")]
    Es2022Object,
    #[serde(rename = "ES2022.RegExp", alias = "es2022.regexp")]
    Es2022RegExp,
    #[serde(rename = "ES2022.String", alias = "es2022.string")]
    Es2022String,
    #[serde(rename = "ES2023", alias = "es2023")]
    Es2023,
    #[serde(rename = "ES2023.Array", alias = "es2023.array")]
    Es2023Array,
    #[serde(rename = "ES2023.Collection", alias = "es2023.collection")]
    Es2023Collection,
    #[serde(rename = "ES2023.Intl", alias = "es2023.intl")]
    Es2023Intl,
    #[serde(rename = "ES2024", alias = "es2024")]
    Es2024,
    #[serde(rename = "ES2024.ArrayBuffer", alias = "es2024.arraybuffer")]
    Es2024ArrayBuffer,
    #[serde(rename = "ES2024.Collection", alias = "es2024.collection")]
    Es2024Collection,
    #[serde(rename = "ES2024.Object", alias = "es2024.object")]
    Es2024Object,
    #[serde(rename = "ES2024.Promise", alias = "es2024.promise")]
    Es2024Promise,
    #[serde(rename = "ES2024.Regexp", alias = "es2024.regexp")]
    Es2024Regexp,
    #[serde(rename = "ES2024.SharedMemory", alias = "es2024.sharedmemory")]
    Es2024SharedMemory,
    #[serde(rename = "ES2024.String", alias = "es2024.string")]
    Es2024String,
    #[serde(rename = "ESNext", alias = "esnext")]
    EsNext,
    #[serde(rename = "ESNext.Array", alias = "esnext.array")]
    EsNextArray,
    #[serde(rename = "ESNext.AsyncIterable", alias = "esnext.asynciterable")]
    EsNextAsyncIterable,
    #[serde(rename = "ESNext.BigInt", alias = "esnext.bigint")]
    EsNextBigInt,
    #[serde(rename = "ESNext.Collection", alias = "esnext.collection")]
    EsNextCollection,
    #[serde(rename = "ESNext.Decorators", alias = "esnext.decorators")]
    EsNextDecorators,
    #[serde(rename = "ESNext.Disposable", alias = "esnext.disposable")]
    EsNextDisposable,
    #[serde(rename = "ESNext.Intl", alias = "esnext.intl")]
    EsNextIntl,
    #[serde(rename = "ESNext.Iterator", alias = "esnext.iterator")]
    EsNextIterator,
    #[serde(rename = "ESNext.Promise", alias = "esnext.promise")]
    EsNextPromise,
    #[serde(rename = "ESNext.String", alias = "esnext.string")]
    EsNextString,
    #[serde(rename = "ESNext.Symbol", alias = "esnext.symbol")]
    EsNextSymbol,
    #[serde(rename = "ESNext.WeakRef", alias = "esnext.weakref")]
    EsNextWeakRef,
    #[serde(rename = "DOM", alias = "dom")]
    Dom,
    #[serde(rename = "DOM.Iterable", alias = "dom.iterable")]
    DomIterable,
    #[serde(rename = "ScriptHost", alias = "scripthost")]
    ScriptHost,
    #[serde(rename = "WebWorker", alias = "webworker")]
    WebWorker,
    #[serde(rename = "WebWorker.AsyncIterable", alias = "webworker.asynciterable")]
    WebWorkerAsyncIterable,
    #[serde(rename = "WebWorker.ImportScripts", alias = "webworker.importscripts")]
    WebWorkerImportScripts,
    #[serde(rename = "WebWorker.Iterable", alias = "webworker.iterable")]
    WebWorkerIterable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_minimal_config() {
        let config: TsConfig = serde_json::from_str(r#"{"compilerOptions": {"strict": true}}"#)
            .expect("parse minimal config");
        let options = config.compiler_options.expect("compilerOptions present");
        assert_eq!(options.strict, Some(true));
        assert_eq!(options.target, None);
    }

    #[test]
    fn accepts_casing_alternatives() {
        let json = r#"{"module": "commonjs", "target": "es2020", "newLine": "lf"}"#;
        let options: CompilerOptions = serde_json::from_str(json).expect("parse options");
        assert_eq!(options.module, Some(Module::CommonJs));
        assert_eq!(options.target, Some(Target::Es2020));
        assert_eq!(options.new_line, Some(NewLine::Lf));
    }

    #[test]
    fn serializes_canonical_spellings_and_skips_absent_members() {
        let options = CompilerOptions {
            module: Some(Module::CommonJs),
            new_line: Some(NewLine::Crlf),
            ..Default::default()
        };
        let json = serde_json::to_string(&options).expect("serialize options");
        assert_eq!(json, r#"{"module":"CommonJS","newLine":"CRLF"}"#);
    }

    #[test]
    fn extends_accepts_single_path_and_list() {
        let single: TsConfig =
            serde_json::from_str(r#"{"extends": "./base.json"}"#).expect("parse single extends");
        assert_eq!(
            single.extends,
            Some(Extends::Single("./base.json".to_string()))
        );

        let multiple: TsConfig = serde_json::from_str(r#"{"extends": ["./a.json", "./b.json"]}"#)
            .expect("parse extends list");
        assert_eq!(
            multiple.extends,
            Some(Extends::Multiple(vec![
                "./a.json".to_string(),
                "./b.json".to_string()
            ]))
        );
    }

    #[test]
    fn ignores_unknown_members() {
        let config: TsConfig =
            serde_json::from_str(r#"{"compilerOptions": {"someFutureFlag": 3}, "ts-node": {}}"#)
                .expect("parse config with unknown members");
        assert_eq!(config.compiler_options, Some(CompilerOptions::default()));
    }

    #[test]
    fn rejects_unknown_enum_values() {
        let result: Result<CompilerOptions, _> = serde_json::from_str(r#"{"module": "es2019"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn lib_entries_keep_dotted_names() {
        let options: CompilerOptions =
            serde_json::from_str(r#"{"lib": ["ES2015.Symbol.WellKnown", "dom.iterable"]}"#)
                .expect("parse lib entries");
        assert_eq!(
            options.lib,
            Some(vec![Lib::Es2015SymbolWellKnown, Lib::DomIterable])
        );
        let json = serde_json::to_string(&options).expect("serialize lib entries");
        assert_eq!(json, r#"{"lib":["ES2015.Symbol.WellKnown","DOM.Iterable"]}"#);
    }

    #[test]
    fn watch_options_accept_lowercase_kinds() {
        let watch: WatchOptions = serde_json::from_str(
            r#"{"watchFile": "usefsevents", "fallbackPolling": "DynamicPriority"}"#,
        )
        .expect("parse watch options");
        assert_eq!(watch.watch_file, Some(WatchFileKind::UseFsEvents));
        assert_eq!(
            watch.fallback_polling,
            Some(PollingWatchKind::DynamicPriority)
        );
    }
}
