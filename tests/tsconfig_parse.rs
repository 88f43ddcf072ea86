//! Deserialize full tsconfig.json fixtures through the public loader.

use std::path::Path;
use tsconfig_model::tsconfig::{
    Extends, Jsx, Lib, Module, ModuleDetection, ModuleResolution, PollingWatchKind, Target,
    WatchFileKind,
};
use tsconfig_model::{parse_tsconfig, read_tsconfig, TsConfig};

fn load_fixture(name: &str) -> TsConfig {
    let path = Path::new("tests/data").join(name);
    read_tsconfig(&path).expect("fixture parses")
}

#[test]
fn parses_a_full_project_config() {
    let config = load_fixture("tsconfig_full.json");

    assert_eq!(
        config.extends,
        Some(Extends::Single("./tsconfig.base.json".to_string()))
    );
    assert_eq!(config.compile_on_save, Some(false));
    assert_eq!(config.files, Some(vec!["src/index.ts".to_string()]));

    let options = config.compiler_options.expect("compilerOptions present");
    assert_eq!(options.target, Some(Target::Es2022));
    assert_eq!(options.module, Some(Module::NodeNext));
    assert_eq!(options.module_resolution, Some(ModuleResolution::NodeNext));
    assert_eq!(options.module_detection, Some(ModuleDetection::Force));
    assert_eq!(
        options.lib,
        Some(vec![Lib::Es2022, Lib::Dom, Lib::DomIterable])
    );
    assert_eq!(options.jsx, Some(Jsx::ReactJsx));
    assert_eq!(options.emit_bom, Some(false));
    assert_eq!(options.max_node_module_js_depth, Some(0));

    let paths = options.paths.expect("paths present");
    assert_eq!(paths["@app/*"], vec!["src/app/*".to_string()]);
    assert_eq!(paths["@shared/*"].len(), 2);

    let plugins = options.plugins.expect("plugins present");
    assert_eq!(plugins.len(), 1);
    assert_eq!(plugins[0].name, "typescript-plugin-css-modules");

    let watch = config.watch_options.expect("watchOptions present");
    assert_eq!(watch.watch_file, Some(WatchFileKind::UseFsEvents));
    assert_eq!(
        watch.fallback_polling,
        Some(PollingWatchKind::DynamicPriority)
    );

    let acquisition = config.type_acquisition.expect("typeAcquisition present");
    assert_eq!(acquisition.enable, Some(true));
    assert_eq!(acquisition.include, Some(vec!["jquery".to_string()]));

    let references = config.references.expect("references present");
    assert_eq!(references.len(), 2);
    assert_eq!(references[0].path, "../core");
    assert_eq!(
        references[1].original_path,
        Some("../legacy/tsconfig.json".to_string())
    );
}

#[test]
fn parses_a_jsonc_config_with_comments_and_trailing_commas() {
    let config = load_fixture("tsconfig_jsonc.json");

    assert_eq!(
        config.extends,
        Some(Extends::Multiple(vec![
            "./tsconfig.base.json".to_string(),
            "./tsconfig.strict.json".to_string()
        ]))
    );

    let options = config.compiler_options.expect("compilerOptions present");
    assert_eq!(options.target, Some(Target::Es2020));
    assert_eq!(options.module, Some(Module::CommonJs));
    assert_eq!(options.strict, Some(true));
    assert_eq!(options.out_dir, Some("./build".to_string()));

    assert_eq!(
        config.include,
        Some(vec!["src/**/*".to_string(), "scripts/**/*".to_string()])
    );
}

#[test]
fn full_fixture_round_trips_through_serialization() {
    let config = load_fixture("tsconfig_full.json");
    let json = serde_json::to_string_pretty(&config).expect("serialize config");
    assert!(!json.contains("null"));
    let back: TsConfig = parse_tsconfig(&json).expect("reparse serialized config");
    assert_eq!(back, config);
}

#[test]
fn reads_a_config_written_to_disk() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("tsconfig.json");
    std::fs::write(&path, "{\"compilerOptions\": {\"strict\": true}}").expect("write config");

    let config = read_tsconfig(&path).expect("read config back");
    let options = config.compiler_options.expect("compilerOptions present");
    assert_eq!(options.strict, Some(true));
}
