//! Validation and on-disk inputs against a scaffolded project.

use std::fs;
use std::path::Path;

use tack_config::{
    BuildEnv, ConfigError, ConfigValidator, DotenvOptions, FsValidator, Mode, PackageManifest,
    ProjectPaths, SchemaValidator, build_config, json_schema, parse_value, validate_value,
};
use tempfile::TempDir;

fn scaffold(root: &Path) {
    fs::create_dir_all(root.join("src/css")).expect("create src");
    fs::create_dir_all(root.join("node_modules/purecss")).expect("create purecss");
    fs::write(root.join("src/index.js"), "import './css/main.css'\n").expect("write entry");
    fs::write(root.join("src/css/main.css"), "body { margin: 0 }\n").expect("write css");
    fs::write(
        root.join("package.json"),
        r#"{ "name": "site", "dependencies": { "react": "^15.3.0" } }"#,
    )
    .expect("write manifest");
    fs::write(root.join(".env.default"), "API_URL=http://localhost:8080\nTITLE=Site\n")
        .expect("write env defaults");
}

#[test]
fn scaffolded_project_passes_filesystem_checks() {
    let dir = TempDir::new().expect("tempdir");
    scaffold(dir.path());

    let paths = ProjectPaths::resolve(dir.path()).expect("paths");
    let manifest = PackageManifest::from_path(&paths.manifest).expect("manifest");

    for mode in [Mode::Development, Mode::Production] {
        let config = build_config(&BuildEnv::new(mode), &paths, &manifest).expect("config");
        FsValidator::new(&paths.root).validate(&config).expect("valid on disk");
    }
}

#[test]
fn missing_stylesheet_fails_production_only() {
    let dir = TempDir::new().expect("tempdir");
    scaffold(dir.path());
    fs::remove_file(dir.path().join("src/css/main.css")).expect("remove css");

    let paths = ProjectPaths::resolve(dir.path()).expect("paths");
    let manifest = PackageManifest::from_path(&paths.manifest).expect("manifest");
    let validator = FsValidator::new(&paths.root);

    let dev = build_config(&BuildEnv::new(Mode::Development), &paths, &manifest).expect("dev");
    assert!(validator.validate(&dev).is_ok());

    let prod = build_config(&BuildEnv::new(Mode::Production), &paths, &manifest).expect("prod");
    match validator.validate(&prod) {
        Err(ConfigError::EntryNotFound(path)) => assert!(path.ends_with("src/css/main.css")),
        other => panic!("expected EntryNotFound, got {other:?}"),
    }
}

#[test]
fn missing_manifest_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    let paths = ProjectPaths::resolve(dir.path()).expect("paths");
    let err = PackageManifest::from_path(&paths.manifest).unwrap_err();
    assert!(matches!(err, ConfigError::ManifestRead { .. }));
}

#[test]
fn dotenv_plugin_resolves_project_env_files() {
    let dir = TempDir::new().expect("tempdir");
    scaffold(dir.path());
    fs::write(dir.path().join(".env"), "API_URL=https://api.site.test\n").expect("write .env");

    let paths = ProjectPaths::resolve(dir.path()).expect("paths");
    let env = DotenvOptions::new(&paths.env_defaults, &paths.env_overrides)
        .resolve()
        .expect("resolve env");

    assert_eq!(env.get("API_URL"), Some("https://api.site.test"));
    assert_eq!(env.get("TITLE"), Some("Site"));
    assert_eq!(env.defines()["process.env.TITLE"], "\"Site\"");
}

#[test]
fn exported_json_validates_against_schema() {
    let dir = TempDir::new().expect("tempdir");
    let paths = ProjectPaths::resolve(dir.path()).expect("paths");
    let config = build_config(
        &BuildEnv::new(Mode::Production),
        &paths,
        &PackageManifest::default(),
    )
    .expect("config");

    let value = config.to_json().expect("json");
    validate_value(&value).expect("schema valid");
    assert_eq!(parse_value(value).expect("parse"), config);
}

#[test]
fn schema_rejects_malformed_documents() {
    let bad_plugin = serde_json::json!({
        "entry": "/app/src/index.js",
        "output": { "path": "/app/build", "filename": "bundle.js" },
        "plugins": [{ "plugin": "uglify", "options": { "compress": "yes" } }]
    });
    assert!(validate_value(&bad_plugin).is_err());

    let bad_devtool = serde_json::json!({ "devtool": "inline-magic" });
    assert!(validate_value(&bad_devtool).is_err());
}

#[test]
fn schema_describes_top_level_sections() {
    let schema = json_schema();
    let properties = schema["properties"].as_object().expect("properties");
    for key in ["entry", "output", "module", "plugins", "devtool", "devServer", "imageWebpackLoader"] {
        assert!(properties.contains_key(key), "missing {key}");
    }
}

#[test]
fn schema_validator_rejects_config_without_entry() {
    let dir = TempDir::new().expect("tempdir");
    let paths = ProjectPaths::resolve(dir.path()).expect("paths");
    let mut config = build_config(
        &BuildEnv::new(Mode::Development),
        &paths,
        &PackageManifest::default(),
    )
    .expect("config");
    config.entry = None;

    assert!(matches!(
        SchemaValidator.validate(&config),
        Err(ConfigError::MissingField("entry"))
    ));
}

#[test]
fn parsed_documents_run_plugin_checks() {
    let paths = ProjectPaths::resolve(std::env::temp_dir().join("site")).expect("paths");
    let config = build_config(
        &BuildEnv::new(Mode::Production),
        &paths,
        &PackageManifest::default(),
    )
    .expect("config");
    let exported = config.to_json().expect("json");

    let with_plugin_options = |name: &str, options: serde_json::Value| {
        let mut value = exported.clone();
        let plugins = value["plugins"].as_array_mut().expect("plugins");
        let plugin = plugins
            .iter_mut()
            .find(|p| p["plugin"] == name)
            .unwrap_or_else(|| panic!("no {name} plugin"));
        plugin["options"] = options;
        value
    };

    let root = paths.root.to_string_lossy().into_owned();
    let outside = with_plugin_options(
        "clean",
        serde_json::json!({ "paths": ["/", "/etc"], "root": root, "verbose": true }),
    );
    assert!(matches!(
        parse_value(outside),
        Err(ConfigError::SchemaValidation { .. })
    ));

    let no_names = with_plugin_options(
        "commons-chunk",
        serde_json::json!({ "names": [], "minChunks": "Infinity" }),
    );
    assert!(parse_value(no_names).is_err());
}
