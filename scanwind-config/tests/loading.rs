use std::fs;
use std::path::{Path, PathBuf};

use scanwind_config::{
    ConfigError, ConfigFormat, ConfigLoader, ScanAndThemeConfig, load_from, load_from_async,
};
use serde_json::json;
use uuid::Uuid;

const REFERENCE: &str = r#"{
  "content": ["./**/*.html", "./**/*.templ", "./**/*.go"],
  "theme": {
    "extend": {
      "container": {
        "center": true,
        "padding": "4px"
      }
    }
  },
  "plugins": []
}
"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn temp_dir() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("scanwind-config-{}", Uuid::new_v4()));
    fs::create_dir_all(&path).unwrap();
    path
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_reference_descriptor() {
    init_tracing();
    let dir = temp_dir();
    let path = write(&dir, "scanwind.config.json", REFERENCE);

    let config = load_from(&path).unwrap();

    assert_eq!(config.content(), ["./**/*.html", "./**/*.templ", "./**/*.go"]);
    let container = config.container().expect("container override");
    assert!(container.center());
    assert_eq!(container.padding(), "4px");
    assert!(config.plugins().is_empty());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn missing_file_is_not_found() {
    let dir = temp_dir();
    let err = load_from(dir.join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { ref path } if path.ends_with("absent.json")));
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn missing_content_is_malformed() {
    let dir = temp_dir();
    let json = write(&dir, "no-content.json", r#"{ "plugins": [] }"#);
    let toml = write(&dir, "no-content.toml", "plugins = []\n");

    assert!(load_from(&json).unwrap_err().is_malformed());
    assert!(load_from(&toml).unwrap_err().is_malformed());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn invalid_utf8_is_malformed() {
    let dir = temp_dir();
    let path = dir.join("binary.json");
    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
    assert!(load_from(&path).unwrap_err().is_malformed());
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn empty_content_still_loads() {
    init_tracing();
    let dir = temp_dir();
    let path = write(&dir, "empty.json", r#"{ "content": [] }"#);

    let config = load_from(&path).unwrap();
    assert!(config.content().is_empty());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn save_then_load_is_identity() {
    let dir = temp_dir();
    let original = load_from(write(&dir, "reference.json", REFERENCE)).unwrap();

    for name in ["copy.json", "copy.toml"] {
        let path = dir.join(name);
        original.save(&path).unwrap();
        let reloaded = load_from(&path).unwrap();
        assert_eq!(reloaded, original, "round trip through {name}");

        original.save(&path).unwrap();
        assert_eq!(load_from(&path).unwrap(), reloaded);
    }

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn content_order_and_duplicates_survive() {
    let dir = temp_dir();
    let globs = ["./z/**/*.go", "./a/**/*.html", "./z/**/*.go", "./m/*.templ"];
    let config = ScanAndThemeConfig::builder().content(globs).build();

    let path = dir.join("ordered.toml");
    config.save(&path).unwrap();
    let reloaded = load_from(&path).unwrap();
    assert_eq!(reloaded.content(), globs);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn unknown_theme_keys_are_preserved() {
    let dir = temp_dir();
    let config = ScanAndThemeConfig::builder()
        .add_content("./**/*.templ")
        .container(false, "1.5rem")
        .extend("colors", json!({ "brand": "#0f766e" }))
        .unwrap()
        .extend("spacing", json!({ "128": "32rem" }))
        .unwrap()
        .add_plugin("@tailwindcss/typography")
        .build();

    for name in ["theme.json", "theme.toml"] {
        let path = dir.join(name);
        config.save(&path).unwrap();
        let reloaded = load_from(&path).unwrap();
        assert_eq!(reloaded, config, "round trip through {name}");
        assert_eq!(
            reloaded.theme_extension().get("colors"),
            Some(&json!({ "brand": "#0f766e" }))
        );
    }

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn loader_probes_default_names_in_order() {
    let dir = temp_dir();
    let toml_only = r#"
content = ["./**/*.go"]
"#;
    write(&dir, "scanwind.config.toml", toml_only);

    let loader = ConfigLoader::new().in_dir(&dir);
    assert_eq!(loader.discover().unwrap(), dir.join("scanwind.config.toml"));
    assert_eq!(loader.load().unwrap().content(), ["./**/*.go"]);

    write(&dir, "scanwind.config.json", REFERENCE);
    assert_eq!(loader.discover().unwrap(), dir.join("scanwind.config.json"));
    assert_eq!(loader.load().unwrap().content().len(), 3);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn discovery_walks_up_only_when_enabled() {
    let root = temp_dir();
    write(&root, "scanwind.config.json", REFERENCE);
    let nested = root.join("pkg").join("view");
    fs::create_dir_all(&nested).unwrap();

    let local = ConfigLoader::new().in_dir(&nested);
    assert!(local.discover().unwrap_err().is_not_found());

    let upward = local.search_parents(true);
    assert_eq!(upward.discover().unwrap(), root.join("scanwind.config.json"));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn custom_file_names() {
    let dir = temp_dir();
    write(&dir, "tailwind.config.json", REFERENCE);

    let loader = ConfigLoader::new()
        .in_dir(&dir)
        .with_file_names(["tailwind.config.json"]);
    assert!(loader.load().unwrap().container().is_some());

    let _ = fs::remove_dir_all(dir);
}

#[tokio::test]
async fn async_loaders_match_sync() {
    let dir = temp_dir();
    let path = write(&dir, "scanwind.config.json", REFERENCE);

    let sync = load_from(&path).unwrap();
    let from_path = load_from_async(&path).await.unwrap();
    let discovered = ConfigLoader::new().in_dir(&dir).load_async().await.unwrap();
    assert_eq!(from_path, sync);
    assert_eq!(discovered, sync);

    let err = load_from_async(dir.join("gone.toml")).await.unwrap_err();
    assert!(err.is_not_found());

    let _ = fs::remove_dir_all(dir);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_readers_agree() {
    let dir = temp_dir();
    let path = write(&dir, "scanwind.config.json", REFERENCE);

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let path = path.clone();
            tokio::spawn(async move { load_from_async(path).await })
        })
        .collect();

    let expected = load_from(&path).unwrap();
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), expected);
    }

    let _ = fs::remove_dir_all(dir);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn discovering_loads_run_on_spawned_tasks() {
    let root = temp_dir();
    write(&root, "scanwind.config.json", REFERENCE);
    let nested = root.join("pkg").join("handler");
    fs::create_dir_all(&nested).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let dir = if i % 2 == 0 { root.clone() } else { nested.clone() };
            tokio::spawn(async move {
                ConfigLoader::new()
                    .in_dir(dir)
                    .search_parents(true)
                    .load_async()
                    .await
            })
        })
        .collect();

    let expected = load_from(root.join("scanwind.config.json")).unwrap();
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), expected);
    }

    let _ = fs::remove_dir_all(root);
}

#[test]
fn toml_rendering_is_readable() {
    let config = scanwind_config::parse_str(REFERENCE, ConfigFormat::Json).unwrap();
    let rendered = config.to_string_pretty(ConfigFormat::Toml).unwrap();
    assert!(rendered.contains("[theme.extend.container]"));
    assert!(rendered.contains("padding = \"4px\""));
}
