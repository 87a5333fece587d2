use bingo_data::{builtin_pool, load_pool, load_pool_or_builtin, CardDef};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_file(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "bingo_data_{tag}_{}_{}.json",
        std::process::id(),
        nanos
    ))
}

#[test]
fn loads_pool_from_file() {
    let file = unique_temp_file("load");
    let body = r##"
[
  {"name": "One", "color": "#112233", "numbers": [1, 2, 3]},
  {"name": "Two", "color": "#abc", "numbers": [4, 5, 6]},
  {"name": "Three", "color": "445566", "numbers": [1, 4, 7]}
]
"##;
    std::fs::write(&file, body).expect("write");
    let pool = load_pool(&file).expect("load");
    assert_eq!(pool.len(), 3);
    assert_eq!(pool.cards()[1].color.to_string(), "#aabbcc");
    assert_eq!(pool.deck().numbers(), &[1, 2, 3, 4, 5, 6, 7]);
    let _ = std::fs::remove_file(file);
}

#[test]
fn missing_file_is_reported_with_path() {
    let file = unique_temp_file("missing");
    let err = load_pool_or_builtin(Some(file.as_path())).expect_err("missing file");
    assert!(err.to_string().contains(&file.display().to_string()));
}

#[test]
fn invalid_file_reports_reason() {
    let file = unique_temp_file("invalid");
    let body = r##"[{"name": "Solo", "color": "#000000", "numbers": [3, 3]}]"##;
    std::fs::write(&file, body).expect("write");
    let err = load_pool(&file).expect_err("invalid pool");
    let message = format!("{err:#}");
    assert!(message.contains("validate"), "{message}");
    assert!(message.contains("repeats number 3"), "{message}");
    let _ = std::fs::remove_file(file);
}

#[test]
fn builtin_pool_survives_export() {
    let defs: Vec<CardDef> = builtin_pool().iter().map(CardDef::from).collect();
    let file = unique_temp_file("export");
    std::fs::write(&file, serde_json::to_vec_pretty(&defs).expect("encode")).expect("write");
    let pool = load_pool(&file).expect("load");
    assert_eq!(pool, builtin_pool());
    let _ = std::fs::remove_file(file);
}

#[test]
fn no_path_uses_builtin_pool() {
    let pool = load_pool_or_builtin(None).expect("builtin");
    assert_eq!(pool.len(), 10);
}
