use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;

fn test_data() -> PathBuf {
    // apps/bookrec-cli -> apps -> repo root
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).ancestors().nth(2).unwrap().join("test_data")
}

fn bookrec(cwd: &std::path::Path, args: &[&str], envs: &[(&str, &str)]) -> Value {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bookrec"));
    cmd.current_dir(cwd).env("RUST_ENV", "dev").env("RUST_LOG", "warn").args(args);
    for (k, v) in envs {
        cmd.env(k, v);
    }
    let out = cmd.output().expect("run bookrec");
    assert!(out.status.success(), "bookrec {:?} failed: {}", args, String::from_utf8_lossy(&out.stderr));
    serde_json::from_slice(&out.stdout).expect("json output")
}

fn item_ids(v: &Value) -> Vec<u64> {
    v.as_array().unwrap().iter().map(|r| r["item_id"].as_u64().unwrap()).collect()
}

#[test]
fn recommend_persists_and_show_reads_back() {
    let tmp = tempfile::tempdir().unwrap();
    let catalog = test_data().join("catalog.json");
    let ratings = test_data().join("ratings.json");
    let store = tmp.path().join("recs");
    let args = [
        "recommend", "1",
        "--catalog", catalog.to_str().unwrap(),
        "--ratings", ratings.to_str().unwrap(),
        "--store", store.to_str().unwrap(),
    ];

    let recs = bookrec(tmp.path(), &args, &[]);
    let ids = item_ids(&recs);
    assert!(!ids.contains(&1) && !ids.contains(&5));
    assert_eq!(ids[0], 2, "same content as the rated book ranks first");
    assert!(store.join("1.json").exists());

    let shown = bookrec(tmp.path(), &["show", "1", "--store", store.to_str().unwrap()], &[]);
    assert_eq!(item_ids(&shown), ids);

    // a stricter title metric drops the alternate edition
    let recs = bookrec(tmp.path(), &args, &[("APP_RECOMMENDER__TITLE_METRIC", "jaro_winkler")]);
    assert!(!item_ids(&recs).contains(&2));
}

#[test]
fn dry_run_and_zero_ratings() {
    let tmp = tempfile::tempdir().unwrap();
    let catalog = test_data().join("catalog.json");
    let ratings = test_data().join("ratings.json");
    let store = tmp.path().join("recs");
    let recs = bookrec(
        tmp.path(),
        &["recommend", "3", "--dry-run", "--catalog", catalog.to_str().unwrap(), "--ratings", ratings.to_str().unwrap(), "--store", store.to_str().unwrap()],
        &[],
    );
    assert!(recs.as_array().unwrap().is_empty());
    assert!(!store.exists());
}

#[test]
fn similar_lists_neighbours() {
    let tmp = tempfile::tempdir().unwrap();
    let catalog = test_data().join("catalog.json");
    let similar = bookrec(tmp.path(), &["similar", "6", "--top-n", "1", "--catalog", catalog.to_str().unwrap()], &[]);
    assert_eq!(item_ids(&similar), vec![5]);
}

#[test]
fn rust_log_enables_library_debug_events() {
    let tmp = tempfile::tempdir().unwrap();
    let catalog = test_data().join("catalog.json");
    let ratings = test_data().join("ratings.json");
    let out = Command::new(env!("CARGO_BIN_EXE_bookrec"))
        .current_dir(tmp.path())
        .env("RUST_ENV", "dev")
        .env("RUST_LOG", "debug")
        .args(["recommend", "1", "--dry-run", "--catalog", catalog.to_str().unwrap(), "--ratings", ratings.to_str().unwrap()])
        .output()
        .expect("run bookrec");
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    for event in ["corpus built", "vector space fitted", "top candidates before deduplication"] {
        assert!(stderr.contains(event), "missing '{event}' in:\n{stderr}");
    }
}

#[test]
fn config_dir_resolves_relative_data_paths() {
    let tmp = tempfile::tempdir().unwrap();
    let conf = tmp.path().join("conf");
    let run_dir = tmp.path().join("elsewhere");
    std::fs::create_dir_all(&conf).unwrap();
    std::fs::create_dir_all(&run_dir).unwrap();
    std::fs::copy(test_data().join("catalog.json"), conf.join("books.json")).unwrap();
    std::fs::copy(test_data().join("ratings.json"), conf.join("reviews.json")).unwrap();
    std::fs::write(
        conf.join("config.toml"),
        "[data]\ncatalog_path = \"books.json\"\nratings_path = \"reviews.json\"\nrecommendations_dir = \"recs\"\n",
    )
    .unwrap();

    let recs = bookrec(&run_dir, &["--config-dir", conf.to_str().unwrap(), "recommend", "2"], &[]);
    assert!(!item_ids(&recs).is_empty());
    assert!(conf.join("recs/2.json").exists());
    assert!(!run_dir.join("recs").exists());
}
