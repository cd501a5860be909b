use assert_cmd::Command;
use predicates::prelude::*;

const FOREST: &str = r#"{
  "files": [{
    "path": "Player.cs",
    "imports": [{"text": "using UnityEngine;", "span_start": 0}],
    "items": [{
      "kind": "Namespace",
      "name": "Game",
      "items": [{
        "kind": "Class",
        "name": "Player",
        "location": {"file": "Player.cs", "line": 6, "column": 1},
        "attributes": [
          {
            "name": "RequireComponent",
            "location": {"file": "Player.cs", "line": 3, "column": 2},
            "arguments": [{"expr": {"kind": "TypeOf", "ty": "Rigidbody"}}]
          },
          {
            "name": "RequireComponentGetters",
            "location": {"file": "Player.cs", "line": 4, "column": 2}
          }
        ]
      }, {
        "kind": "Class",
        "name": "Enemy",
        "location": {"file": "Player.cs", "line": 12, "column": 1},
        "attributes": [{
          "name": "RequireComponentGetter",
          "text": "RequireComponentGetter(typeof(Animator))",
          "location": {"file": "Player.cs", "line": 11, "column": 2},
          "arguments": [{"expr": {"kind": "TypeOf", "ty": "Animator"}}]
        }]
      }]
    }]
  }]
}"#;

fn write_forest(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("forest.json");
    std::fs::write(&path, FOREST).unwrap();
    path
}

#[test]
fn writes_sources_and_reports_errors() {
    let dir = tempfile::tempdir().unwrap();
    let forest = write_forest(dir.path());
    let out = dir.path().join("generated");

    Command::cargo_bin("getters-gen")
        .unwrap()
        .arg("--forest")
        .arg(&forest)
        .arg("--out")
        .arg(&out)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Player.cs:11:2: error[RCG002]: Name argument must be a literal string: RequireComponentGetter(typeof(Animator))",
        ));

    let player = std::fs::read_to_string(out.join("Player.Getters.g.cs")).unwrap();
    assert!(player.contains("public Rigidbody Rigidbody => _rigidbody ??= GetComponent<Rigidbody>();"));
    assert!(!out.join("Enemy.Getters.g.cs").exists());
}

#[test]
fn check_mode_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let forest = write_forest(dir.path());

    Command::cargo_bin("getters-gen")
        .unwrap()
        .arg("--forest")
        .arg(&forest)
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("RCG002"));

    assert!(!dir.path().join("generated").exists());
}

#[test]
fn config_changes_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let forest = write_forest(dir.path());
    let config = dir.path().join("getters.toml");
    std::fs::write(&config, "lookup = \"Resolve<{type}>()\"\n").unwrap();
    let out = dir.path().join("generated");

    Command::cargo_bin("getters-gen")
        .unwrap()
        .arg("--forest")
        .arg(&forest)
        .arg("--out")
        .arg(&out)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1);

    let player = std::fs::read_to_string(out.join("Player.Getters.g.cs")).unwrap();
    assert!(player.contains("_rigidbody ??= Resolve<Rigidbody>();"));
}

#[test]
fn invalid_forest_fails() {
    let dir = tempfile::tempdir().unwrap();
    let forest = dir.path().join("forest.json");
    std::fs::write(&forest, "{ not json").unwrap();

    Command::cargo_bin("getters-gen")
        .unwrap()
        .arg("--forest")
        .arg(&forest)
        .arg("--check")
        .assert()
        .failure();
}

const WARNING_FOREST: &str = r#"{
  "files": [{
    "path": "Player.cs",
    "items": [{
      "kind": "Class",
      "name": "Player",
      "location": {"file": "Player.cs", "line": 4, "column": 1},
      "attributes": [{
        "name": "RequireComponentGetter",
        "location": {"file": "Player.cs", "line": 3, "column": 2},
        "arguments": [
          {"expr": {"kind": "TypeOf", "ty": "Health"}},
          {"expr": {"kind": "StringLiteral", "value": ""}}
        ]
      }]
    }]
  }]
}"#;

#[test]
fn warnings_succeed_unless_configured_as_errors() {
    let dir = tempfile::tempdir().unwrap();
    let forest = dir.path().join("forest.json");
    std::fs::write(&forest, WARNING_FOREST).unwrap();
    let lax_out = dir.path().join("lax");

    Command::cargo_bin("getters-gen")
        .unwrap()
        .arg("--forest")
        .arg(&forest)
        .arg("--out")
        .arg(&lax_out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Player.cs:3:2: warning[RCG004]"));
    assert!(lax_out.join("Player.Getters.g.cs").exists());

    let config = dir.path().join("getters.toml");
    std::fs::write(&config, "warnings_as_errors = true\n").unwrap();
    let strict_out = dir.path().join("strict");

    Command::cargo_bin("getters-gen")
        .unwrap()
        .arg("--forest")
        .arg(&forest)
        .arg("--out")
        .arg(&strict_out)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("warning[RCG004]"));
    assert!(!strict_out.join("Player.Getters.g.cs").exists());
}
