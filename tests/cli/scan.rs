use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

const DOM_JS: &str = r#"
goog.provide('goog.dom');

goog.require('goog.array');
goog.require('goog.string');
"#;

const MAIN_JS: &str = r#"
goog.provide('app.main');
goog.require('goog.dom');

app.main = function() {
  console.log(goog.dom.getElement('root'));
};
"#;

fn closure_project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file("goog/dom/dom.js", DOM_JS)?;
    test.write_file("main.js", MAIN_JS)?;
    test.write_file("util/noop.js", "function noop() {}\n")?;
    Ok(test)
}

#[test]
fn test_scan_text_output() -> Result<()> {
    let test = closure_project()?;

    let output = test.scan_command().output()?;
    let out = stdout(&output);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(out.contains("goog/dom/dom.js\n  provides goog.dom\n  requires goog.array\n  requires goog.string\n"));
    assert!(out.contains("main.js\n  provides app.main\n  requires goog.dom\n"));
    assert!(!out.contains("noop.js"));
    assert!(out.contains("Scanned 3 source files: 2 provides, 3 requires"));

    Ok(())
}

#[test]
fn test_scan_all_includes_empty_files() -> Result<()> {
    let test = closure_project()?;

    let output = test.scan_command().arg("--all").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("util/noop.js"));

    Ok(())
}

#[test]
fn test_scan_json_output() -> Result<()> {
    let test = closure_project()?;

    let output = test.scan_command().args(["--format", "json"]).output()?;
    assert!(output.status.success());

    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        parsed,
        json!({
            "files": [
                {
                    "filePath": "goog/dom/dom.js",
                    "provides": ["goog.dom"],
                    "requires": ["goog.array", "goog.string"]
                },
                {
                    "filePath": "main.js",
                    "provides": ["app.main"],
                    "requires": ["goog.dom"]
                }
            ],
            "parseErrors": []
        })
    );

    Ok(())
}

#[test]
fn test_scan_deps_output() -> Result<()> {
    let test = closure_project()?;

    let output = test.scan_command().args(["--format", "deps"]).output()?;
    assert!(output.status.success());

    assert_snapshot!(stdout(&output).trim_end(), @r"
    // This file was autogenerated by goog-deps.
    // Please do not edit.
    goog.addDependency('goog/dom/dom.js', ['goog.dom'], ['goog.array', 'goog.string'], {});
    goog.addDependency('main.js', ['app.main'], ['goog.dom'], {});
    ");

    Ok(())
}

#[test]
fn test_scan_deps_prefix_from_config_and_cli() -> Result<()> {
    let test = closure_project()?;
    test.write_file(".googdepsrc.json", r#"{ "depsPrefix": "../../" }"#)?;

    let output = test.scan_command().args(["--format", "deps"]).output()?;
    assert!(stdout(&output).contains("goog.addDependency('../../main.js',"));

    let output = test
        .scan_command()
        .args(["--format", "deps", "--deps-prefix", "lib/"])
        .output()?;
    assert!(stdout(&output).contains("goog.addDependency('lib/main.js',"));

    Ok(())
}

#[test]
fn test_scan_duplicates_and_malformed_calls() -> Result<()> {
    let test = CliTest::with_file(
        "mixed.js",
        r#"
goog.provide('a.A');
goog.provide('a.A');
goog.require();
goog.require(42);
goog.require(name);
foo.bar('ignored');
goog.require('b.B', 'c.C');
"#,
    )?;

    let output = test.scan_command().args(["--format", "json"]).output()?;
    assert!(output.status.success());

    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(parsed["files"][0]["provides"], json!(["a.A"]));
    assert_eq!(parsed["files"][0]["requires"], json!(["b.B"]));

    Ok(())
}

#[test]
fn test_scan_parse_error_exits_with_failure() -> Result<()> {
    let test = closure_project()?;
    test.write_file("broken.js", "goog.provide('broken'")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("main.js"));
    assert!(stdout(&output).contains("(1 file could not be parsed)"));
    assert!(stderr(&output).contains("1 file(s) could not be parsed (use -v for details)"));

    Ok(())
}

#[test]
fn test_scan_parse_error_verbose_details() -> Result<()> {
    let test = closure_project()?;
    test.write_file("broken.js", "goog.provide('broken'")?;

    let output = test.scan_command().arg("-v").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("broken.js:1:"));
    assert!(!stderr(&output).contains("use -v for details"));

    Ok(())
}

#[test]
fn test_scan_json_lists_parse_errors() -> Result<()> {
    let test = CliTest::with_file("broken.js", "goog.require(")?;

    let output = test.scan_command().args(["--format", "json"]).output()?;
    assert_eq!(output.status.code(), Some(1));

    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(parsed["files"], json!([]));
    assert_eq!(parsed["parseErrors"][0]["filePath"], "broken.js");

    Ok(())
}

#[test]
fn test_scan_source_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lib/closure/a.js", "goog.provide('lib.a');")?;
    test.write_file("other/b.js", "goog.provide('other.b');")?;

    let output = test
        .scan_command()
        .args(["--source-root", "lib", "--format", "json"])
        .output()?;
    assert!(output.status.success());

    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(parsed["files"][0]["filePath"], "closure/a.js");
    assert_eq!(parsed["files"].as_array().map(Vec::len), Some(1));

    Ok(())
}

#[test]
fn test_scan_missing_source_root_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .scan_command()
        .args(["--source-root", "does-not-exist"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("error: Source root is not a directory"));

    Ok(())
}

#[test]
fn test_scan_skips_node_modules_and_configured_test_files() -> Result<()> {
    let test = closure_project()?;
    test.write_file("node_modules/pkg/index.js", "goog.provide('pkg');")?;
    test.write_file("main_test.js", "goog.require('app.main');")?;
    test.write_file(".googdepsrc.json", r#"{ "ignoreTestFiles": true }"#)?;

    let output = test.scan_command().output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(!out.contains("node_modules"));
    assert!(!out.contains("main_test.js"));

    Ok(())
}

#[test]
fn test_scan_typescript_and_modules() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/widget.ts",
        "goog.provide('ts.Widget');\nconst dom: unknown = goog.require('goog.dom');\n",
    )?;
    test.write_file(
        "src/entry.mjs",
        "import './side-effect.js';\ngoog.require('es.Entry');\n",
    )?;

    let output = test.scan_command().args(["--format", "json"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        parsed["files"],
        json!([
            { "filePath": "src/entry.mjs", "provides": [], "requires": ["es.Entry"] },
            { "filePath": "src/widget.ts", "provides": ["ts.Widget"], "requires": ["goog.dom"] }
        ])
    );

    Ok(())
}

#[test]
fn test_scan_from_subdirectory_finds_config_at_repo_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".googdepsrc.json", r#"{ "depsPrefix": "../../" }"#)?;
    test.write_file("closure/goog/dom.js", "goog.provide('goog.dom');")?;

    let output = test
        .scan_command()
        .current_dir(test.root().join("closure/goog"))
        .args(["--format", "deps"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("goog.addDependency('../../dom.js', ['goog.dom'], [], {});"));

    Ok(())
}
