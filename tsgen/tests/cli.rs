/// End-to-end tests for the `tsgen` binary.
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use serde_json::json;

const BIN: &str = env!("CARGO_BIN_EXE_tsgen");

fn write_fixture(dir: &Path, name: &str, value: &serde_json::Value) -> String {
    let path = dir.join(name);
    std::fs::write(&path, value.to_string()).unwrap();
    path.to_str().unwrap().to_owned()
}

fn typed_function() -> serde_json::Value {
    json!({
        "type": "Program",
        "body": [{
            "type": "FunctionDeclaration",
            "id": {"type": "Identifier", "name": "greet"},
            "params": [{
                "type": "Identifier",
                "name": "name",
                "typeAnnotation": {"type": "TSTypeAnnotation", "typeAnnotation": {"type": "TSStringKeyword"}}
            }],
            "body": {"type": "BlockStatement", "body": [{
                "type": "ReturnStatement",
                "argument": {"type": "Identifier", "name": "name"}
            }]}
        }]
    })
}

fn run(args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .env_remove("TSGEN_LOG")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_file_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "ast.json", &typed_function());
    let output = run(&[input.as_str()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "function greet(name: string) {\n  return name;\n}\n"
    );
}

#[test]
fn test_layout_flags_and_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "ast.json", &typed_function());
    let target = dir.path().join("out.ts");
    let output = run(&["--tabs", "--crlf", "-o", target.to_str().unwrap(), input.as_str()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());
    assert_eq!(
        std::fs::read_to_string(&target).unwrap(),
        "function greet(name: string) {\r\n\treturn name;\r\n}\r\n"
    );
}

#[test]
fn test_config_file_with_indent_override() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "ast.json", &typed_function());
    let config = write_fixture(dir.path(), "layout.json", &json!({"indent": "\t", "startingIndentLevel": 1}));
    let output = run(&["--config", config.as_str(), "--indent", "4", input.as_str()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "    function greet(name: string) {\n        return name;\n    }\n"
    );
}

#[test]
fn test_stdin_input() {
    let mut child = Command::new(BIN)
        .args(["--dialect", "js"])
        .env_remove("TSGEN_LOG")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    let source = json!({"type": "Program", "body": [{"type": "DebuggerStatement"}]});
    child.stdin.take().unwrap().write_all(source.to_string().as_bytes()).unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "debugger;\n");
}

#[test]
fn test_plain_dialect_rejects_type_aliases() {
    let dir = tempfile::tempdir().unwrap();
    let alias = json!({
        "type": "Program",
        "body": [{
            "type": "TSTypeAliasDeclaration",
            "id": {"type": "Identifier", "name": "Name"},
            "typeAnnotation": {"type": "TSStringKeyword"}
        }]
    });
    let input = write_fixture(dir.path(), "ast.json", &alias);
    let output = run(&["--dialect", "js", input.as_str()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("generation failed"), "{stderr}");
    assert!(stderr.contains("TSTypeAliasDeclaration"), "{stderr}");
}

#[test]
fn test_invalid_json_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.json");
    std::fs::write(&input, "{\"type\": ").unwrap();
    let output = run(&[input.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid ESTree JSON"));
}

#[test]
fn test_missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("absent.json");
    let output = run(&[absent.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read"));
}
