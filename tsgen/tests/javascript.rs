/// Integration tests: untyped programs through the base grammar.
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tsgen::{GenerateError, GenerateOptions, Generator, Node, NodeKind};

fn id(name: &str) -> Value {
    json!({"type": "Identifier", "name": name})
}

fn raw(text: &str) -> Value {
    json!({"type": "Literal", "value": null, "raw": text})
}

fn block(body: Vec<Value>) -> Value {
    json!({"type": "BlockStatement", "body": body})
}

fn statement(expression: Value) -> Value {
    json!({"type": "ExpressionStatement", "expression": expression})
}

fn program(body: Vec<Value>) -> Node {
    Node::from_value(json!({"type": "Program", "sourceType": "module", "body": body})).unwrap()
}

fn range_generator() -> Value {
    json!({
        "type": "FunctionDeclaration",
        "id": id("range"),
        "generator": true,
        "params": [id("n")],
        "body": block(vec![json!({
            "type": "ForStatement",
            "init": {
                "type": "VariableDeclaration",
                "kind": "let",
                "declarations": [{"type": "VariableDeclarator", "id": id("i"), "init": raw("0")}]
            },
            "test": {"type": "BinaryExpression", "operator": "<", "left": id("i"), "right": id("n")},
            "update": {"type": "UpdateExpression", "operator": "++", "prefix": false, "argument": id("i")},
            "body": block(vec![statement(json!({"type": "YieldExpression", "argument": id("i"), "delegate": false}))])
        })])
    })
}

fn guard() -> Value {
    let log = json!({
        "type": "CallExpression",
        "callee": {"type": "MemberExpression", "object": id("console"), "property": id("log")},
        "arguments": [{
            "type": "TemplateLiteral",
            "quasis": [
                {"type": "TemplateElement", "value": {"raw": "done ", "cooked": "done "}, "tail": false},
                {"type": "TemplateElement", "value": {"raw": "", "cooked": ""}, "tail": true}
            ],
            "expressions": [id("n")]
        }]
    });
    json!({
        "type": "IfStatement",
        "test": {"type": "UnaryExpression", "operator": "!", "prefix": true, "argument": id("ok")},
        "consequent": block(vec![json!({
            "type": "ThrowStatement",
            "argument": {"type": "NewExpression", "callee": id("Error"), "arguments": [raw("\"x\"")]}
        })]),
        "alternate": block(vec![statement(log)])
    })
}

#[test]
fn test_module_program() {
    let root = program(vec![
        json!({"type": "ExpressionStatement", "expression": raw("\"use strict\""), "directive": "use strict"}),
        json!({
            "type": "VariableDeclaration",
            "kind": "const",
            "declarations": [{
                "type": "VariableDeclarator",
                "id": id("add"),
                "init": {
                    "type": "ArrowFunctionExpression",
                    "params": [id("a"), id("b")],
                    "expression": true,
                    "body": {"type": "BinaryExpression", "operator": "+", "left": id("a"), "right": id("b")}
                }
            }]
        }),
        range_generator(),
        guard(),
        json!({
            "type": "ExportDefaultDeclaration",
            "declaration": {"type": "ClassDeclaration", "id": null, "superClass": id("Base"), "body": {"type": "ClassBody", "body": []}}
        }),
    ]);
    let expected = "\
\"use strict\";
const add = (a, b) => a + b;
function* range(n) {
  for (let i = 0; i < n; i++) {
    yield i;
  }
}
if (!ok) {
  throw new Error(\"x\");
} else {
  console.log(`done ${n}`);
}
export default class extends Base {}
";
    assert_eq!(Generator::javascript().generate(&root).unwrap(), expected);
}

#[test]
fn test_tab_indentation() {
    let generator = Generator::javascript().with_options(GenerateOptions {
        indent: "\t".into(),
        ..GenerateOptions::default()
    });
    let root = program(vec![range_generator()]);
    assert_eq!(
        generator.generate(&root).unwrap(),
        "function* range(n) {\n\tfor (let i = 0; i < n; i++) {\n\t\tyield i;\n\t}\n}\n"
    );
}

#[test]
fn test_typed_grammar_accepts_plain_programs() {
    let root = program(vec![guard()]);
    let plain = Generator::javascript().generate(&root).unwrap();
    let typed = Generator::typescript().generate(&root).unwrap();
    assert_eq!(plain, typed);
}

#[test]
fn test_annotation_is_unsupported() {
    let root = program(vec![json!({
        "type": "TSTypeAliasDeclaration",
        "id": id("A"),
        "typeAnnotation": {"type": "TSStringKeyword"}
    })]);
    let err = Generator::javascript().generate(&root).unwrap_err();
    assert_eq!(err.kind(), Some(NodeKind::TSTypeAliasDeclaration));
    assert!(matches!(err, GenerateError::UnsupportedNodeType { .. }));
}

#[test]
fn test_precedence_is_kept_through_nesting() {
    // (a + b) * c, a ** -b needs no wrapping, (-a) ** b does
    let product = json!({
        "type": "BinaryExpression",
        "operator": "*",
        "left": {"type": "BinaryExpression", "operator": "+", "left": id("a"), "right": id("b")},
        "right": id("c")
    });
    let negative = |operand: &str| json!({"type": "UnaryExpression", "operator": "-", "prefix": true, "argument": id(operand)});
    let power_of_negative = json!({"type": "BinaryExpression", "operator": "**", "left": id("a"), "right": negative("b")});
    let negative_base = json!({"type": "BinaryExpression", "operator": "**", "left": negative("a"), "right": id("b")});
    let root = program(vec![statement(product), statement(power_of_negative), statement(negative_base)]);
    assert_eq!(
        Generator::javascript().generate(&root).unwrap(),
        "(a + b) * c;\na ** -b;\n(-a) ** b;\n"
    );
}
