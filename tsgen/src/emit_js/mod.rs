/// Base registry: emission procedures for the untyped grammar.
mod declarations;
mod expressions;
mod modules;
mod statements;

pub(crate) use declarations::{
    format_arrow_body, format_function_head, format_key, format_superclass, format_variable_declaration,
    is_function_key, MethodParts,
};
pub(crate) use expressions::{
    format_elements, format_new_callee, format_object_pattern, format_operand, format_template,
};
pub(crate) use modules::{format_export_all, format_export_named, format_import};
pub(crate) use statements::format_block;

use crate::ast::NodeKind;
use crate::registry::Registry;

/// The base registry covering every untyped node kind.
pub fn registry() -> Registry {
    use NodeKind::*;

    let mut registry = Registry::new();
    registry
        // Statements
        .register(Program, statements::program)
        .register_all(&[BlockStatement, ClassBody], statements::block_statement)
        .register(StaticBlock, statements::static_block)
        .register(EmptyStatement, statements::empty_statement)
        .register(ExpressionStatement, statements::expression_statement)
        .register(IfStatement, statements::if_statement)
        .register(LabeledStatement, statements::labeled_statement)
        .register_all(&[BreakStatement, ContinueStatement], statements::jump_statement)
        .register(WithStatement, statements::with_statement)
        .register(SwitchStatement, statements::switch_statement)
        .register(ReturnStatement, statements::return_statement)
        .register(ThrowStatement, statements::throw_statement)
        .register(TryStatement, statements::try_statement)
        .register(WhileStatement, statements::while_statement)
        .register(DoWhileStatement, statements::do_while_statement)
        .register(ForStatement, statements::for_statement)
        .register_all(&[ForInStatement, ForOfStatement], statements::for_in_statement)
        .register(DebuggerStatement, statements::debugger_statement)
        // Declarations
        .register_all(&[FunctionDeclaration, FunctionExpression], declarations::function_declaration)
        .register(VariableDeclaration, declarations::variable_declaration)
        .register(VariableDeclarator, declarations::variable_declarator)
        .register(ClassDeclaration, declarations::class_declaration)
        .register(ClassExpression, declarations::class_expression)
        .register(MethodDefinition, declarations::method_definition)
        .register(PropertyDefinition, declarations::property_definition)
        .register(Property, declarations::property)
        .register(ArrowFunctionExpression, declarations::arrow_function)
        // Modules
        .register(ImportDeclaration, modules::import_declaration)
        .register(ImportExpression, modules::import_expression)
        .register(ImportAttribute, modules::import_attribute)
        .register(ExportDefaultDeclaration, modules::export_default_declaration)
        .register(ExportNamedDeclaration, modules::export_named_declaration)
        .register(ExportAllDeclaration, modules::export_all_declaration)
        // Expressions and patterns
        .register(ThisExpression, expressions::this_expression)
        .register(Super, expressions::super_keyword)
        .register_all(&[RestElement, SpreadElement], expressions::rest_element)
        .register(YieldExpression, expressions::yield_expression)
        .register(AwaitExpression, expressions::await_expression)
        .register(TemplateLiteral, expressions::template_literal)
        .register(TemplateElement, expressions::template_element)
        .register(TaggedTemplateExpression, expressions::tagged_template)
        .register_all(&[ArrayExpression, ArrayPattern], expressions::array_expression)
        .register(ObjectExpression, expressions::object_expression)
        .register(ObjectPattern, expressions::object_pattern)
        .register(SequenceExpression, expressions::sequence_expression)
        .register(UnaryExpression, expressions::unary_expression)
        .register(UpdateExpression, expressions::update_expression)
        .register(AssignmentExpression, expressions::assignment_expression)
        .register(AssignmentPattern, expressions::assignment_pattern)
        .register_all(&[BinaryExpression, LogicalExpression], expressions::binary_expression)
        .register(ConditionalExpression, expressions::conditional_expression)
        .register(NewExpression, expressions::new_expression)
        .register(CallExpression, expressions::call_expression)
        .register(ChainExpression, expressions::chain_expression)
        .register(MemberExpression, expressions::member_expression)
        .register(MetaProperty, expressions::meta_property)
        .register(Identifier, expressions::identifier)
        .register(PrivateIdentifier, expressions::private_identifier)
        .register(Literal, expressions::literal)
        .register(RegExpLiteral, expressions::regexp_literal);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Node;
    use crate::context::EmitState;
    use crate::error::GenerateError;
    use crate::precedence::PrecedenceTable;
    use crate::writer::CodeWriter;
    use serde_json::{json, Value};

    fn try_emit(value: Value) -> Result<String, GenerateError> {
        let registry = registry();
        let precedence = PrecedenceTable::javascript();
        let mut state = EmitState::new(&registry, &precedence, CodeWriter::new());
        state.emit(&Node::from_value(value)?)?;
        Ok(state.finish())
    }

    fn emit(value: Value) -> String {
        try_emit(value).unwrap()
    }

    fn id(name: &str) -> Value {
        json!({"type": "Identifier", "name": name})
    }

    fn raw(text: &str) -> Value {
        json!({"type": "Literal", "value": null, "raw": text})
    }

    fn binary(operator: &str, left: Value, right: Value) -> Value {
        json!({"type": "BinaryExpression", "operator": operator, "left": left, "right": right})
    }

    fn unary(operator: &str, argument: Value) -> Value {
        json!({"type": "UnaryExpression", "operator": operator, "prefix": true, "argument": argument})
    }

    fn block(body: Vec<Value>) -> Value {
        json!({"type": "BlockStatement", "body": body})
    }

    fn function(params: Vec<Value>, body: Vec<Value>) -> Value {
        json!({"type": "FunctionExpression", "id": null, "params": params, "body": block(body)})
    }

    // ── Statement tests ────────────────────────────────────────────────

    #[test]
    fn test_switch_indentation() {
        let node = json!({
            "type": "Program",
            "body": [{
                "type": "SwitchStatement",
                "discriminant": id("x"),
                "cases": [
                    {"type": "SwitchCase", "test": raw("1"), "consequent": [{"type": "BreakStatement", "label": null}]},
                    {"type": "SwitchCase", "test": null, "consequent": [{"type": "ReturnStatement", "argument": null}]}
                ]
            }]
        });
        assert_eq!(
            emit(node),
            "switch (x) {\n  case 1:\n    break;\n  default:\n    return;\n}\n"
        );
    }

    #[test]
    fn test_labeled_loop() {
        let node = json!({
            "type": "LabeledStatement",
            "label": id("outer"),
            "body": {
                "type": "WhileStatement",
                "test": id("x"),
                "body": block(vec![json!({"type": "ContinueStatement", "label": id("outer")})])
            }
        });
        assert_eq!(emit(node), "outer: while (x) {\n  continue outer;\n}");
    }

    #[test]
    fn test_for_head_declaration() {
        let node = json!({
            "type": "ForStatement",
            "init": {
                "type": "VariableDeclaration",
                "kind": "let",
                "declarations": [{"type": "VariableDeclarator", "id": id("i"), "init": raw("0")}]
            },
            "test": binary("<", id("i"), id("n")),
            "update": {"type": "UpdateExpression", "operator": "++", "prefix": false, "argument": id("i")},
            "body": block(vec![])
        });
        assert_eq!(emit(node), "for (let i = 0; i < n; i++) {}");
    }

    #[test]
    fn test_for_await_of() {
        let node = json!({
            "type": "ForOfStatement",
            "await": true,
            "left": {
                "type": "VariableDeclaration",
                "kind": "const",
                "declarations": [{"type": "VariableDeclarator", "id": id("x")}]
            },
            "right": id("xs"),
            "body": block(vec![])
        });
        assert_eq!(emit(node), "for await (const x of xs) {}");
    }

    #[test]
    fn test_try_catch_finally() {
        let node = json!({
            "type": "TryStatement",
            "block": block(vec![]),
            "handler": {"type": "CatchClause", "param": id("e"), "body": block(vec![])},
            "finalizer": block(vec![])
        });
        assert_eq!(emit(node), "try {} catch (e) {} finally {}");
        let bare = json!({
            "type": "TryStatement",
            "block": block(vec![]),
            "handler": {"type": "CatchClause", "param": null, "body": block(vec![])}
        });
        assert_eq!(emit(bare), "try {} catch {}");
    }

    #[test]
    fn test_statement_disambiguation() {
        let function_statement = json!({"type": "ExpressionStatement", "expression": function(vec![], vec![])});
        assert_eq!(emit(function_statement), "(function () {});");
        let destructuring = json!({
            "type": "ExpressionStatement",
            "expression": {
                "type": "AssignmentExpression",
                "operator": "=",
                "left": {"type": "ObjectPattern", "properties": [
                    {"type": "Property", "key": id("a"), "value": id("a"), "shorthand": true}
                ]},
                "right": id("b")
            }
        });
        assert_eq!(emit(destructuring), "({a} = b);");
    }

    // ── Expression tests ───────────────────────────────────────────────

    #[test]
    fn test_unary_spacing() {
        assert_eq!(emit(unary("-", unary("-", id("a")))), "- -a");
        assert_eq!(emit(unary("-", unary("+", id("a")))), "-+a");
        assert_eq!(emit(unary("typeof", id("x"))), "typeof x");
        let and = json!({"type": "LogicalExpression", "operator": "&&", "left": id("a"), "right": id("b")});
        assert_eq!(emit(unary("!", and.clone())), "!(a && b)");
        assert_eq!(emit(unary("void", and)), "void (a && b)");
    }

    #[test]
    fn test_binary_associativity() {
        let nested_right = binary("-", id("a"), binary("-", id("b"), id("c")));
        assert_eq!(emit(nested_right), "a - (b - c)");
        let nested_left = binary("-", binary("-", id("a"), id("b")), id("c"));
        assert_eq!(emit(nested_left), "a - b - c");
        let lower = binary("*", binary("+", id("a"), id("b")), id("c"));
        assert_eq!(emit(lower), "(a + b) * c");
        let power = binary("**", id("a"), binary("**", id("b"), id("c")));
        assert_eq!(emit(power), "a ** b ** c");
        let power_left = binary("**", binary("**", id("a"), id("b")), id("c"));
        assert_eq!(emit(power_left), "(a ** b) ** c");
    }

    #[test]
    fn test_in_is_wrapped() {
        assert_eq!(emit(binary("in", id("a"), id("b"))), "(a in b)");
    }

    #[test]
    fn test_conditional_test_parentheses() {
        let node = json!({
            "type": "ConditionalExpression",
            "test": {"type": "AssignmentExpression", "operator": "=", "left": id("a"), "right": id("b")},
            "consequent": id("c"),
            "alternate": id("d")
        });
        assert_eq!(emit(node), "(a = b) ? c : d");
    }

    #[test]
    fn test_new_callee() {
        let call = json!({"type": "CallExpression", "callee": id("a"), "arguments": []});
        let new_call = json!({"type": "NewExpression", "callee": call, "arguments": []});
        assert_eq!(emit(new_call), "new (a())()");
        let member = json!({"type": "MemberExpression", "object": id("a"), "property": id("b")});
        let new_member = json!({"type": "NewExpression", "callee": member, "arguments": [raw("1")]});
        assert_eq!(emit(new_member), "new a.b(1)");
    }

    #[test]
    fn test_optional_chains() {
        let node = json!({
            "type": "ChainExpression",
            "expression": {
                "type": "CallExpression",
                "optional": true,
                "callee": {"type": "MemberExpression", "object": id("a"), "property": raw("0"), "computed": true, "optional": true},
                "arguments": []
            }
        });
        assert_eq!(emit(node), "a?.[0]?.()");
    }

    #[test]
    fn test_call_on_function_expression() {
        let node = json!({"type": "CallExpression", "callee": function(vec![], vec![]), "arguments": []});
        assert_eq!(emit(node), "(function () {})()");
    }

    #[test]
    fn test_await_operand() {
        let or = json!({"type": "LogicalExpression", "operator": "||", "left": id("a"), "right": id("b")});
        assert_eq!(emit(json!({"type": "AwaitExpression", "argument": or})), "await (a || b)");
    }

    #[test]
    fn test_arrow_parameters() {
        let single = json!({"type": "ArrowFunctionExpression", "params": [id("x")], "body": id("x")});
        assert_eq!(emit(single), "x => x");
        let pair = json!({"type": "ArrowFunctionExpression", "async": true, "params": [id("a"), id("b")], "body": id("a")});
        assert_eq!(emit(pair), "async (a, b) => a");
    }

    #[test]
    fn test_nested_object_layout() {
        let node = json!({
            "type": "ObjectExpression",
            "properties": [
                {"type": "Property", "key": id("a"), "value": raw("1")},
                {"type": "Property", "key": id("b"), "value": {"type": "ObjectExpression", "properties": [
                    {"type": "Property", "key": id("c"), "value": raw("2")}
                ]}},
                {"type": "Property", "key": id("k"), "computed": true, "value": raw("3")},
                {"type": "Property", "key": id("v"), "kind": "get", "value": function(vec![], vec![])}
            ]
        });
        assert_eq!(emit(node), "{\n  a: 1,\n  b: {\n    c: 2\n  },\n  [k]: 3,\n  get v() {}\n}");
    }

    #[test]
    fn test_array_holes() {
        let node = json!({"type": "ArrayExpression", "elements": [null, id("a"), null]});
        assert_eq!(emit(node), "[, a, , ]");
    }

    #[test]
    fn test_template_literals() {
        let quasi = |text: &str| json!({"type": "TemplateElement", "value": {"raw": text, "cooked": text}});
        let template = json!({"type": "TemplateLiteral", "quasis": [quasi("a"), quasi("b")], "expressions": [id("x")]});
        assert_eq!(emit(template.clone()), "`a${x}b`");
        let tagged = json!({
            "type": "TaggedTemplateExpression",
            "tag": {"type": "MemberExpression", "object": id("html"), "property": id("raw")},
            "quasi": template
        });
        assert_eq!(emit(tagged), "html.raw`a${x}b`");
        let broken = json!({"type": "TemplateLiteral", "quasis": [quasi("a")], "expressions": [id("x")]});
        assert!(matches!(
            try_emit(broken),
            Err(GenerateError::MalformedNode { kind: NodeKind::TemplateLiteral, .. })
        ));
    }

    #[test]
    fn test_literal_forms() {
        assert_eq!(emit(json!({"type": "Literal", "value": "s"})), "\"s\"");
        assert_eq!(emit(json!({"type": "Literal", "value": 1.5})), "1.5");
        assert_eq!(emit(json!({"type": "Literal", "value": null})), "null");
        let regex = json!({"type": "Literal", "value": {}, "regex": {"pattern": "a+", "flags": "g"}});
        assert_eq!(emit(regex), "/a+/g");
        assert_eq!(emit(json!({"type": "Literal", "value": null, "bigint": "10"})), "10n");
        assert_eq!(emit(json!({"type": "Literal", "value": "x", "raw": "'x'"})), "'x'");
    }

    #[test]
    fn test_misc_expressions() {
        let meta = json!({"type": "MetaProperty", "meta": id("new"), "property": id("target")});
        assert_eq!(emit(meta), "new.target");
        let private = json!({
            "type": "MemberExpression",
            "object": {"type": "ThisExpression"},
            "property": {"type": "PrivateIdentifier", "name": "x"}
        });
        assert_eq!(emit(private), "this.#x");
        let spread = json!({
            "type": "CallExpression",
            "callee": id("f"),
            "arguments": [{"type": "SpreadElement", "argument": id("xs")}]
        });
        assert_eq!(emit(spread), "f(...xs)");
        let sequence = json!({"type": "SequenceExpression", "expressions": [id("a"), id("b")]});
        assert_eq!(emit(sequence), "(a, b)");
        let delegate = json!({"type": "YieldExpression", "delegate": true, "argument": id("g")});
        assert_eq!(emit(delegate), "yield* g");
    }

    // ── Declaration tests ──────────────────────────────────────────────

    #[test]
    fn test_class_members() {
        let node = json!({
            "type": "ClassDeclaration",
            "id": id("A"),
            "superClass": {"type": "LogicalExpression", "operator": "||", "left": id("B"), "right": id("C")},
            "body": {"type": "ClassBody", "body": [
                {"type": "PropertyDefinition", "key": id("x"), "static": true, "value": raw("1")},
                {"type": "PropertyDefinition", "key": {"type": "PrivateIdentifier", "name": "y"}, "value": null},
                {"type": "MethodDefinition", "key": id("m"), "kind": "method", "value": function(vec![], vec![])},
                {"type": "StaticBlock", "body": []}
            ]}
        });
        assert_eq!(
            emit(node),
            "class A extends (B || C) {\n  static x = 1;\n  #y;\n  m() {}\n  static {}\n}"
        );
    }

    #[test]
    fn test_generator_method() {
        let node = json!({
            "type": "MethodDefinition",
            "key": id("items"),
            "static": true,
            "value": {"type": "FunctionExpression", "async": true, "generator": true, "params": [], "body": block(vec![])}
        });
        assert_eq!(emit(node), "static async *items() {}");
    }

    // ── Module tests ───────────────────────────────────────────────────

    #[test]
    fn test_import_forms() {
        let attributes = json!({
            "type": "ImportDeclaration",
            "specifiers": [{"type": "ImportDefaultSpecifier", "local": id("data")}],
            "source": raw("\"./d.json\""),
            "attributes": [{"type": "ImportAttribute", "key": id("type"), "value": raw("\"json\"")}]
        });
        assert_eq!(emit(attributes), "import data from \"./d.json\" with { type: \"json\" };");
        let namespace = json!({
            "type": "ImportDeclaration",
            "specifiers": [{"type": "ImportNamespaceSpecifier", "local": id("ns")}],
            "source": raw("\"m\"")
        });
        assert_eq!(emit(namespace), "import * as ns from \"m\";");
        let bare = json!({"type": "ImportDeclaration", "specifiers": [], "source": raw("\"polyfill\"")});
        assert_eq!(emit(bare), "import \"polyfill\";");
    }

    #[test]
    fn test_base_import_ignores_kinds() {
        let node = json!({
            "type": "ImportDeclaration",
            "importKind": "type",
            "specifiers": [{"type": "ImportSpecifier", "imported": id("T"), "local": id("T")}],
            "source": raw("\"m\"")
        });
        assert_eq!(emit(node), "import {T} from \"m\";");
    }

    #[test]
    fn test_export_forms() {
        let default_expression = json!({"type": "ExportDefaultDeclaration", "declaration": binary("+", id("a"), id("b"))});
        assert_eq!(emit(default_expression), "export default a + b;");
        let default_function = json!({
            "type": "ExportDefaultDeclaration",
            "declaration": {"type": "FunctionDeclaration", "id": null, "params": [], "body": block(vec![])}
        });
        assert_eq!(emit(default_function), "export default function () {}");
        let default_class = json!({
            "type": "ExportDefaultDeclaration",
            "declaration": {"type": "ClassExpression", "id": null, "body": {"type": "ClassBody", "body": []}}
        });
        assert_eq!(emit(default_class), "export default class {}");
        let reexport = json!({
            "type": "ExportNamedDeclaration",
            "declaration": null,
            "specifiers": [
                {"type": "ExportSpecifier", "local": id("a"), "exported": id("a")},
                {"type": "ExportSpecifier", "local": id("b"), "exported": {"type": "Literal", "value": "c d", "raw": "\"c d\""}}
            ],
            "source": raw("\"m\"")
        });
        assert_eq!(emit(reexport), "export {a, b as \"c d\"} from \"m\";");
        let star = json!({"type": "ExportAllDeclaration", "exported": null, "source": raw("\"m\"")});
        assert_eq!(emit(star), "export * from \"m\";");
    }

    #[test]
    fn test_inline_export_declaration() {
        let node = json!({
            "type": "ExportNamedDeclaration",
            "declaration": {
                "type": "VariableDeclaration",
                "kind": "const",
                "declarations": [{"type": "VariableDeclarator", "id": id("x"), "init": raw("1")}]
            },
            "specifiers": []
        });
        assert_eq!(emit(node), "export const x = 1;");
    }
}
