/// Interfaces, type literals and their members, type aliases and enums.
use crate::ast::Node;
use crate::context::EmitState;
use crate::emit_js::format_key;
use crate::error::{expect_node, Result};
use crate::format::{format_sequence, identifier_name};

pub(super) fn interface_declaration(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let interface = expect_node!(node, TSInterfaceDeclaration);
    if interface.declare {
        state.write("declare ");
    }
    state.write("interface ");
    state.write(identifier_name(&interface.id)?);
    if let Some(type_parameters) = &interface.type_parameters {
        state.emit(type_parameters)?;
    }
    state.write(" ");
    if !interface.extends.is_empty() {
        state.write("extends ");
        state.emit_joined(&interface.extends, ", ")?;
        state.write(" ");
    }
    state.emit(&interface.body)
}

/// One member per line, each closed by `;`.
pub(super) fn interface_body(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let body = expect_node!(node, TSInterfaceBody);
    state.write("{");
    if body.body.is_empty() {
        state.write("}");
        return Ok(());
    }
    state.writer().indent();
    state.writer().line_end();
    for member in &body.body {
        state.writer().write_indent();
        state.emit(member)?;
        state.write(";");
        state.writer().line_end();
    }
    state.writer().dedent();
    state.writer().write_indent();
    state.write("}");
    Ok(())
}

/// `extends`/`implements` clause entries: `Base<T>`.
pub(super) fn heritage(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let heritage = expect_node!(node, TSInterfaceHeritage | TSExpressionWithTypeArguments | TSClassImplements);
    state.emit(&heritage.expression)?;
    if let Some(arguments) = &heritage.type_arguments {
        state.emit(arguments)?;
    }
    Ok(())
}

/// Inline object types stay on one line: `{a: string; b?: number}`.
pub(super) fn type_literal(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let literal = expect_node!(node, TSTypeLiteral);
    state.write("{");
    state.emit_joined(&literal.members, "; ")?;
    state.write("}");
    Ok(())
}

pub(super) fn property_signature(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let property = expect_node!(node, TSPropertySignature);
    if property.is_static {
        state.write("static ");
    }
    if property.readonly {
        state.write("readonly ");
    }
    format_key(state, &property.key, property.computed)?;
    if property.optional {
        state.write("?");
    }
    state.emit_annotation(property.type_annotation.as_deref())
}

pub(super) fn method_signature(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let method = expect_node!(node, TSMethodSignature);
    if method.kind == "get" || method.kind == "set" {
        state.write(&method.kind);
        state.write(" ");
    }
    format_key(state, &method.key, method.computed)?;
    if method.optional {
        state.write("?");
    }
    if let Some(type_parameters) = &method.type_parameters {
        state.emit(type_parameters)?;
    }
    format_sequence(state, &method.params)?;
    state.emit_annotation(method.return_type.as_deref())
}

pub(super) fn index_signature(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let index = expect_node!(node, TSIndexSignature);
    if index.is_static {
        state.write("static ");
    }
    if index.readonly {
        state.write("readonly ");
    }
    state.write("[");
    state.emit_joined(&index.parameters, ", ")?;
    state.write("]");
    state.emit_annotation(index.type_annotation.as_deref())
}

/// Call signatures `<T>(x: T): R` and construct signatures `new (x): R`.
pub(super) fn call_signature(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let signature = expect_node!(node, TSCallSignatureDeclaration | TSConstructSignatureDeclaration);
    if matches!(node, Node::TSConstructSignatureDeclaration(_)) {
        state.write("new ");
    }
    if let Some(type_parameters) = &signature.type_parameters {
        state.emit(type_parameters)?;
    }
    format_sequence(state, &signature.params)?;
    state.emit_annotation(signature.return_type.as_deref())
}

pub(super) fn type_alias_declaration(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let alias = expect_node!(node, TSTypeAliasDeclaration);
    if alias.declare {
        state.write("declare ");
    }
    state.write("type ");
    state.write(identifier_name(&alias.id)?);
    if let Some(type_parameters) = &alias.type_parameters {
        state.emit(type_parameters)?;
    }
    state.write(" = ");
    state.emit(&alias.type_annotation)?;
    state.write(";");
    Ok(())
}

pub(super) fn enum_declaration(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let declaration = expect_node!(node, TSEnumDeclaration);
    if declaration.declare {
        state.write("declare ");
    }
    if declaration.is_const {
        state.write("const ");
    }
    state.write("enum ");
    state.write(identifier_name(&declaration.id)?);
    state.write(" {");
    state.emit_joined(declaration.members(), ", ")?;
    state.write("}");
    Ok(())
}

pub(super) fn enum_member(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let member = expect_node!(node, TSEnumMember);
    format_key(state, &member.id, member.computed)?;
    if let Some(initializer) = &member.initializer {
        state.write(" = ");
        state.emit(initializer)?;
    }
    Ok(())
}
