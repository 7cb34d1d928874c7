/// Typed overrides for bindings, functions and classes.
use crate::ast::{Function, Identifier, Node, NodeKind};
use crate::context::EmitState;
use crate::emit_js::{
    format_arrow_body, format_function_head, format_key, format_superclass, format_variable_declaration,
    is_function_key, MethodParts,
};
use crate::error::{expect_node, GenerateError, Result};
use crate::format::{format_sequence, identifier_name};

/// Decorators on declarations and members stand on their own lines.
pub(super) fn format_decorator_lines(state: &mut EmitState<'_>, decorators: &[Node]) -> Result<()> {
    for decorator in decorators {
        state.emit(decorator)?;
        state.writer().line_end();
        state.writer().write_indent();
    }
    Ok(())
}

/// Parameter decorators share the line: `@Inject() x`.
fn format_inline_decorators(state: &mut EmitState<'_>, decorators: &[Node]) -> Result<()> {
    for decorator in decorators {
        state.emit(decorator)?;
        state.write(" ");
    }
    Ok(())
}

/// Decorators, name, `!`, `?`, then the annotation. `definite` comes from
/// the enclosing declarator.
pub(super) fn format_identifier(state: &mut EmitState<'_>, identifier: &Identifier, definite: bool) -> Result<()> {
    format_inline_decorators(state, &identifier.decorators)?;
    state.write(&identifier.name);
    if definite {
        state.write("!");
    }
    if identifier.optional {
        state.write("?");
    }
    state.emit_annotation(identifier.type_annotation.as_deref())
}

pub(super) fn identifier(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let identifier = expect_node!(node, Identifier);
    format_identifier(state, identifier, false)
}

pub(super) fn variable_declaration(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let declaration = expect_node!(node, VariableDeclaration);
    if declaration.declare {
        state.write("declare ");
    }
    format_variable_declaration(state, declaration)?;
    state.write(";");
    Ok(())
}

pub(super) fn variable_declarator(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let declarator = expect_node!(node, VariableDeclarator);
    match &*declarator.id {
        Node::Identifier(identifier) if declarator.definite => format_identifier(state, identifier, true)?,
        id => state.emit(id)?,
    }
    if let Some(init) = &declarator.init {
        state.write(" = ");
        state.emit(init)?;
    }
    Ok(())
}

/// Type parameters, parameter list and return annotation.
fn format_signature(state: &mut EmitState<'_>, function: &Function) -> Result<()> {
    if let Some(type_parameters) = &function.type_parameters {
        state.emit(type_parameters)?;
    }
    format_sequence(state, &function.params)?;
    state.emit_annotation(function.return_type.as_deref())
}

pub(super) fn function_declaration(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let function = expect_node!(node, FunctionDeclaration | FunctionExpression);
    format_function_head(state, function)?;
    format_signature(state, function)?;
    state.write(" ");
    let body = function
        .body
        .as_deref()
        .ok_or_else(|| GenerateError::unexpected(node, "a function body"))?;
    state.emit(body)
}

/// Overload signatures and ambient functions: no body, no terminator.
pub(super) fn declare_function(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let function = expect_node!(node, TSDeclareFunction | TSEmptyBodyFunctionExpression);
    if function.declare {
        state.write("declare ");
    }
    format_function_head(state, function)?;
    format_signature(state, function)
}

/// Type parameters, `async`, the parameter list (always parenthesized) and
/// the return annotation.
pub(super) fn arrow_function(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let arrow = expect_node!(node, ArrowFunctionExpression);
    if let Some(type_parameters) = &arrow.type_parameters {
        state.emit(type_parameters)?;
    }
    if arrow.is_async {
        state.write("async ");
    }
    format_sequence(state, &arrow.params)?;
    state.emit_annotation(arrow.return_type.as_deref())?;
    format_arrow_body(state, &arrow.body)
}

pub(super) fn class_declaration(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let class = expect_node!(node, ClassDeclaration | ClassExpression);
    format_decorator_lines(state, &class.decorators)?;
    if class.declare {
        state.write("declare ");
    }
    if class.is_abstract {
        state.write("abstract ");
    }
    state.write("class");
    if let Some(id) = &class.id {
        state.write(" ");
        state.write(identifier_name(id)?);
    }
    if let Some(type_parameters) = &class.type_parameters {
        state.emit(type_parameters)?;
    }
    state.write(" ");
    if let Some(super_class) = &class.super_class {
        format_superclass(state, super_class)?;
        if let Some(arguments) = &class.super_type_arguments {
            state.emit(arguments)?;
        }
        state.write(" ");
    }
    if !class.implements.is_empty() {
        state.write("implements ");
        state.emit_joined(&class.implements, ", ")?;
        state.write(" ");
    }
    state.emit_as(NodeKind::ClassBody, &class.body)
}

/// Fields and auto-accessors, abstract or not.
pub(super) fn class_property(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let field = expect_node!(
        node,
        PropertyDefinition | AccessorProperty | TSAbstractPropertyDefinition | TSAbstractAccessorProperty
    );
    let kind = node.kind();
    format_decorator_lines(state, &field.decorators)?;
    if field.declare {
        state.write("declare ");
    }
    if field.is_static {
        state.write("static ");
    }
    if field.is_abstract || matches!(kind, NodeKind::TSAbstractPropertyDefinition | NodeKind::TSAbstractAccessorProperty) {
        state.write("abstract ");
    }
    if field.is_override {
        state.write("override ");
    }
    if matches!(kind, NodeKind::AccessorProperty | NodeKind::TSAbstractAccessorProperty) {
        state.write("accessor ");
    }
    if let Some(accessibility) = &field.accessibility {
        state.write(accessibility);
        state.write(" ");
    }
    if field.readonly {
        state.write("readonly ");
    }
    format_key(state, &field.key, field.computed)?;
    if field.definite {
        state.write("!");
    }
    if field.optional {
        state.write("?");
    }
    state.emit_annotation(field.type_annotation.as_deref())?;
    match &field.value {
        Some(value) => {
            state.write(" = ");
            state.emit(value)?;
            state.write(";");
        }
        None if !is_function_key(&field.key) => state.write(";"),
        None => {}
    }
    Ok(())
}

/// Class methods, abstract methods and object-literal methods.
pub(super) fn method_definition(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let method = MethodParts::of(node)?;
    let definition = method.definition;
    if let Some(definition) = definition {
        format_decorator_lines(state, &definition.decorators)?;
    }
    if method.is_static {
        state.write("static ");
    }
    if let Some(definition) = definition {
        if definition.is_abstract || node.kind() == NodeKind::TSAbstractMethodDefinition {
            state.write("abstract ");
        }
        if definition.is_override {
            state.write("override ");
        }
        if let Some(accessibility) = &definition.accessibility {
            state.write(accessibility);
            state.write(" ");
        }
    }
    method.write_signature_head(state)?;
    if let Some(definition) = definition {
        if definition.optional {
            state.write("?");
        }
        if let Some(type_parameters) = &definition.type_parameters {
            state.emit(type_parameters)?;
        }
    }
    format_signature(state, method.value)?;
    match &method.value.body {
        Some(body) => {
            state.write(" ");
            state.emit(body)
        }
        None => {
            state.write(";");
            Ok(())
        }
    }
}

/// Constructor parameters that declare fields: `private readonly x: T`.
pub(super) fn parameter_property(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let parameter = expect_node!(node, TSParameterProperty);
    format_inline_decorators(state, &parameter.decorators)?;
    if let Some(accessibility) = &parameter.accessibility {
        state.write(accessibility);
        state.write(" ");
    }
    if parameter.is_static {
        state.write("static ");
    }
    if parameter.is_override {
        state.write("override ");
    }
    if parameter.readonly {
        state.write("readonly ");
    }
    state.emit(&parameter.parameter)
}

pub(super) fn decorator(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let decorator = expect_node!(node, Decorator);
    state.write("@");
    state.emit(&decorator.expression)
}
