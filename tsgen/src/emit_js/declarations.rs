/// Declaration procedures: functions, variables, classes and their members.
use crate::ast::{Function, MethodDefinition, Node, NodeKind, VariableDeclaration};
use crate::context::EmitState;
use crate::error::{expect_node, GenerateError, Result};
use crate::format::{format_sequence, identifier_name, ranks_below};

/// Write `<kind> a = 1, b` without the trailing `;`, so loop heads can
/// reuse it.
pub(crate) fn format_variable_declaration(state: &mut EmitState<'_>, declaration: &VariableDeclaration) -> Result<()> {
    state.write(&declaration.kind);
    state.write(" ");
    for (i, declarator) in declaration.declarations.iter().enumerate() {
        if i > 0 {
            state.write(", ");
        }
        state.emit_as(NodeKind::VariableDeclarator, declarator)?;
    }
    Ok(())
}

/// `async function* name`, everything up to the type parameters.
pub(crate) fn format_function_head(state: &mut EmitState<'_>, function: &Function) -> Result<()> {
    if function.is_async {
        state.write("async ");
    }
    state.write(if function.generator { "function* " } else { "function " });
    if let Some(id) = &function.id {
        state.write(identifier_name(id)?);
    }
    Ok(())
}

pub(super) fn function_declaration(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let function = expect_node!(node, FunctionDeclaration | FunctionExpression);
    format_function_head(state, function)?;
    format_sequence(state, &function.params)?;
    state.write(" ");
    let body = function
        .body
        .as_deref()
        .ok_or_else(|| GenerateError::unexpected(node, "a function body"))?;
    state.emit(body)
}

pub(super) fn variable_declaration(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let declaration = expect_node!(node, VariableDeclaration);
    format_variable_declaration(state, declaration)?;
    state.write(";");
    Ok(())
}

pub(super) fn variable_declarator(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let declarator = expect_node!(node, VariableDeclarator);
    state.emit(&declarator.id)?;
    if let Some(init) = &declarator.init {
        state.write(" = ");
        state.emit(init)?;
    }
    Ok(())
}

/// `extends <superclass>`; the superclass is wrapped unless it is a class
/// expression or binds at least as tightly as one.
pub(crate) fn format_superclass(state: &mut EmitState<'_>, super_class: &Node) -> Result<()> {
    state.write("extends ");
    let kind = super_class.kind();
    if kind != NodeKind::ClassExpression && ranks_below(state, kind, NodeKind::ClassExpression) {
        state.emit_parenthesized(super_class)?;
    } else {
        state.emit(super_class)?;
    }
    Ok(())
}

pub(super) fn class_declaration(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let class = expect_node!(node, ClassDeclaration | ClassExpression);
    state.write("class ");
    if let Some(id) = &class.id {
        state.write(identifier_name(id)?);
        state.write(" ");
    }
    if let Some(super_class) = &class.super_class {
        format_superclass(state, super_class)?;
        state.write(" ");
    }
    state.emit_as(NodeKind::ClassBody, &class.body)
}

pub(super) fn class_expression(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    state.emit_as(NodeKind::ClassDeclaration, node)
}

/// The parts of a method that class methods and object-literal methods
/// have in common. `definition` is set for class methods only.
pub(crate) struct MethodParts<'n> {
    pub key: &'n Node,
    pub value: &'n Function,
    pub kind: &'n str,
    pub computed: bool,
    pub is_static: bool,
    pub definition: Option<&'n MethodDefinition>,
}

impl<'n> MethodParts<'n> {
    pub(crate) fn of(node: &'n Node) -> Result<Self> {
        let parts = match node {
            Node::MethodDefinition(method) | Node::TSAbstractMethodDefinition(method) => MethodParts {
                key: &method.key,
                value: method
                    .value
                    .as_function()
                    .ok_or_else(|| GenerateError::unexpected(&method.value, "a function value"))?,
                kind: &method.kind,
                computed: method.computed,
                is_static: method.is_static,
                definition: Some(method),
            },
            Node::Property(property) => MethodParts {
                key: &property.key,
                value: property
                    .value
                    .as_function()
                    .ok_or_else(|| GenerateError::unexpected(&property.value, "a function value"))?,
                kind: &property.kind,
                computed: property.computed,
                is_static: false,
                definition: None,
            },
            other => return Err(GenerateError::unexpected(other, "MethodDefinition or Property")),
        };
        Ok(parts)
    }

    /// `get `/`set `, `async `, `*` and the key.
    pub(crate) fn write_signature_head(&self, state: &mut EmitState<'_>) -> Result<()> {
        if self.kind == "get" || self.kind == "set" {
            state.write(self.kind);
            state.write(" ");
        }
        if self.value.is_async {
            state.write("async ");
        }
        if self.value.generator {
            state.write("*");
        }
        format_key(state, self.key, self.computed)
    }
}

/// A property key, bracketed when computed.
pub(crate) fn format_key(state: &mut EmitState<'_>, key: &Node, computed: bool) -> Result<()> {
    if computed {
        state.write("[");
        state.emit(key)?;
        state.write("]");
        Ok(())
    } else {
        state.emit(key)
    }
}

pub(super) fn method_definition(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let method = MethodParts::of(node)?;
    if method.is_static {
        state.write("static ");
    }
    method.write_signature_head(state)?;
    format_sequence(state, &method.value.params)?;
    if let Some(body) = &method.value.body {
        state.write(" ");
        state.emit(body)?;
    }
    Ok(())
}

/// Object literal entries: `key: value`, shorthand, or a method.
pub(super) fn property(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let property = expect_node!(node, Property);
    if property.method || property.kind != "init" {
        return state.emit_as(NodeKind::MethodDefinition, node);
    }
    if !property.shorthand {
        format_key(state, &property.key, property.computed)?;
        state.write(": ");
    }
    state.emit(&property.value)
}

/// Keys that are themselves functions carry their own terminator.
pub(crate) fn is_function_key(key: &Node) -> bool {
    matches!(key, Node::FunctionExpression(_) | Node::FunctionDeclaration(_))
}

pub(super) fn property_definition(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let field = expect_node!(node, PropertyDefinition);
    if field.is_static {
        state.write("static ");
    }
    format_key(state, &field.key, field.computed)?;
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

/// Arrow body: object literals are wrapped so they do not read as blocks.
pub(crate) fn format_arrow_body(state: &mut EmitState<'_>, body: &Node) -> Result<()> {
    state.write(" => ");
    if matches!(body, Node::ObjectExpression(_) | Node::ObjectPattern(_)) {
        state.write("(");
        state.emit_as(NodeKind::ObjectExpression, body)?;
        state.write(")");
        Ok(())
    } else {
        state.emit(body)
    }
}

pub(super) fn arrow_function(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let arrow = expect_node!(node, ArrowFunctionExpression);
    if arrow.is_async {
        state.write("async ");
    }
    match arrow.params.as_slice() {
        [Node::Identifier(param)] => state.write(&param.name),
        params => format_sequence(state, params)?,
    }
    format_arrow_body(state, &arrow.body)
}
