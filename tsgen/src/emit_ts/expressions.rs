/// Typed expressions, and the base expressions that gain type arguments or
/// annotations.
use crate::ast::{Node, NodeKind};
use crate::context::EmitState;
use crate::emit_js::{format_elements, format_new_callee, format_object_pattern, format_operand};
use crate::error::{expect_node, Result};
use crate::format::{format_sequence, ranks_below};
use crate::precedence::operator_precedence;

/// Operator rank of `<`, `instanceof` and friends, where `as` and
/// `satisfies` bind.
const RELATIONAL: u8 = 9;

/// The operand of `as`/`satisfies`. Anything looser than a relational
/// operator is wrapped, or the assertion would bind to its last operand.
fn format_asserted(state: &mut EmitState<'_>, operand: &Node) -> Result<()> {
    let looser_operator = matches!(operand, Node::BinaryExpression(_))
        && operand
            .operator()
            .and_then(operator_precedence)
            .is_some_and(|rank| rank < RELATIONAL);
    if looser_operator || ranks_below(state, operand.kind(), NodeKind::TSSatisfiesExpression) {
        state.emit_parenthesized(operand)
    } else {
        state.emit(operand)
    }
}

pub(super) fn new_expression(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let call = expect_node!(node, NewExpression);
    format_new_callee(state, &call.callee)?;
    if let Some(arguments) = &call.type_arguments {
        state.emit(arguments)?;
    }
    format_sequence(state, &call.arguments)
}

pub(super) fn call_expression(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let call = expect_node!(node, CallExpression);
    format_operand(state, &call.callee, NodeKind::CallExpression)?;
    if call.optional {
        state.write("?.");
    }
    if let Some(arguments) = &call.type_arguments {
        state.emit(arguments)?;
    }
    format_sequence(state, &call.arguments)
}

/// `(x as T)`, wrapped so it can stand in any operand position.
pub(super) fn as_expression(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let assertion = expect_node!(node, TSAsExpression);
    state.write("(");
    format_asserted(state, &assertion.expression)?;
    state.write(" as ");
    state.emit(&assertion.type_annotation)?;
    state.write(")");
    Ok(())
}

pub(super) fn satisfies_expression(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let assertion = expect_node!(node, TSSatisfiesExpression);
    format_asserted(state, &assertion.expression)?;
    state.write(" satisfies ");
    state.emit(&assertion.type_annotation)
}

pub(super) fn type_assertion(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let assertion = expect_node!(node, TSTypeAssertion);
    state.write("<");
    state.emit(&assertion.type_annotation)?;
    state.write(">");
    format_operand(state, &assertion.expression, NodeKind::TSTypeAssertion)
}

pub(super) fn non_null_expression(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let expression = expect_node!(node, TSNonNullExpression);
    format_operand(state, &expression.expression, NodeKind::TSNonNullExpression)?;
    state.write("!");
    Ok(())
}

pub(super) fn rest_element(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let rest = expect_node!(node, RestElement);
    state.write("...");
    state.emit(&rest.argument)?;
    state.emit_annotation(rest.type_annotation.as_deref())
}

pub(super) fn object_pattern(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let pattern = expect_node!(node, ObjectPattern);
    format_object_pattern(state, &pattern.properties)?;
    state.emit_annotation(pattern.type_annotation.as_deref())
}

pub(super) fn array_pattern(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let pattern = expect_node!(node, ArrayPattern);
    format_elements(state, &pattern.elements)?;
    state.emit_annotation(pattern.type_annotation.as_deref())
}
