/// Formatting helpers shared by the base and typed procedures.
use crate::ast::{Node, NodeKind};
use crate::context::EmitState;
use crate::error::{GenerateError, Result};
use crate::precedence::{operator_precedence, NEEDS_PARENTHESES};

/// Write `(a, b, c)`. Parameter lists, call arguments and signature
/// parameters all go through here.
pub fn format_sequence(state: &mut EmitState<'_>, nodes: &[Node]) -> Result<()> {
    state.write("(");
    state.emit_joined(nodes, ", ")?;
    state.write(")");
    Ok(())
}

/// Whether a call appears along the `object` links of a member chain.
/// `new (a()).b` and `new a().b` mean different things.
pub fn has_call_expression(node: &Node) -> bool {
    let mut current = node;
    loop {
        match current {
            Node::CallExpression(_) => return true,
            Node::MemberExpression(member) => current = &member.object,
            _ => return false,
        }
    }
}

/// Whether `node` must be parenthesized as an operand of `parent`.
pub fn expression_needs_parentheses(
    state: &EmitState<'_>,
    node: &Node,
    parent: &Node,
    is_right_hand: bool,
) -> bool {
    let node_rank = state.precedence(node.kind());
    if node_rank == Some(NEEDS_PARENTHESES) {
        return true;
    }
    let (Some(node_rank), Some(parent_rank)) = (node_rank, state.precedence(parent.kind())) else {
        return false;
    };
    if node_rank != parent_rank {
        // -a ** b is a syntax error
        let unary_base = !is_right_hand && node_rank == 15 && parent_rank == 14 && parent.operator() == Some("**");
        return unary_base || node_rank < parent_rank;
    }
    if node_rank != 13 && node_rank != 14 {
        return false;
    }
    if node.operator() == Some("**") && parent.operator() == Some("**") {
        return !is_right_hand;
    }
    if node_rank == 13 && (node.operator() == Some("??") || parent.operator() == Some("??")) {
        return true;
    }
    let node_op = node.operator().and_then(operator_precedence);
    let parent_op = parent.operator().and_then(operator_precedence);
    match (node_op, parent_op) {
        (Some(node_op), Some(parent_op)) if is_right_hand => node_op <= parent_op,
        (Some(node_op), Some(parent_op)) => node_op < parent_op,
        // operator-less expressions at a binary level, e.g. `x satisfies T`
        (None, Some(_)) => true,
        _ => false,
    }
}

/// Emit `node` as an operand of `parent`, parenthesized when required.
pub fn format_expression(state: &mut EmitState<'_>, node: &Node, parent: &Node, is_right_hand: bool) -> Result<()> {
    if expression_needs_parentheses(state, node, parent, is_right_hand) {
        state.emit_parenthesized(node)
    } else {
        state.emit(node)
    }
}

/// Whether `kind` ranks as the sentinel or below `threshold`, i.e. needs
/// wrapping in a position that requires at least `threshold`.
pub fn ranks_below(state: &EmitState<'_>, kind: NodeKind, threshold: NodeKind) -> bool {
    match (state.precedence(kind), state.precedence(threshold)) {
        (Some(NEEDS_PARENTHESES), _) => true,
        (Some(rank), Some(threshold)) => rank < threshold,
        _ => false,
    }
}

/// Name of a child the grammar requires to be an identifier.
pub fn identifier_name(node: &Node) -> Result<&str> {
    node.identifier_name()
        .ok_or_else(|| GenerateError::unexpected(node, "Identifier"))
}
