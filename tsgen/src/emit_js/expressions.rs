/// Expression and pattern procedures of the untyped grammar.
use crate::ast::{Node, NodeKind};
use crate::context::EmitState;
use crate::error::{expect_node, GenerateError, Result};
use crate::format::{
    expression_needs_parentheses, format_expression, format_sequence, has_call_expression, identifier_name,
    ranks_below,
};
use crate::precedence::NEEDS_PARENTHESES;

pub(super) fn this_expression(_: &Node, state: &mut EmitState<'_>) -> Result<()> {
    state.write("this");
    Ok(())
}

pub(super) fn super_keyword(_: &Node, state: &mut EmitState<'_>) -> Result<()> {
    state.write("super");
    Ok(())
}

pub(super) fn rest_element(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let rest = expect_node!(node, RestElement | SpreadElement);
    state.write("...");
    state.emit(&rest.argument)
}

pub(super) fn yield_expression(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let expression = expect_node!(node, YieldExpression);
    state.write(if expression.delegate { "yield*" } else { "yield" });
    if let Some(argument) = &expression.argument {
        state.write(" ");
        state.emit(argument)?;
    }
    Ok(())
}

pub(super) fn await_expression(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let expression = expect_node!(node, AwaitExpression);
    state.write("await ");
    format_expression(state, &expression.argument, node, false)
}

/// Interleave the raw quasis with `${...}` holes. Template literal types
/// share this.
pub(crate) fn format_template(
    state: &mut EmitState<'_>,
    node: &Node,
    quasis: &[Node],
    holes: &[Node],
) -> Result<()> {
    if quasis.len() != holes.len() + 1 {
        return Err(GenerateError::MalformedNode {
            kind: node.kind(),
            reason: format!("{} quasis around {} expressions", quasis.len(), holes.len()),
        });
    }
    state.write("`");
    for (quasi, hole) in quasis.iter().zip(holes) {
        let element = expect_node!(quasi, TemplateElement);
        state.write(&element.value.raw);
        state.write("${");
        state.emit(hole)?;
        state.write("}");
    }
    if let Some(last) = quasis.last() {
        let element = expect_node!(last, TemplateElement);
        state.write(&element.value.raw);
    }
    state.write("`");
    Ok(())
}

pub(super) fn template_literal(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let template = expect_node!(node, TemplateLiteral);
    format_template(state, node, &template.quasis, &template.expressions)
}

pub(super) fn template_element(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let element = expect_node!(node, TemplateElement);
    state.write(&element.value.raw);
    Ok(())
}

pub(super) fn tagged_template(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let tagged = expect_node!(node, TaggedTemplateExpression);
    format_operand(state, &tagged.tag, NodeKind::MemberExpression)?;
    state.emit(&tagged.quasi)
}

/// `[a, , b]`; a trailing hole keeps its comma.
pub(crate) fn format_elements(state: &mut EmitState<'_>, elements: &[Option<Node>]) -> Result<()> {
    state.write("[");
    for (i, element) in elements.iter().enumerate() {
        if let Some(element) = element {
            state.emit(element)?;
        }
        if i + 1 < elements.len() || element.is_none() {
            state.write(", ");
        }
    }
    state.write("]");
    Ok(())
}

pub(super) fn array_expression(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let array = expect_node!(node, ArrayExpression | ArrayPattern);
    format_elements(state, &array.elements)
}

/// One property per line, one level deeper than the braces.
pub(super) fn object_expression(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let object = expect_node!(node, ObjectExpression | ObjectPattern);
    state.write("{");
    if object.properties.is_empty() {
        state.write("}");
        return Ok(());
    }
    state.writer().indent();
    state.writer().line_end();
    for (i, property) in object.properties.iter().enumerate() {
        if i > 0 {
            state.write(",");
            state.writer().line_end();
        }
        state.writer().write_indent();
        state.emit(property)?;
    }
    state.writer().dedent();
    state.writer().line_end();
    state.writer().write_indent();
    state.write("}");
    Ok(())
}

/// Patterns stay on one line: `{a, b: c}`.
pub(crate) fn format_object_pattern(state: &mut EmitState<'_>, properties: &[Node]) -> Result<()> {
    state.write("{");
    state.emit_joined(properties, ", ")?;
    state.write("}");
    Ok(())
}

pub(super) fn object_pattern(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let pattern = expect_node!(node, ObjectPattern);
    format_object_pattern(state, &pattern.properties)
}

pub(super) fn sequence_expression(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let sequence = expect_node!(node, SequenceExpression);
    format_sequence(state, &sequence.expressions)
}

/// Whether `argument` starts with the same sign as `operator`, so `- -a`
/// must not collapse into `--a`.
fn repeats_sign(argument: &Node, operator: &str) -> bool {
    if operator != "+" && operator != "-" {
        return false;
    }
    match argument {
        Node::UnaryExpression(unary) => unary.prefix && unary.operator.starts_with(operator),
        Node::UpdateExpression(update) => update.prefix && update.operator.starts_with(operator),
        _ => false,
    }
}

pub(super) fn unary_expression(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let unary = expect_node!(node, UnaryExpression);
    let operator = unary.operator.as_str();
    let argument = &*unary.argument;
    if !unary.prefix {
        state.emit(argument)?;
        state.write(operator);
        return Ok(());
    }
    state.write(operator);
    let needs_parentheses = expression_needs_parentheses(state, argument, node, false);
    if needs_parentheses {
        // word operators keep their space: `typeof (a + b)`
        state.write(if operator.len() > 1 { " (" } else { "(" });
        state.emit(argument)?;
        state.write(")");
        return Ok(());
    }
    if operator.len() > 1 || repeats_sign(argument, operator) {
        state.write(" ");
    }
    state.emit(argument)
}

pub(super) fn update_expression(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let update = expect_node!(node, UpdateExpression);
    if update.prefix {
        state.write(&update.operator);
        state.emit(&update.argument)
    } else {
        state.emit(&update.argument)?;
        state.write(&update.operator);
        Ok(())
    }
}

pub(super) fn assignment_expression(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let assignment = expect_node!(node, AssignmentExpression);
    state.emit(&assignment.left)?;
    state.write(" ");
    state.write(&assignment.operator);
    state.write(" ");
    state.emit(&assignment.right)
}

pub(super) fn assignment_pattern(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let pattern = expect_node!(node, AssignmentPattern);
    state.emit(&pattern.left)?;
    state.write(" = ");
    state.emit(&pattern.right)
}

pub(super) fn binary_expression(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let binary = expect_node!(node, BinaryExpression | LogicalExpression);
    // `in` would be ambiguous inside a for-loop head
    let is_in = binary.operator == "in";
    if is_in {
        state.write("(");
    }
    format_expression(state, &binary.left, node, false)?;
    state.write(" ");
    state.write(&binary.operator);
    state.write(" ");
    format_expression(state, &binary.right, node, true)?;
    if is_in {
        state.write(")");
    }
    Ok(())
}

pub(super) fn conditional_expression(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let conditional = expect_node!(node, ConditionalExpression);
    let test = &*conditional.test;
    let wrap = match (state.precedence(test.kind()), state.precedence(NodeKind::ConditionalExpression)) {
        (Some(NEEDS_PARENTHESES), _) => true,
        (Some(rank), Some(threshold)) => rank <= threshold,
        _ => false,
    };
    if wrap {
        state.emit_parenthesized(test)?;
    } else {
        state.emit(test)?;
    }
    state.write(" ? ");
    state.emit(&conditional.consequent)?;
    state.write(" : ");
    state.emit(&conditional.alternate)
}

/// `new` callees are wrapped when they bind loosely or contain a call.
pub(crate) fn format_new_callee(state: &mut EmitState<'_>, callee: &Node) -> Result<()> {
    state.write("new ");
    if ranks_below(state, callee.kind(), NodeKind::CallExpression) || has_call_expression(callee) {
        state.emit_parenthesized(callee)
    } else {
        state.emit(callee)
    }
}

pub(super) fn new_expression(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let call = expect_node!(node, NewExpression);
    format_new_callee(state, &call.callee)?;
    format_sequence(state, &call.arguments)
}

/// Callee or member object, wrapped when it binds looser than `position`.
pub(crate) fn format_operand(state: &mut EmitState<'_>, operand: &Node, position: NodeKind) -> Result<()> {
    if ranks_below(state, operand.kind(), position) {
        state.emit_parenthesized(operand)
    } else {
        state.emit(operand)
    }
}

pub(super) fn call_expression(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let call = expect_node!(node, CallExpression);
    format_operand(state, &call.callee, NodeKind::CallExpression)?;
    if call.optional {
        state.write("?.");
    }
    format_sequence(state, &call.arguments)
}

pub(super) fn chain_expression(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let chain = expect_node!(node, ChainExpression);
    state.emit(&chain.expression)
}

pub(super) fn member_expression(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let member = expect_node!(node, MemberExpression);
    format_operand(state, &member.object, NodeKind::MemberExpression)?;
    if member.computed {
        if member.optional {
            state.write("?.");
        }
        state.write("[");
        state.emit(&member.property)?;
        state.write("]");
        Ok(())
    } else {
        state.write(if member.optional { "?." } else { "." });
        state.emit(&member.property)
    }
}

pub(super) fn meta_property(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let meta = expect_node!(node, MetaProperty);
    state.write(identifier_name(&meta.meta)?);
    state.write(".");
    state.write(identifier_name(&meta.property)?);
    Ok(())
}

pub(super) fn identifier(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let identifier = expect_node!(node, Identifier);
    state.write(&identifier.name);
    Ok(())
}

pub(super) fn private_identifier(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let identifier = expect_node!(node, PrivateIdentifier);
    state.write("#");
    state.write(&identifier.name);
    Ok(())
}

/// Raw text when the parser kept it, else a regex, a bigint, or the value
/// as JSON.
pub(super) fn literal(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let literal = expect_node!(node, Literal | RegExpLiteral);
    if let Some(raw) = &literal.raw {
        state.write(raw);
    } else if literal.regex.is_some() {
        regexp_literal(node, state)?;
    } else if let Some(bigint) = &literal.bigint {
        state.write(bigint);
        state.write("n");
    } else {
        state.write(&literal.value.to_string());
    }
    Ok(())
}

pub(super) fn regexp_literal(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let literal = expect_node!(node, Literal | RegExpLiteral);
    let regex = literal
        .regex
        .as_ref()
        .ok_or_else(|| GenerateError::unexpected(node, "a regex pattern"))?;
    state.write("/");
    state.write(&regex.pattern);
    state.write("/");
    state.write(&regex.flags);
    Ok(())
}
