/// Statement procedures: programs, blocks, control flow.
use super::declarations::format_variable_declaration;
use crate::ast::{Node, NodeKind};
use crate::context::EmitState;
use crate::error::{expect_node, Result};
use crate::precedence::NEEDS_PARENTHESES;

pub(super) fn program(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let program = expect_node!(node, Program);
    for statement in &program.body {
        state.writer().write_indent();
        state.emit(statement)?;
        state.writer().line_end();
    }
    Ok(())
}

/// Write `{`, one statement per line one level deeper, then `}`.
pub(crate) fn format_block(state: &mut EmitState<'_>, body: &[Node]) -> Result<()> {
    state.write("{");
    state.writer().indent();
    if !body.is_empty() {
        state.writer().line_end();
        for statement in body {
            state.writer().write_indent();
            state.emit(statement)?;
            state.writer().line_end();
        }
        state.writer().dedent();
        state.writer().write_indent();
    } else {
        state.writer().dedent();
    }
    state.write("}");
    Ok(())
}

pub(super) fn block_statement(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let block = expect_node!(node, BlockStatement | ClassBody);
    format_block(state, &block.body)
}

pub(super) fn static_block(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let block = expect_node!(node, StaticBlock);
    state.write("static ");
    format_block(state, &block.body)
}

pub(super) fn empty_statement(_: &Node, state: &mut EmitState<'_>) -> Result<()> {
    state.write(";");
    Ok(())
}

pub(super) fn expression_statement(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let statement = expect_node!(node, ExpressionStatement);
    let expression = &*statement.expression;
    // `{a} = b` would parse as a block followed by `= b`
    let object_assignment = match expression {
        Node::AssignmentExpression(assignment) => {
            matches!(*assignment.left, Node::ObjectPattern(_) | Node::ObjectExpression(_))
        }
        _ => false,
    };
    if state.precedence(expression.kind()) == Some(NEEDS_PARENTHESES) || object_assignment {
        state.emit_parenthesized(expression)?;
    } else {
        state.emit(expression)?;
    }
    state.write(";");
    Ok(())
}

pub(super) fn if_statement(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let statement = expect_node!(node, IfStatement);
    state.write("if (");
    state.emit(&statement.test)?;
    state.write(") ");
    state.emit(&statement.consequent)?;
    if let Some(alternate) = &statement.alternate {
        state.write(" else ");
        state.emit(alternate)?;
    }
    Ok(())
}

pub(super) fn labeled_statement(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let statement = expect_node!(node, LabeledStatement);
    state.emit(&statement.label)?;
    state.write(": ");
    state.emit(&statement.body)
}

pub(super) fn jump_statement(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let jump = expect_node!(node, BreakStatement | ContinueStatement);
    state.write(if node.kind() == NodeKind::BreakStatement {
        "break"
    } else {
        "continue"
    });
    if let Some(label) = &jump.label {
        state.write(" ");
        state.emit(label)?;
    }
    state.write(";");
    Ok(())
}

pub(super) fn with_statement(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let statement = expect_node!(node, WithStatement);
    state.write("with (");
    state.emit(&statement.object)?;
    state.write(") ");
    state.emit(&statement.body)
}

/// Cases sit one level in, their statements two.
pub(super) fn switch_statement(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let statement = expect_node!(node, SwitchStatement);
    let outer = state.writer().depth();
    state.writer().indent();
    state.writer().indent();
    state.write("switch (");
    state.emit(&statement.discriminant)?;
    state.write(") {");
    state.writer().line_end();
    for case in &statement.cases {
        state.writer().write_indent_at(outer + 1);
        match &case.test {
            Some(test) => {
                state.write("case ");
                state.emit(test)?;
                state.write(":");
            }
            None => state.write("default:"),
        }
        state.writer().line_end();
        for consequent in &case.consequent {
            state.writer().write_indent();
            state.emit(consequent)?;
            state.writer().line_end();
        }
    }
    state.writer().dedent();
    state.writer().dedent();
    state.writer().write_indent();
    state.write("}");
    Ok(())
}

pub(super) fn return_statement(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let statement = expect_node!(node, ReturnStatement);
    state.write("return");
    if let Some(argument) = &statement.argument {
        state.write(" ");
        state.emit(argument)?;
    }
    state.write(";");
    Ok(())
}

pub(super) fn throw_statement(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let statement = expect_node!(node, ThrowStatement);
    state.write("throw ");
    state.emit(&statement.argument)?;
    state.write(";");
    Ok(())
}

pub(super) fn try_statement(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let statement = expect_node!(node, TryStatement);
    state.write("try ");
    state.emit(&statement.block)?;
    if let Some(handler) = &statement.handler {
        match &handler.param {
            Some(param) => {
                state.write(" catch (");
                state.emit(param)?;
                state.write(") ");
            }
            None => state.write(" catch "),
        }
        state.emit(&handler.body)?;
    }
    if let Some(finalizer) = &statement.finalizer {
        state.write(" finally ");
        state.emit(finalizer)?;
    }
    Ok(())
}

pub(super) fn while_statement(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let statement = expect_node!(node, WhileStatement);
    state.write("while (");
    state.emit(&statement.test)?;
    state.write(") ");
    state.emit(&statement.body)
}

pub(super) fn do_while_statement(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let statement = expect_node!(node, DoWhileStatement);
    state.write("do ");
    state.emit(&statement.body)?;
    state.write(" while (");
    state.emit(&statement.test)?;
    state.write(");");
    Ok(())
}

/// Emit a loop head clause; declarations go without their `;`.
fn loop_head(state: &mut EmitState<'_>, node: &Node) -> Result<()> {
    match node {
        Node::VariableDeclaration(declaration) => format_variable_declaration(state, declaration),
        other => state.emit(other),
    }
}

pub(super) fn for_statement(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let statement = expect_node!(node, ForStatement);
    state.write("for (");
    if let Some(init) = &statement.init {
        loop_head(state, init)?;
    }
    state.write("; ");
    if let Some(test) = &statement.test {
        state.emit(test)?;
    }
    state.write("; ");
    if let Some(update) = &statement.update {
        state.emit(update)?;
    }
    state.write(") ");
    state.emit(&statement.body)
}

pub(super) fn for_in_statement(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let statement = expect_node!(node, ForInStatement | ForOfStatement);
    state.write(if statement.is_await { "for await (" } else { "for (" });
    loop_head(state, &statement.left)?;
    state.write(if node.kind() == NodeKind::ForInStatement {
        " in "
    } else {
        " of "
    });
    state.emit(&statement.right)?;
    state.write(") ");
    state.emit(&statement.body)
}

pub(super) fn debugger_statement(_: &Node, state: &mut EmitState<'_>) -> Result<()> {
    state.write("debugger;");
    Ok(())
}
