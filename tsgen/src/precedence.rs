/// Expression precedence classes and binary operator ranks.
///
/// A higher class binds tighter. [`NEEDS_PARENTHESES`] marks expressions
/// that must always be wrapped when they appear as an operand; every check
/// tests it explicitly before comparing ranks.
use std::collections::HashMap;

use crate::ast::NodeKind;

/// Class of arrow, class, function and object expressions.
pub const NEEDS_PARENTHESES: u8 = 17;

/// Read-only mapping from expression kind to precedence class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecedenceTable {
    ranks: HashMap<NodeKind, u8>,
}

const JAVASCRIPT: &[(NodeKind, u8)] = &[
    // Definitions
    (NodeKind::ArrayExpression, 20),
    (NodeKind::TaggedTemplateExpression, 20),
    (NodeKind::ThisExpression, 20),
    (NodeKind::Identifier, 20),
    (NodeKind::PrivateIdentifier, 20),
    (NodeKind::Literal, 18),
    (NodeKind::TemplateLiteral, 20),
    (NodeKind::Super, 20),
    (NodeKind::SequenceExpression, 20),
    // Operations
    (NodeKind::MemberExpression, 19),
    (NodeKind::ChainExpression, 19),
    (NodeKind::CallExpression, 19),
    (NodeKind::NewExpression, 19),
    // Other definitions
    (NodeKind::ArrowFunctionExpression, NEEDS_PARENTHESES),
    (NodeKind::ClassExpression, NEEDS_PARENTHESES),
    (NodeKind::FunctionExpression, NEEDS_PARENTHESES),
    (NodeKind::ObjectExpression, NEEDS_PARENTHESES),
    // Other operations
    (NodeKind::UpdateExpression, 16),
    (NodeKind::UnaryExpression, 15),
    (NodeKind::AwaitExpression, 15),
    (NodeKind::BinaryExpression, 14),
    (NodeKind::LogicalExpression, 13),
    (NodeKind::ConditionalExpression, 4),
    (NodeKind::AssignmentExpression, 3),
    (NodeKind::YieldExpression, 2),
    (NodeKind::RestElement, 1),
];

const TYPESCRIPT: &[(NodeKind, u8)] = &[
    (NodeKind::TSAsExpression, 20),
    (NodeKind::TSNonNullExpression, 19),
    (NodeKind::TSTypeAssertion, 15),
    (NodeKind::TSSatisfiesExpression, 14),
];

impl PrecedenceTable {
    pub fn empty() -> Self {
        Self {
            ranks: HashMap::new(),
        }
    }

    /// Ranks of the untyped grammar.
    pub fn javascript() -> Self {
        let mut table = Self::empty();
        for &(kind, rank) in JAVASCRIPT {
            table.set(kind, rank);
        }
        table
    }

    /// Ranks of the untyped grammar plus the typed expressions.
    pub fn typescript() -> Self {
        let mut table = Self::javascript();
        for &(kind, rank) in TYPESCRIPT {
            table.set(kind, rank);
        }
        table
    }

    pub fn set(&mut self, kind: NodeKind, rank: u8) -> &mut Self {
        self.ranks.insert(kind, rank);
        self
    }

    /// Class of `kind`, or `None` for kinds that are not expressions.
    pub fn get(&self, kind: NodeKind) -> Option<u8> {
        self.ranks.get(&kind).copied()
    }
}

impl Default for PrecedenceTable {
    fn default() -> Self {
        Self::typescript()
    }
}

/// Rank of a binary or logical operator; `None` for anything else.
pub fn operator_precedence(operator: &str) -> Option<u8> {
    let rank = match operator {
        "||" => 2,
        "??" => 3,
        "&&" => 4,
        "|" => 5,
        "^" => 6,
        "&" => 7,
        "==" | "!=" | "===" | "!==" => 8,
        "<" | ">" | "<=" | ">=" | "in" | "instanceof" => 9,
        "<<" | ">>" | ">>>" => 10,
        "+" | "-" => 11,
        "*" | "%" | "/" => 12,
        "**" => 13,
        _ => return None,
    };
    Some(rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_kinds() {
        let table = PrecedenceTable::javascript();
        for kind in [
            NodeKind::ArrowFunctionExpression,
            NodeKind::ClassExpression,
            NodeKind::FunctionExpression,
            NodeKind::ObjectExpression,
        ] {
            assert_eq!(table.get(kind), Some(NEEDS_PARENTHESES));
        }
    }

    #[test]
    fn test_typed_ranks_only_in_typed_table() {
        assert_eq!(PrecedenceTable::javascript().get(NodeKind::TSAsExpression), None);
        assert_eq!(PrecedenceTable::typescript().get(NodeKind::TSAsExpression), Some(20));
        assert_eq!(PrecedenceTable::typescript().get(NodeKind::Identifier), Some(20));
    }

    #[test]
    fn test_statements_have_no_rank() {
        assert_eq!(PrecedenceTable::typescript().get(NodeKind::BlockStatement), None);
        assert_eq!(PrecedenceTable::typescript().get(NodeKind::ClassDeclaration), None);
    }

    #[test]
    fn test_set_overrides() {
        let mut table = PrecedenceTable::empty();
        table.set(NodeKind::Identifier, 1).set(NodeKind::Identifier, 2);
        assert_eq!(table.get(NodeKind::Identifier), Some(2));
    }

    #[test]
    fn test_operator_ranks() {
        assert_eq!(operator_precedence("??"), Some(3));
        assert_eq!(operator_precedence("instanceof"), Some(9));
        assert_eq!(operator_precedence(">>>"), Some(10));
        assert_eq!(operator_precedence("**"), Some(13));
        assert_eq!(operator_precedence("="), None);
    }
}
