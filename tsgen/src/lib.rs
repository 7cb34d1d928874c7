//! tsgen: source text from ESTree ASTs of JavaScript and its typed
//! superset.
//!
//! Generation is tag-keyed dispatch. A [`Registry`] maps each node kind to
//! an emission procedure; the typed registry ([`emit_ts::registry`]) is an
//! extension layered over the base one ([`emit_js::registry`]). Procedures
//! receive the node and an [`EmitState`] carrying the output sink, the
//! active registry and the precedence table, and recurse through the state
//! for their children.
//!
//! ```no_run
//! let source = tsgen::generate_json(r#"{"type": "Identifier", "name": "x"}"#)?;
//! assert_eq!(source, "x");
//! # Ok::<(), tsgen::GenerateError>(())
//! ```

pub mod ast;
pub mod context;
pub mod emit_js;
pub mod emit_ts;
pub mod error;
pub mod format;
pub mod generate;
pub mod precedence;
pub mod registry;
pub mod writer;

pub use ast::{Node, NodeKind};
pub use context::EmitState;
pub use error::{GenerateError, Result};
pub use generate::{generate, generate_json, GenerateOptions, Generator};
pub use precedence::{PrecedenceTable, NEEDS_PARENTHESES};
pub use registry::{EmitFn, Registry};
pub use writer::CodeWriter;
