//! IR Tree Data Structures
//!
//! Language-agnostic control-flow trees for synthesized program fragments.

use crate::domain::error::MalformedTree;

/// A node in the IR tree.
///
/// Trees are finite, acyclic, and immutable once built; the core never
/// mutates a tree it is handed. Ordering of `Sequence` children, `TryCatch`
/// handlers, and the then/else arms is significant and preserved exactly
/// as constructed.
#[derive(Debug, Clone)]
pub enum IrNode {
    /// One API invocation. The only node kind that contributes to a
    /// call sequence.
    Call { identifier: String },
    /// A declared binding. Counts as a statement but never as a call.
    VarDecl { name: String, ty: String },
    /// Straight-line composition of child nodes.
    Sequence { children: Vec<IrNode> },
    /// Two-way control split. `else_body` may be absent; absence is
    /// equivalent to an empty Sequence for enumeration but is distinct
    /// for structural equality.
    Branch {
        then_body: Box<IrNode>,
        else_body: Option<Box<IrNode>>,
    },
    /// Conditionally-repeated body, represented without iteration count.
    Loop { body: Box<IrNode> },
    /// Protected body plus one or more alternative exception continuations.
    /// Must have at least one handler (checked by `validate`).
    TryCatch {
        body: Box<IrNode>,
        handlers: Vec<CatchHandler>,
    },
}

/// One exception continuation of a `TryCatch` node.
#[derive(Debug, Clone)]
pub struct CatchHandler {
    pub exception_type: String,
    pub handler_body: IrNode,
}

impl IrNode {
    /// Number of statements the tree represents.
    ///
    /// Leaves count 1; compound kinds count 1 for themselves plus their
    /// bodies, except `Sequence` which is pure composition and counts 0
    /// for itself.
    pub fn statement_count(&self) -> usize {
        match self {
            IrNode::Call { .. } => 1,
            IrNode::VarDecl { .. } => 1,
            IrNode::Sequence { children } => {
                children.iter().map(|c| c.statement_count()).sum()
            }
            IrNode::Branch { then_body, else_body } => {
                1 + then_body.statement_count()
                    + else_body.as_ref().map_or(0, |e| e.statement_count())
            }
            IrNode::Loop { body } => 1 + body.statement_count(),
            IrNode::TryCatch { body, handlers } => {
                1 + body.statement_count()
                    + handlers
                        .iter()
                        .map(|h| h.handler_body.statement_count())
                        .sum::<usize>()
            }
        }
    }

    /// Check the structural invariants a well-formed tree must satisfy.
    /// Called at the construction boundary (DTO conversion); core
    /// algorithms assume trees have already passed this.
    pub fn validate(&self) -> Result<(), MalformedTree> {
        match self {
            IrNode::Call { .. } | IrNode::VarDecl { .. } => Ok(()),
            IrNode::Sequence { children } => {
                for child in children {
                    child.validate()?;
                }
                Ok(())
            }
            IrNode::Branch { then_body, else_body } => {
                then_body.validate()?;
                if let Some(else_body) = else_body {
                    else_body.validate()?;
                }
                Ok(())
            }
            IrNode::Loop { body } => body.validate(),
            IrNode::TryCatch { body, handlers } => {
                if handlers.is_empty() {
                    return Err(MalformedTree::NoHandlers);
                }
                body.validate()?;
                for handler in handlers {
                    handler.handler_body.validate()?;
                }
                Ok(())
            }
        }
    }
}

/// Structural equality over IR trees.
///
/// Two nodes are equal iff they carry the same variant tag and all fields
/// are recursively equal. Strictly positional: an absent else arm is equal
/// only to an absent else arm, and handler lists compare pairwise in order.
/// No canonicalization or reordering is performed, so swapping then/else
/// arms or permuting handlers yields unequal trees. All comparison rules
/// live here so they can be audited in one place.
pub fn structural_eq(a: &IrNode, b: &IrNode) -> bool {
    match (a, b) {
        (IrNode::Call { identifier: ia }, IrNode::Call { identifier: ib }) => ia == ib,
        (
            IrNode::VarDecl { name: na, ty: ta },
            IrNode::VarDecl { name: nb, ty: tb },
        ) => na == nb && ta == tb,
        (IrNode::Sequence { children: ca }, IrNode::Sequence { children: cb }) => {
            ca.len() == cb.len()
                && ca.iter().zip(cb).all(|(x, y)| structural_eq(x, y))
        }
        (
            IrNode::Branch { then_body: ta, else_body: ea },
            IrNode::Branch { then_body: tb, else_body: eb },
        ) => {
            structural_eq(ta, tb)
                && match (ea, eb) {
                    (Some(x), Some(y)) => structural_eq(x, y),
                    (None, None) => true,
                    _ => false,
                }
        }
        (IrNode::Loop { body: ba }, IrNode::Loop { body: bb }) => structural_eq(ba, bb),
        (
            IrNode::TryCatch { body: ba, handlers: ha },
            IrNode::TryCatch { body: bb, handlers: hb },
        ) => {
            structural_eq(ba, bb)
                && ha.len() == hb.len()
                && ha.iter().zip(hb).all(|(x, y)| {
                    x.exception_type == y.exception_type
                        && structural_eq(&x.handler_body, &y.handler_body)
                })
        }
        _ => false,
    }
}

/// Exact-match comparison used for scoring: true iff every node, in every
/// position, matches tag-for-tag and field-for-field.
pub fn trees_equal(a: &IrNode, b: &IrNode) -> bool {
    structural_eq(a, b)
}

impl PartialEq for IrNode {
    fn eq(&self, other: &Self) -> bool {
        structural_eq(self, other)
    }
}

impl Eq for IrNode {}

impl PartialEq for CatchHandler {
    fn eq(&self, other: &Self) -> bool {
        self.exception_type == other.exception_type
            && structural_eq(&self.handler_body, &other.handler_body)
    }
}

impl Eq for CatchHandler {}
