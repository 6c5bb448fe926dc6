//! Path Enumeration
//!
//! Expands an IR tree into the bounded set of linear call traces reachable
//! through its control structure, plus prefix expansion of the result.

use crate::domain::error::CapacityExceeded;
use crate::domain::ir::IrNode;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One linear call trace through an IR tree: an ordered list of call
/// identifiers. Distinct from the `Sequence` node kind, which is IR
/// structure; this is enumerator output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallSequence {
    pub calls: Vec<String>,
}

impl CallSequence {
    pub fn from_calls<I, S>(calls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            calls: calls.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

/// Expand `root` into every call trace obtainable by choosing, at each
/// branch, either arm; at each loop, zero or exactly one iteration; and at
/// each try/catch, either the protected body or one handler as an
/// alternative continuation of the pre-try prefix.
///
/// `max` caps the number of live partial traces. Fork nesting multiplies
/// the trace count (branch nesting of depth k alone yields up to 2^k), so
/// the cap is checked after every fork and enumeration aborts with
/// [`CapacityExceeded`] at the first fork that trips it, returning no
/// partial output.
///
/// Output order is fully determined by the per-node rules (then before
/// else, skip before iterate, body before handlers in handler order), so
/// identical `(root, max)` inputs yield identical ordered results.
pub fn enumerate(root: &IrNode, max: usize) -> Result<Vec<CallSequence>, CapacityExceeded> {
    let traces = vec![CallSequence::default()];
    // The cap covers the initial singleton too, so max = 0 fails here.
    check_capacity(traces.len(), max)?;
    expand(root, traces, max)
}

fn check_capacity(live: usize, max: usize) -> Result<(), CapacityExceeded> {
    if live > max {
        Err(CapacityExceeded { live, max })
    } else {
        Ok(())
    }
}

/// Thread the evolving trace set through one node. Every partial trace in
/// `traces` is a prefix still under construction; forks duplicate the set.
fn expand(
    node: &IrNode,
    mut traces: Vec<CallSequence>,
    max: usize,
) -> Result<Vec<CallSequence>, CapacityExceeded> {
    match node {
        IrNode::Call { identifier } => {
            for trace in &mut traces {
                trace.calls.push(identifier.clone());
            }
            Ok(traces)
        }
        // Declarations are statements, not calls.
        IrNode::VarDecl { .. } => Ok(traces),
        IrNode::Sequence { children } => {
            for child in children {
                traces = expand(child, traces, max)?;
            }
            Ok(traces)
        }
        IrNode::Branch { then_body, else_body } => {
            let mut result = expand(then_body, traces.clone(), max)?;
            let else_set = match else_body {
                Some(else_body) => expand(else_body, traces, max)?,
                // Absent else arm: the untouched prefixes fall through.
                None => traces,
            };
            result.extend(else_set);
            check_capacity(result.len(), max)?;
            Ok(result)
        }
        IrNode::Loop { body } => {
            // Zero iterations (skip) first, then one representative pass.
            let mut result = traces.clone();
            let iterated = expand(body, traces, max)?;
            result.extend(iterated);
            check_capacity(result.len(), max)?;
            Ok(result)
        }
        IrNode::TryCatch { body, handlers } => {
            // Each handler continues the pre-try prefix, not the protected
            // body: an exception is modeled as replacing the body's calls.
            let pre_try = traces.clone();
            let mut result = expand(body, traces, max)?;
            for handler in handlers {
                let handler_set = expand(&handler.handler_body, pre_try.clone(), max)?;
                result.extend(handler_set);
                check_capacity(result.len(), max)?;
            }
            Ok(result)
        }
    }
}

/// Derive the deduplicated non-empty prefixes of `sequences`.
///
/// Each input sequence of length L contributes its L prefixes in
/// increasing-length order (the full sequence is its own longest prefix).
/// A prefix already emitted by an earlier sequence is skipped, so the
/// output keeps first-occurrence order with no duplicates. Used to credit
/// partial matches downstream and to enlarge training-example exports.
pub fn expand_prefixes(sequences: &[CallSequence]) -> Vec<CallSequence> {
    let mut seen: HashSet<Vec<String>> = HashSet::new();
    let mut result = Vec::new();

    for sequence in sequences {
        for len in 1..=sequence.calls.len() {
            let prefix = &sequence.calls[..len];
            if !seen.contains(prefix) {
                seen.insert(prefix.to_vec());
                result.push(CallSequence { calls: prefix.to_vec() });
            }
        }
    }

    result
}
