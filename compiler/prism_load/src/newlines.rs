//! Newline marking.
//!
//! A node gets `newline` set when it is the first statement-level node to
//! start on its line. "First" is tracked per scope: blocks and lambdas start
//! with every line unclaimed, so a one-line block body still gets marked
//! even though the enclosing statement claimed that line. The outer claims
//! are restored when the closure is left.

use prism_ir::{Node, NodeKind, NodeTag, SourceError, SourceIndex};
use prism_stack::ensure_sufficient_stack;

pub(crate) struct NewlineMarker<'s> {
    source: &'s SourceIndex,
    /// Claimed lines of the current scope, indexed by line slot.
    marked: Vec<bool>,
}

impl<'s> NewlineMarker<'s> {
    pub(crate) fn new(source: &'s SourceIndex) -> Self {
        NewlineMarker {
            source,
            marked: vec![false; 1 + source.line_count()],
        }
    }

    /// Mark every node of the tree rooted at `root`.
    pub(crate) fn mark(mut self, root: &mut Node) -> Result<(), SourceError> {
        self.visit(root)
    }

    fn visit(&mut self, node: &mut Node) -> Result<(), SourceError> {
        ensure_sufficient_stack(|| self.dispatch(node))
    }

    fn dispatch(&mut self, node: &mut Node) -> Result<(), SourceError> {
        match node.tag() {
            NodeTag::Block | NodeTag::Lambda => {
                self.in_fresh_scope(node.id, |marker| marker.visit_children(node))
            }
            NodeTag::If | NodeTag::Unless => {
                node.set_newline_flag(self.source, &mut self.marked)?;
                self.visit_children(node)
            }
            NodeTag::Statements => self.visit_statements(node),
            _ => self.visit_children(node),
        }
    }

    fn visit_children(&mut self, node: &mut Node) -> Result<(), SourceError> {
        node.kind
            .try_for_each_child_mut(&mut |child| self.visit(child))
    }

    fn visit_statements(&mut self, node: &mut Node) -> Result<(), SourceError> {
        if let NodeKind::Statements { body } = &mut node.kind {
            for statement in body {
                statement.set_newline_flag(self.source, &mut self.marked)?;
                self.visit(statement)?;
            }
        }
        Ok(())
    }

    /// Run `f` with every line unclaimed, then restore the outer claims.
    fn in_fresh_scope<R>(&mut self, node_id: u32, f: impl FnOnce(&mut Self) -> R) -> R {
        tracing::trace!(node_id, "entering closure scope");
        let fresh = vec![false; self.marked.len()];
        let outer = std::mem::replace(&mut self.marked, fresh);
        let result = f(self);
        self.marked = outer;
        tracing::trace!(node_id, "left closure scope");
        result
    }
}
