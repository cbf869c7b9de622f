//! Read-only tree traversal.
//!
//! Implement [`Visitor::visit_node`] to intercept nodes; call [`walk_node`]
//! from the override to continue into children.
//!
//! ```
//! use prism_ir::visitor::{walk_node, Visitor};
//! use prism_ir::{Node, NodeTag};
//!
//! struct CountCalls(usize);
//!
//! impl<'ast> Visitor<'ast> for CountCalls {
//!     fn visit_node(&mut self, node: &'ast Node) {
//!         if node.tag() == NodeTag::Call {
//!             self.0 += 1;
//!         }
//!         walk_node(self, node);
//!     }
//! }
//! ```

use prism_stack::ensure_sufficient_stack;

use crate::Node;

/// Pre-order visitor over a borrowed tree.
pub trait Visitor<'ast> {
    fn visit_node(&mut self, node: &'ast Node) {
        walk_node(self, node);
    }
}

/// Visit every direct child of `node`.
pub fn walk_node<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, node: &'ast Node) {
    ensure_sufficient_stack(|| {
        node.kind
            .for_each_child(&mut |child| visitor.visit_node(child));
    });
}

/// Count `node` and all of its descendants.
pub fn count_nodes(node: &Node) -> usize {
    struct Counter(usize);

    impl<'ast> Visitor<'ast> for Counter {
        fn visit_node(&mut self, node: &'ast Node) {
            self.0 += 1;
            walk_node(self, node);
        }
    }

    let mut counter = Counter(0);
    counter.visit_node(node);
    counter.0
}
