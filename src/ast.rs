//! Opaque source annotations attached to declarations.

use std::{any::Any, fmt, sync::Arc};

/// Opaque source-annotation payload (such as a syntax tree node with its
/// source position) attached to a declaration.
///
/// This crate never inspects the payload: it's carried from the declaration
/// onto the live type and handed back unchanged to downstream consumers
/// (parsers, printers, error reporters) that know its concrete type.
///
/// Two [`AstNode`]s are equal only if they share the same payload instance.
#[derive(Clone)]
pub struct AstNode(Arc<dyn Any + Send + Sync>);

impl AstNode {
    /// Wraps the provided `node` into an opaque [`AstNode`].
    pub fn new<T: Any + Send + Sync>(node: T) -> Self {
        Self(Arc::new(node))
    }

    /// Returns the payload if it's of type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    /// Indicates whether both [`AstNode`]s share the same payload.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for AstNode {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AstNode(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::AstNode;

    #[derive(Debug, PartialEq)]
    struct Position {
        line: usize,
        column: usize,
    }

    #[test]
    fn passes_payload_through() {
        let node = AstNode::new(Position { line: 3, column: 7 });

        assert_eq!(
            node.downcast_ref::<Position>(),
            Some(&Position { line: 3, column: 7 }),
        );
        assert_eq!(node.downcast_ref::<String>(), None);
    }

    #[test]
    fn compares_by_identity() {
        let node = AstNode::new(Position { line: 1, column: 1 });
        let same = node.clone();
        let other = AstNode::new(Position { line: 1, column: 1 });

        assert_eq!(node, same);
        assert_ne!(node, other);
    }
}
