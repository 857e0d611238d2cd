use thiserror::Error;

/// Why [`Tree::accessor`](crate::Tree::accessor) refused to build an accessor.
///
/// An accessor is either fully valid or not built at all: its depth always
/// equals the number of parent links between its node and the root.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq, Hash)]
pub enum AccessorError {
    /// The tree has no nodes, so there is nothing to bind to, not even the
    /// past-the-end position.
    #[error("cannot bind an accessor to an empty tree")]
    EmptyTree,
    /// A concrete depth was requested for the past-the-end position.
    #[error("the end position has no depth, but depth {requested} was requested")]
    EndPosition { requested: usize },
    /// The node is not `requested` parent links away from the root.
    #[error("depth {requested} was requested, but the node is at depth {actual}")]
    DepthMismatch { requested: usize, actual: usize },
}
