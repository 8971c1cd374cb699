//! AVL tree nodes and rotations.

/// Owning link to a subtree.
pub(crate) type Link<R> = Option<Box<Node<R>>>;

/// The payload a node carries: the record, its key and its insertion stamp.
///
/// Moves as a unit when a node with two children takes over its in-order
/// successor's record during deletion.
#[derive(Debug)]
pub(crate) struct Entry<R> {
    pub key: String,
    /// Insertion sequence number, used to recover insertion order.
    pub seq: u64,
    pub record: R,
}

/// A node of a [`KeyedTree`](super::KeyedTree).
#[derive(Debug)]
pub struct Node<R> {
    pub(crate) entry: Entry<R>,
    pub(crate) height: u32,
    pub(crate) left: Link<R>,
    pub(crate) right: Link<R>,
}

impl<R> Node<R> {
    pub(crate) const fn new(entry: Entry<R>) -> Self {
        Self {
            entry,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// The key this node is ordered by.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.entry.key
    }

    #[must_use]
    pub const fn record(&self) -> &R {
        &self.entry.record
    }

    /// Height of the subtree rooted here (1 for a leaf).
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// `height(left) - height(right)`.
    #[must_use]
    pub fn balance_factor(&self) -> i64 {
        i64::from(height(self.left())) - i64::from(height(self.right()))
    }

    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(self.left()).max(height(self.right()));
    }

    pub(crate) fn into_entry(self) -> Entry<R> {
        self.entry
    }
}

/// Height of an optional subtree; an absent subtree has height 0.
#[must_use]
pub fn height<R>(node: Option<&Node<R>>) -> u32 {
    node.map_or(0, Node::height)
}

/// Rotate `node` right, promoting its left child.
///
/// # Panics
///
/// Panics if `node` has no left child. Rebalancing only rotates towards the
/// taller side, so this indicates a broken height invariant.
pub(crate) fn rotate_right<R>(mut node: Box<Node<R>>) -> Box<Node<R>> {
    let Some(mut pivot) = node.left.take() else {
        panic!("rotate_right on a node without a left child");
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

/// Rotate `node` left, promoting its right child.
///
/// # Panics
///
/// Panics if `node` has no right child.
pub(crate) fn rotate_left<R>(mut node: Box<Node<R>>) -> Box<Node<R>> {
    let Some(mut pivot) = node.right.take() else {
        panic!("rotate_left on a node without a right child");
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}
