//! The AVL tree itself.
//!
//! Insertion and deletion are recursive over owned links: each level takes
//! its child out of the parent, recurses, and hands back the (possibly
//! rotated) subtree root to be stored again. After an insert the rotation is
//! chosen from where the new key landed; after a delete, from the heavy
//! child's own balance factor.

use std::cmp::Ordering;

use crate::index::node::{Entry, Link, Node, rotate_left, rotate_right};
use crate::index::selector::KeySelector;

/// Outcome of [`KeyedTree::insert`].
#[derive(Debug, PartialEq, Eq)]
pub enum Insertion<R> {
    /// The record is now indexed.
    Inserted,
    /// A record with the same key is already indexed. The tree is unchanged
    /// and the rejected record is handed back.
    Duplicate(R),
}

impl<R> Insertion<R> {
    #[must_use]
    pub const fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted)
    }
}

/// Outcome of a full rebuild under a new key selector.
#[derive(Debug)]
pub struct Rekey<R> {
    /// Number of records indexed after the rebuild.
    pub reindexed: usize,
    /// Records dropped because their new key collided with a record that
    /// came earlier in the old ordering.
    pub displaced: Vec<R>,
}

/// An AVL tree of records ordered by a replaceable key selector.
///
/// The canonical sequence (every indexed record, in insertion order) is not
/// stored separately. Each node carries an insertion stamp and
/// [`records`](Self::records) derives the sequence from the tree, so the two
/// views cannot drift apart.
#[derive(Debug)]
pub struct KeyedTree<R> {
    root: Link<R>,
    selector: KeySelector<R>,
    len: usize,
    next_seq: u64,
}

impl<R> KeyedTree<R> {
    /// Create an empty tree ordered by `selector`.
    #[must_use]
    pub const fn new(selector: KeySelector<R>) -> Self {
        Self {
            root: None,
            selector,
            len: 0,
            next_seq: 0,
        }
    }

    /// Number of indexed records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The root node, if any.
    #[must_use]
    pub fn root(&self) -> Option<&Node<R>> {
        self.root.as_deref()
    }

    /// The key `record` has (or would have) under the active selector.
    #[must_use]
    pub fn key_of(&self, record: &R) -> String {
        self.selector.key(record)
    }

    /// Index `record` under the active selector.
    ///
    /// If its key is already present the tree is left untouched and the
    /// record is returned in [`Insertion::Duplicate`].
    pub fn insert(&mut self, record: R) -> Insertion<R> {
        let key = self.selector.key(&record);
        let entry = Entry {
            key,
            seq: self.next_seq,
            record,
        };

        let (root, outcome) = insert_node(self.root.take(), entry);
        self.root = Some(root);

        if outcome.is_inserted() {
            self.len += 1;
            self.next_seq += 1;
        }
        outcome
    }

    /// Look up the record with the given key.
    #[must_use]
    pub fn search(&self, key: &str) -> Option<&R> {
        self.find(key).map(Node::record)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    fn find(&self, key: &str) -> Option<&Node<R>> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(node.key()) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Remove the record with the given key and return it.
    ///
    /// The key is matched under the active selector. Removing a missing key
    /// is a no-op.
    pub fn delete(&mut self, key: &str) -> Option<R> {
        let (root, removed) = delete_node(self.root.take(), key);
        self.root = root;

        let removed = removed?;
        self.len -= 1;
        tracing::debug!(key, remaining = self.len, "deleted record");
        Some(removed.record)
    }

    /// Rebuild the tree under a primary key, falling back to `secondary`.
    ///
    /// Records with an empty primary key are ordered after all others, by
    /// their secondary key. See [`KeySelector::composite`].
    pub fn change_key(
        &mut self,
        primary: impl Fn(&R) -> String + 'static,
        secondary: Option<KeySelector<R>>,
    ) -> Rekey<R>
    where
        R: 'static,
    {
        self.set_selector(KeySelector::composite(primary, secondary))
    }

    /// Install `selector` and rebuild the tree under it.
    ///
    /// Every record is taken out of the old tree in its old order before any
    /// is reinserted. Records whose new key collides with an earlier record
    /// are dropped just like a duplicate insert and returned in
    /// [`Rekey::displaced`].
    pub fn set_selector(&mut self, selector: KeySelector<R>) -> Rekey<R> {
        let mut snapshot = Vec::with_capacity(self.len);
        drain_in_order(self.root.take(), &mut snapshot);
        self.len = 0;
        self.selector = selector;

        let mut displaced = Vec::new();
        for record in snapshot {
            if let Insertion::Duplicate(record) = self.insert(record) {
                displaced.push(record);
            }
        }

        if !displaced.is_empty() {
            tracing::warn!(
                displaced = displaced.len(),
                "records dropped by key collision during rebuild"
            );
        }
        tracing::debug!(reindexed = self.len, "rebuilt index under new key");

        Rekey {
            reindexed: self.len,
            displaced,
        }
    }

    /// Iterate over the records in ascending key order.
    #[must_use]
    pub fn in_order(&self) -> InOrder<'_, R> {
        InOrder::new(self.root())
    }

    /// Iterate over `(key, record)` pairs in ascending key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &R)> {
        let mut walk = InOrder::new(self.root());
        std::iter::from_fn(move || walk.next_node().map(|node| (node.key(), node.record())))
    }

    /// Every indexed record in the order it was inserted.
    ///
    /// After a rebuild this is the key order from before the rebuild.
    #[must_use]
    pub fn records(&self) -> Vec<&R> {
        let mut nodes = Vec::with_capacity(self.len);
        let mut walk = InOrder::new(self.root());
        while let Some(node) = walk.next_node() {
            nodes.push(node);
        }
        nodes.sort_unstable_by_key(|node| node.entry.seq);
        nodes.into_iter().map(Node::record).collect()
    }
}

fn insert_node<R>(link: Link<R>, entry: Entry<R>) -> (Box<Node<R>>, Insertion<R>) {
    let Some(mut node) = link else {
        return (Box::new(Node::new(entry)), Insertion::Inserted);
    };

    match entry.key.as_str().cmp(node.key()) {
        Ordering::Equal => (node, Insertion::Duplicate(entry.record)),
        ordering => {
            // The key is needed after the entry moves into the subtree.
            let key = entry.key.clone();
            let outcome = if ordering == Ordering::Less {
                let (child, outcome) = insert_node(node.left.take(), entry);
                node.left = Some(child);
                outcome
            } else {
                let (child, outcome) = insert_node(node.right.take(), entry);
                node.right = Some(child);
                outcome
            };

            if !outcome.is_inserted() {
                return (node, outcome);
            }
            node.update_height();
            (rebalance_after_insert(node, &key), outcome)
        }
    }
}

/// Restore balance on the path of a fresh insert.
///
/// The case is picked by comparing the inserted key with the key of the
/// child on the heavy side: outside it is a single rotation, inside a
/// double one.
fn rebalance_after_insert<R>(mut node: Box<Node<R>>, key: &str) -> Box<Node<R>> {
    let balance = node.balance_factor();

    if balance > 1 {
        match node.left().map(|left| key.cmp(left.key())) {
            Some(Ordering::Less) => return rotate_right(node),
            Some(Ordering::Greater) => {
                node.left = node.left.take().map(rotate_left);
                return rotate_right(node);
            }
            _ => {}
        }
    } else if balance < -1 {
        match node.right().map(|right| key.cmp(right.key())) {
            Some(Ordering::Greater) => return rotate_left(node),
            Some(Ordering::Less) => {
                node.right = node.right.take().map(rotate_right);
                return rotate_left(node);
            }
            _ => {}
        }
    }

    node
}

fn delete_node<R>(link: Link<R>, key: &str) -> (Link<R>, Option<Entry<R>>) {
    let Some(mut node) = link else {
        return (None, None);
    };

    let removed = match key.cmp(node.key()) {
        Ordering::Less => {
            let (child, removed) = delete_node(node.left.take(), key);
            node.left = child;
            removed
        }
        Ordering::Greater => {
            let (child, removed) = delete_node(node.right.take(), key);
            node.right = child;
            removed
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => return (None, Some(node.into_entry())),
            (Some(child), None) | (None, Some(child)) => {
                return (Some(child), Some(node.into_entry()));
            }
            (Some(left), Some(right)) => {
                node.left = Some(left);
                let successor_key = leftmost(&right).key().to_string();
                let (rest, successor) = delete_node(Some(right), &successor_key);
                node.right = rest;
                let Some(successor) = successor else {
                    unreachable!("leftmost key of a subtree is always found in it");
                };
                Some(std::mem::replace(&mut node.entry, successor))
            }
        },
    };

    if removed.is_none() {
        return (Some(node), None);
    }
    node.update_height();
    (Some(rebalance_after_delete(node)), removed)
}

/// Restore balance on the path of a delete, using the heavy child's own
/// balance factor to choose between a single and a double rotation.
fn rebalance_after_delete<R>(mut node: Box<Node<R>>) -> Box<Node<R>> {
    let balance = node.balance_factor();

    if balance > 1 {
        if node.left().is_some_and(|left| left.balance_factor() < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if balance < -1 {
        if node.right().is_some_and(|right| right.balance_factor() > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

fn leftmost<R>(node: &Node<R>) -> &Node<R> {
    let mut current = node;
    while let Some(left) = current.left() {
        current = left;
    }
    current
}

/// Move every record out of a subtree, in key order.
fn drain_in_order<R>(link: Link<R>, out: &mut Vec<R>) {
    if let Some(node) = link {
        let Node {
            entry, left, right, ..
        } = *node;
        drain_in_order(left, out);
        out.push(entry.record);
        drain_in_order(right, out);
    }
}

/// In-order iterator over the records of a [`KeyedTree`].
///
/// Walks the tree with an explicit stack of ancestors, so each step is
/// amortized O(1) and nothing is collected up front.
#[derive(Debug)]
pub struct InOrder<'a, R> {
    stack: Vec<&'a Node<R>>,
}

impl<'a, R> InOrder<'a, R> {
    fn new(root: Option<&'a Node<R>>) -> Self {
        let mut walk = Self { stack: Vec::new() };
        walk.push_left_spine(root);
        walk
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<R>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }

    fn next_node(&mut self) -> Option<&'a Node<R>> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}

impl<'a, R> Iterator for InOrder<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(Node::record)
    }
}
