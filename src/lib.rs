//! This crate implements a scapegoat tree: a Binary Search Tree (BST)
//! that keeps itself approximately balanced without storing any balance
//! metadata in its nodes.
//!
//! ## Scapegoat Tree
//!
//! A Binary Search Tree supports operations to insert, find, and delete
//! stored keys. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! Searching a BST takes `O(height)` so the interesting question is how to
//! keep the height near `lg N`. Most self-balancing trees (AVL trees,
//! red-black trees) pay for that with per-node bookkeeping, a stored height
//! or a color bit, and restore balance incrementally with rotations. A
//! scapegoat tree stores nothing per node. It tolerates a bounded amount of
//! imbalance, controlled by a weight factor `α`, and when an insertion makes
//! the tree taller than `log_{1/α} N` it walks back up from the new leaf to
//! find a "scapegoat": an ancestor whose subtree has grown lopsided. That
//! whole subtree is then rebuilt, reusing its existing nodes, into a
//! perfectly balanced one.
//!
//! > Rebuilding a subtree costs `O(subtree size)`, but it happens rarely
//! > enough that the cost amortizes out. In exchange lookups stay within a
//! > constant factor of optimal and nodes stay lean.
//!
//! Deletion is lazier still: the tree remembers the largest size it has
//! reached since it was last rebuilt from the root (its high-water mark) and
//! schedules another full rebuild once enough of the tree has been deleted
//! out from under that mark.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod scapegoat;

#[cfg(test)]
mod test;
