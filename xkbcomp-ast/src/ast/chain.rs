//! Node header shared by every tree node, and the sibling chains built from it.
//!
//! A [`Node`] pairs a definition with a `next` link. Chains own their nodes
//! outright; appending moves nodes in and dropping a chain releases them one
//! at a time, so long statement lists never recurse along the sibling link.

use std::fmt;
use std::iter::FromIterator;

use xkbcomp_core::StmtType;

/// Anything that can sit in the tree reports its kind tag.
pub trait Statement {
    fn stmt_type(&self) -> StmtType;
}

/// A tree node: the definition plus the rest of its sibling chain.
pub struct Node<T> {
    pub def: T,
    pub next: Chain<T>,
}

impl<T> Node<T> {
    /// A detached node with an empty `next` link.
    pub fn new(def: T) -> Box<Self> {
        Box::new(Node {
            def,
            next: Chain::new(),
        })
    }
}

impl<T: Statement> Node<T> {
    pub fn stmt_type(&self) -> StmtType {
        self.def.stmt_type()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("def", &self.def)
            .field("next", &self.next)
            .finish()
    }
}

/// Singly linked, order-preserving sequence of nodes. May be empty.
pub struct Chain<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> Chain<T> {
    pub const fn new() -> Self {
        Chain { head: None }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn first(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.def)
    }

    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.def)
    }

    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Links `other` after the last node of `self`.
    ///
    /// Walks the whole of `self`, so building a list of n statements one at a
    /// time costs O(n²) node visits, same as the grammar's list productions.
    pub fn append(mut self, other: Chain<T>) -> Chain<T> {
        if other.is_empty() {
            return self;
        }
        if self.is_empty() {
            return other;
        }

        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next.head;
        }
        *cursor = other.into_head();
        self
    }

    /// Appends a single node (which may itself head a chain).
    pub fn push(&mut self, node: Box<Node<T>>) {
        let chain = std::mem::take(self);
        *self = chain.append(Chain::from(node));
    }

    /// Detaches the first node, leaving the rest of the chain in `self`.
    pub fn pop_front(&mut self) -> Option<Box<Node<T>>> {
        let mut node = self.head.take()?;
        self.head = node.next.head.take();
        Some(node)
    }

    /// Converts every definition, keeping chain order.
    pub fn map<U, F: FnMut(T) -> U>(mut self, mut f: F) -> Chain<U> {
        let mut defs = Vec::new();
        while let Some(node) = self.pop_front() {
            let Node { def, .. } = *node;
            defs.push(f(def));
        }
        defs.into_iter().collect()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }

    fn into_head(mut self) -> Option<Box<Node<T>>> {
        self.head.take()
    }
}

impl<T: Statement> Chain<T> {
    /// Kind tags of every node, in chain order.
    pub fn kinds(&self) -> Vec<StmtType> {
        self.iter().map(Statement::stmt_type).collect()
    }
}

/// Appends `append` (possibly empty, possibly a chain) to the end of `to`.
pub fn append_stmt<T>(to: Chain<T>, append: Chain<T>) -> Chain<T> {
    to.append(append)
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Chain::new()
    }
}

impl<T> From<Box<Node<T>>> for Chain<T> {
    fn from(node: Box<Node<T>>) -> Self {
        Chain { head: Some(node) }
    }
}

impl<T> From<Option<Box<Node<T>>>> for Chain<T> {
    fn from(head: Option<Box<Node<T>>>) -> Self {
        Chain { head }
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let defs: Vec<T> = iter.into_iter().collect();
        let mut chain = Chain::new();
        for def in defs.into_iter().rev() {
            let mut node = Node::new(def);
            node.next = chain;
            chain = Chain::from(node);
        }
        chain
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.head.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.head.as_deref();
            &node.def
        })
    }
}

pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.head.as_deref_mut();
            &mut node.def
        })
    }
}
