//! Graph-structured stack.
//!
//! An append-only arena of stacks: the `Initial` sentinel at index 0, then one
//! `Frame` per (return label, origin token) per generation. Where a call stack
//! would hold one return address, a frame holds a set of links, one per
//! distinct caller that reached it, each carrying the prefix recognized when
//! the call was made.
//!
//! Stacks are never removed; the arena doubles as the exporter's view of
//! every stack created during a parse.

use std::fmt;

use indexmap::IndexSet;
use trellis_core::Label;

use super::sppf::IntermediateId;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct StackId(u32);

impl StackId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for StackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// Edge from a frame to one of its callers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Link {
    pub caller: StackId,
    pub prefix: IntermediateId,
}

#[derive(Clone, Debug)]
pub enum Stack {
    Initial,
    Frame {
        /// Where results continue in each caller.
        label: Label,
        /// Index of the token that was current when the frame was created.
        origin: u32,
        links: IndexSet<Link>,
    },
}

#[derive(Debug)]
pub struct Gss {
    stacks: Vec<Stack>,
}

impl Default for Gss {
    fn default() -> Self {
        Self::new()
    }
}

impl Gss {
    /// The bottom of every stack.
    pub const INITIAL: StackId = StackId(0);

    pub fn new() -> Self {
        Self {
            stacks: vec![Stack::Initial],
        }
    }

    pub(crate) fn add_frame(&mut self, label: Label, origin: u32) -> StackId {
        let id = StackId(self.stacks.len() as u32);
        self.stacks.push(Stack::Frame {
            label,
            origin,
            links: IndexSet::new(),
        });
        id
    }

    /// Returns false if the frame already had this link.
    ///
    /// # Panics
    /// Panics when linking from the initial stack.
    pub(crate) fn add_link(&mut self, frame: StackId, link: Link) -> bool {
        match &mut self.stacks[frame.0 as usize] {
            Stack::Frame { links, .. } => links.insert(link),
            Stack::Initial => unreachable!("initial stack has no callers"),
        }
    }

    #[inline]
    pub fn get(&self, id: StackId) -> &Stack {
        &self.stacks[id.0 as usize]
    }

    /// Return label of a frame; `None` for the initial stack.
    #[inline]
    pub fn label(&self, id: StackId) -> Option<Label> {
        match self.get(id) {
            Stack::Frame { label, .. } => Some(*label),
            Stack::Initial => None,
        }
    }

    pub fn link_count(&self, id: StackId) -> usize {
        match self.get(id) {
            Stack::Frame { links, .. } => links.len(),
            Stack::Initial => 0,
        }
    }

    /// # Panics
    /// Panics if `index` is out of range.
    #[inline]
    pub fn link(&self, id: StackId, index: usize) -> Link {
        match self.get(id) {
            Stack::Frame { links, .. } => links[index],
            Stack::Initial => panic!("initial stack has no links"),
        }
    }

    pub fn links(&self, id: StackId) -> impl Iterator<Item = Link> + '_ {
        let links = match self.get(id) {
            Stack::Frame { links, .. } => Some(links),
            Stack::Initial => None,
        };
        links.into_iter().flatten().copied()
    }

    /// Every stack ever created, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (StackId, &Stack)> {
        self.stacks
            .iter()
            .enumerate()
            .map(|(i, stack)| (StackId(i as u32), stack))
    }
}
