//! Container strategies under test
//!
//! Each strategy keeps its values sorted ascending by appending a value and
//! then re-sorting the whole container. No incremental insertion is used:
//! the point is to compare the raw re-sort cost of the two layouts.

use serde::Serialize;
use std::collections::LinkedList;
use std::fmt;

/// Which container a measurement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Contiguous, amortized-growth array
    Vector,
    /// Doubly linked list of individually allocated nodes
    List,
}

impl Strategy {
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Vector => "vect<int>",
            Strategy::List => "list<int>",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A sequence of `i32` that is sorted ascending after every insertion.
pub trait SortedSequence: Default {
    const STRATEGY: Strategy;

    /// Append `value`, then re-sort the entire sequence.
    fn insert_and_resort(&mut self, value: i32);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Non-decreasing order check.
    fn is_sorted(&self) -> bool;

    fn to_vec(&self) -> Vec<i32>;
}

/// Array-backed sequence
#[derive(Debug, Default, Clone)]
pub struct VecSequence {
    values: Vec<i32>,
}

impl SortedSequence for VecSequence {
    const STRATEGY: Strategy = Strategy::Vector;

    fn insert_and_resort(&mut self, value: i32) {
        self.values.push(value);
        self.values.sort_unstable();
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }

    fn to_vec(&self) -> Vec<i32> {
        self.values.clone()
    }
}

/// Node-linked sequence
#[derive(Debug, Default, Clone)]
pub struct ListSequence {
    values: LinkedList<i32>,
}

impl SortedSequence for ListSequence {
    const STRATEGY: Strategy = Strategy::List;

    fn insert_and_resort(&mut self, value: i32) {
        self.values.push_back(value);
        sort_list(&mut self.values);
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn is_sorted(&self) -> bool {
        let mut iter = self.values.iter();
        let Some(mut prev) = iter.next() else {
            return true;
        };
        for next in iter {
            if next < prev {
                return false;
            }
            prev = next;
        }
        true
    }

    fn to_vec(&self) -> Vec<i32> {
        self.values.iter().copied().collect()
    }
}

/// Stable top-down merge sort over a linked list.
///
/// Nodes are moved with `split_off`/`append` rather than popped and pushed,
/// so the sort relinks the existing allocations.
pub fn sort_list<T: Ord>(list: &mut LinkedList<T>) {
    let len = list.len();
    if len < 2 {
        return;
    }

    let mut right = list.split_off(len / 2);
    let mut left = std::mem::take(list);
    sort_list(&mut left);
    sort_list(&mut right);

    loop {
        let take_right = match (left.front(), right.front()) {
            (Some(l), Some(r)) => r < l,
            _ => break,
        };
        let source = if take_right { &mut right } else { &mut left };
        // detach the head node and link it onto the output
        let rest = source.split_off(1);
        list.append(source);
        *source = rest;
    }

    list.append(&mut left);
    list.append(&mut right);
}
