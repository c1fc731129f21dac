use log::debug;

use crate::error::{HuffmanError, Result};
use crate::frequency::FreqTable;
use crate::min_heap::{MinHeap, Weighted};

/// A node of the code tree. Internal nodes own both children.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Node {
    Leaf {
        byte: u8,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    pub fn symbol(&self) -> Option<u8> {
        match self {
            Node::Leaf { byte, .. } => Some(*byte),
            Node::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Joins two subtrees; `left` is the one extracted first.
    pub fn merge(left: Node, right: Node) -> Result<Node> {
        let freq = left
            .freq()
            .checked_add(right.freq())
            .ok_or(HuffmanError::WeightOverflow)?;
        Ok(Node::Internal {
            freq,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl Weighted for Node {
    fn weight(&self) -> u64 {
        self.freq()
    }
}

pub type HuffmanTree = Node;

pub fn build_huffman_tree(frequencies: &FreqTable) -> Result<HuffmanTree> {
    debug!(
        "Building Huffman Tree from {} unique symbols",
        frequencies.len()
    );

    // Zero counts never occur in the data and must not get a code.
    let mut freq_vec: Vec<(u8, u64)> = frequencies
        .iter()
        .filter(|&(_, &f)| f > 0)
        .map(|(&b, &f)| (b, f))
        .collect();
    if freq_vec.is_empty() {
        return Err(HuffmanError::EmptyAlphabet);
    }

    // HashMap order is random; fix the insertion order so ties resolve the same way every run.
    freq_vec.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));

    let mut heap: MinHeap<Node> = freq_vec
        .into_iter()
        .map(|(byte, freq)| Node::Leaf { byte, freq })
        .collect();
    debug!("Initial heap size: {}", heap.size());

    while heap.size() > 1 {
        let left = heap.extract_min()?;
        let right = heap.extract_min()?;
        heap.insert(Node::merge(left, right)?);
    }

    let root = heap.extract_min()?;
    debug!(
        "Tree construction complete. Total weight: {}, depth: {}",
        root.freq(),
        root.depth()
    );
    Ok(root)
}
