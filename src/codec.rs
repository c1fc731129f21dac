use std::ptr;

use log::{Level, debug, log_enabled, trace, warn};

use crate::bitstream::Bitstream;
use crate::code_table::{CodeTable, build_code_table, encoded_bit_len};
use crate::error::{HuffmanError, Result};
use crate::frequency::{FreqTable, aggregate};
use crate::tree::{HuffmanTree, Node, build_huffman_tree};

/// Concatenates the code of every byte of `data`.
pub fn encode(data: &[u8], table: &CodeTable) -> Result<Bitstream> {
    debug!("Starting data encoding of {} bytes...", data.len());
    let mut stream = Bitstream::with_capacity(data.len());

    for &byte in data {
        let Some(code) = table.get(&byte) else {
            warn!("Symbol {:#04x} found in data but not in code table", byte);
            return Err(HuffmanError::UnknownSymbol(byte));
        };
        for c in code.chars() {
            stream.push_bit(c == '1');
        }
    }

    debug!(
        "Encoded {} bytes into {} bits ({} bytes, {} valid in last)",
        data.len(),
        stream.len(),
        stream.as_bytes().len(),
        stream.trailing_bits()
    );
    Ok(stream)
}

/// Walks the tree from the root for every symbol, `0` going left and `1`
/// going right, until the stream's valid bits run out.
///
/// For a tree that is a single leaf every `0` bit stands for one occurrence
/// of that leaf's symbol; a `1` bit is rejected.
pub fn decode(stream: &Bitstream, root: &Node) -> Result<Vec<u8>> {
    debug!("Starting bitstream decoding of {} bits...", stream.len());

    if let Node::Leaf { byte, .. } = root {
        trace!("Single-leaf tree, expanding every bit to {:#04x}", byte);
        if let Some(position) = stream.iter().position(|bit| bit) {
            warn!("Unexpected 1 bit at {} for a single-symbol tree", position);
            return Err(HuffmanError::UnexpectedBit { position });
        }
        return Ok(vec![*byte; stream.len()]);
    }

    let mut result = Vec::new();
    let mut current = root;
    let mut consumed = 0;

    for bit in stream.iter() {
        consumed += 1;
        if let Node::Internal { left, right, .. } = current {
            current = if bit { right } else { left };
        }
        if let Node::Leaf { byte, .. } = current {
            result.push(*byte);
            current = root;
        }
    }

    if !ptr::eq(current, root) {
        warn!("Bitstream ended mid-symbol after {} bits", consumed);
        return Err(HuffmanError::TruncatedStream { consumed });
    }

    debug!("Final decoded data size: {} bytes.", result.len());
    Ok(result)
}

/// A tree together with the code table derived from it.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    tree: HuffmanTree,
    table: CodeTable,
}

impl HuffmanCodec {
    pub fn new(tree: HuffmanTree) -> Self {
        let table = build_code_table(&tree);
        HuffmanCodec { tree, table }
    }

    pub fn from_frequencies(frequencies: &FreqTable) -> Result<Self> {
        Ok(Self::new(build_huffman_tree(frequencies)?))
    }

    pub fn from_data(data: &[u8]) -> Result<Self> {
        let frequencies = aggregate(data);
        let codec = Self::from_frequencies(&frequencies)?;
        if log_enabled!(Level::Debug) {
            debug!(
                "Codec ready: {} bytes will encode to {} bits",
                data.len(),
                encoded_bit_len(&frequencies, &codec.table)
            );
        }
        Ok(codec)
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.table
    }

    pub fn encode(&self, data: &[u8]) -> Result<Bitstream> {
        encode(data, &self.table)
    }

    pub fn decode(&self, stream: &Bitstream) -> Result<Vec<u8>> {
        decode(stream, &self.tree)
    }
}
