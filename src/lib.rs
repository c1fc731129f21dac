//! # huffman_coding
//!
//! Byte-oriented Huffman coding: count symbol frequencies, build the code
//! tree over a stable min-heap, derive the prefix-code table and use it to
//! pack data into a bitstream and back.
//!
//! ```rust
//! use huffman_coding::{aggregate, build_code_table, build_huffman_tree, decode, encode};
//!
//! let data = b"abracadabra";
//! let tree = build_huffman_tree(&aggregate(data))?;
//! let table = build_code_table(&tree);
//!
//! let stream = encode(data, &table)?;
//! assert_eq!(decode(&stream, &tree)?, data.to_vec());
//! # Ok::<(), huffman_coding::HuffmanError>(())
//! ```

pub mod bitstream;
pub mod code_table;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod min_heap;
pub mod tree;

pub use bitstream::Bitstream;
pub use code_table::{CodeTable, build_code_table, encoded_bit_len};
pub use codec::{HuffmanCodec, decode, encode};
pub use error::{HuffmanError, Result};
pub use frequency::{FreqTable, aggregate, entropy_from_freq, freq_table_from_pairs};
pub use min_heap::{MinHeap, Weighted};
pub use tree::{HuffmanTree, Node, build_huffman_tree};
