use std::collections::HashMap;

use log::{debug, trace};

use crate::frequency::FreqTable;
use crate::tree::Node;

/// Symbol to code, each code a string of `'0'` and `'1'`.
pub type CodeTable = HashMap<u8, String>;

/// Walks the tree depth-first, `0` for left and `1` for right.
///
/// A tree made of a single leaf has no edges to walk, so its symbol is
/// given the one-bit code `"0"`.
pub fn build_code_table(root: &Node) -> CodeTable {
    let mut table = CodeTable::new();
    match root {
        Node::Leaf { byte, .. } => {
            trace!("Single-symbol tree, assigning '0' to byte {:#04x}", byte);
            table.insert(*byte, String::from("0"));
        }
        Node::Internal { .. } => fill(root, String::new(), &mut table),
    }
    debug!("Code table built with {} entries", table.len());
    table
}

fn fill(node: &Node, prefix: String, table: &mut CodeTable) {
    match node {
        Node::Leaf { byte, .. } => {
            trace!(
                "Assigning code to byte {:#04x} ('{}') : '{}'",
                byte,
                (*byte as char).escape_default(),
                prefix
            );
            table.insert(*byte, prefix);
        }
        Node::Internal { left, right, .. } => {
            fill(left, format!("{}0", prefix), table);
            fill(right, format!("{}1", prefix), table);
        }
    }
}

/// Number of bits the encoder will emit for data with these frequencies.
///
/// Symbols missing from `table` contribute nothing.
pub fn encoded_bit_len(frequencies: &FreqTable, table: &CodeTable) -> u64 {
    frequencies
        .iter()
        .filter_map(|(byte, &freq)| table.get(byte).map(|code| freq * code.len() as u64))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::{aggregate, freq_table_from_pairs};
    use crate::tree::build_huffman_tree;

    fn table_for(data: &[u8]) -> CodeTable {
        build_code_table(&build_huffman_tree(&aggregate(data)).unwrap())
    }

    #[test]
    fn single_symbol_gets_zero() {
        let table = table_for(b"aaaa");
        assert_eq!(table.len(), 1);
        assert_eq!(table[&b'a'], "0");
    }

    #[test]
    fn two_symbols_get_one_bit_each() {
        let table = table_for(b"aab");
        assert_eq!(table[&b'b'], "0");
        assert_eq!(table[&b'a'], "1");
    }

    #[test]
    fn codes_are_prefix_free() {
        let table = table_for(b"the quick brown fox jumps over the lazy dog");
        for (a, code_a) in &table {
            assert!(!code_a.is_empty());
            for (b, code_b) in &table {
                if a != b {
                    assert!(!code_b.starts_with(code_a.as_str()));
                }
            }
        }
    }

    #[test]
    fn reference_alphabet_codes() {
        let freq = freq_table_from_pairs([(1, 10), (2, 5), (3, 2), (4, 14), (5, 15)]);
        let table = build_code_table(&build_huffman_tree(&freq).unwrap());

        assert_eq!(table[&3], "000");
        assert_eq!(table[&2], "001");
        assert_eq!(table[&1], "01");
        assert_eq!(table[&4], "10");
        assert_eq!(table[&5], "11");
        assert_eq!(encoded_bit_len(&freq, &table), 2 * 3 + 5 * 3 + 10 * 2 + 14 * 2 + 15 * 2);
    }

    #[test]
    fn frequent_symbols_get_shorter_codes() {
        let table = table_for(b"aaaaaaaabbbbccd");
        assert!(table[&b'a'].len() <= table[&b'b'].len());
        assert!(table[&b'b'].len() <= table[&b'c'].len());
        assert!(table[&b'c'].len() <= table[&b'd'].len());
    }
}
