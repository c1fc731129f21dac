use std::collections::HashMap;

use log::{debug, trace};

pub type FreqTable = HashMap<u8, u64>;

/// Counts occurrences of every distinct byte in `data`.
///
/// An empty input yields an empty table.
pub fn aggregate(data: &[u8]) -> FreqTable {
    let mut freq = FreqTable::new();
    for &byte in data {
        *freq.entry(byte).or_insert(0) += 1;
    }
    debug!(
        "Aggregated {} bytes into {} unique symbols",
        data.len(),
        freq.len()
    );
    freq
}

/// Builds a table from explicit `(symbol, count)` pairs.
///
/// Repeated symbols are summed, saturating at `u64::MAX`, and zero counts
/// are dropped, so every entry of the result is strictly positive.
pub fn freq_table_from_pairs<I>(pairs: I) -> FreqTable
where
    I: IntoIterator<Item = (u8, u64)>,
{
    let mut freq = FreqTable::new();
    for (byte, count) in pairs {
        if count == 0 {
            trace!("Skipping zero count for byte {:#04x}", byte);
            continue;
        }
        let entry = freq.entry(byte).or_insert(0);
        *entry = entry.saturating_add(count);
    }
    freq
}

/// Shannon entropy of the distribution, in bits per symbol.
///
/// Zero counts carry no probability mass and are ignored.
pub fn entropy_from_freq(freq: &FreqTable) -> f64 {
    let total_f: f64 = freq.values().map(|&count| count as f64).sum();
    if total_f == 0.0 {
        return 0.0;
    }

    let entropy: f64 = freq
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total_f;
            -p * p.log2()
        })
        .sum();

    debug!(
        "Calculated entropy: {:.4} bits/symbol (Total samples: {})",
        entropy, total_f
    );
    entropy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gives_empty_table() {
        assert!(aggregate(b"").is_empty());
    }

    #[test]
    fn counts_sum_to_input_length() {
        let data = b"abracadabra";
        let freq = aggregate(data);

        assert_eq!(freq.values().sum::<u64>(), data.len() as u64);
        assert_eq!(freq[&b'a'], 5);
        assert_eq!(freq[&b'b'], 2);
        assert_eq!(freq[&b'r'], 2);
        assert_eq!(freq[&b'c'], 1);
        assert_eq!(freq[&b'd'], 1);
        assert!(freq.values().all(|&c| c > 0));
    }

    #[test]
    fn pairs_merge_duplicates_and_drop_zeros() {
        let freq = freq_table_from_pairs([(1, 10), (2, 0), (1, 4), (3, 2)]);

        assert_eq!(freq.len(), 2);
        assert_eq!(freq[&1], 14);
        assert_eq!(freq[&3], 2);
        assert!(!freq.contains_key(&2));
    }

    #[test]
    fn pairs_saturate_instead_of_overflowing() {
        let freq = freq_table_from_pairs([(1, u64::MAX), (1, 1), (2, 3)]);
        assert_eq!(freq[&1], u64::MAX);
        assert_eq!(freq[&2], 3);
    }

    #[test]
    fn entropy_ignores_zero_counts() {
        let freq = FreqTable::from([(1, 0), (2, 4)]);
        assert_eq!(entropy_from_freq(&freq), 0.0);

        let freq = FreqTable::from([(1, 0), (2, 1), (3, 1)]);
        assert!((entropy_from_freq(&freq) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn entropy_of_huge_counts_is_finite() {
        let freq = FreqTable::from([(1, u64::MAX), (2, u64::MAX)]);
        assert!((entropy_from_freq(&freq) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn entropy_of_uniform_distribution() {
        let freq = aggregate(b"abcd");
        assert!((entropy_from_freq(&freq) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn entropy_of_single_symbol_is_zero() {
        assert_eq!(entropy_from_freq(&aggregate(b"aaaa")), 0.0);
        assert_eq!(entropy_from_freq(&FreqTable::new()), 0.0);
    }
}
