use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    #[error("cannot build a Huffman tree from an empty alphabet")]
    EmptyAlphabet,

    #[error("priority queue is empty")]
    EmptyQueue,

    #[error("symbol {0:#04x} has no entry in the code table")]
    UnknownSymbol(u8),

    #[error("bitstream ended mid-symbol after {consumed} bits")]
    TruncatedStream { consumed: usize },

    #[error("bit {position} cannot occur in a stream coded with a single-symbol tree")]
    UnexpectedBit { position: usize },

    #[error("total symbol weight does not fit in 64 bits")]
    WeightOverflow,

    #[error("invalid trailing bit count {trailing} for a {bytes}-byte buffer")]
    InvalidTrailingBits { bytes: usize, trailing: u8 },
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
