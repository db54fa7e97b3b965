/// Failures of the universal coder.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("cannot encode negative value {0}")]
    InvalidInput(i64),

    #[error("code {0:?} contains characters other than '0' and '1'")]
    InvalidCode(String),

    #[error("code {0:?} ends before its announced length")]
    Truncated(String),

    #[error("code {code:?} has {extra} bit(s) past its end")]
    TrailingBits { code: String, extra: usize },

    #[error("code {0:?} describes a value wider than 64 bits")]
    Overflow(String),

    #[error("decoded value {0} does not fit a document id")]
    DocIdOverflow(u64),
}
