use thiserror::Error;

pub type MerkleResult<T> = Result<T, MerkleError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    #[error("cannot build a merkle tree from zero leaves")]
    EmptyLeaves,

    #[error("leaf index {index} out of range for tree with {leaf_count} leaves")]
    IndexOutOfRange { index: usize, leaf_count: usize },

    #[error("malformed proof: {0}")]
    MalformedProof(String),
}
