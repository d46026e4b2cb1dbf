use alloy_primitives::{keccak256, B256};

/// Keccak-256 hashing rules shared by tree construction and proof
/// verification.
///
/// The hash function and the byte-concatenation order fixed here are the
/// interoperability contract of the whole crate: a remote verifier that
/// recomputes a root from a leaf and a proof must use exactly these rules.
#[derive(Clone, Debug)]
pub struct Keccak256Hasher;

impl Keccak256Hasher {
    /// Derive a leaf digest from arbitrary identifying bytes.
    ///
    /// Transaction hashes fetched from a node are already 32-byte digests and
    /// can be used as leaves directly; this helper is for hosts that commit
    /// to other identifying bytes.
    pub fn hash_leaf(data: &[u8]) -> B256 {
        keccak256(data)
    }

    /// Hash one adjacent pair into its parent digest.
    ///
    /// Concatenation is positional (`left || right`), never sorted. Sorting
    /// the pair would make the root commutative over sibling order and break
    /// compatibility with verifiers that reproduce positional pairing.
    pub fn hash_pair(left: &B256, right: &B256) -> B256 {
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(left.as_slice());
        buf[32..].copy_from_slice(right.as_slice());
        keccak256(buf)
    }
}
