use std::fmt;

use blockproof_merkle::{InclusionProof, B256};
use serde::Serialize;

/// What a verification attempt established, beyond the bare boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// The proof reconstructed the committed root; the leaf is included.
    Included,
    /// The target is not a leaf of the tree. There was no proof to check,
    /// which is not the same as a proof being rejected.
    NotInTree,
    /// A non-empty proof was checked and did not reconstruct the root.
    RootMismatch,
}

/// Tagged verification result for host presentation.
///
/// Keeps the user-facing classification separate from the core's pure boolean
/// so hosts never surface a crash or an ambiguous "invalid" to the end user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VerificationOutcome {
    pub verified: bool,
    pub status: VerificationStatus,
}

impl VerificationOutcome {
    /// Classify a `(leaf, proof, root)` triple.
    ///
    /// An empty proof only carries an inclusion claim for the single-leaf
    /// tree, where the leaf is the root; any other empty proof is
    /// [`VerificationStatus::NotInTree`] rather than a rejection.
    pub fn evaluate(leaf: &B256, proof: &InclusionProof, root: &B256) -> Self {
        if proof.is_empty() && leaf != root {
            return Self {
                verified: false,
                status: VerificationStatus::NotInTree,
            };
        }

        if proof.verify(leaf, root) {
            Self {
                verified: true,
                status: VerificationStatus::Included,
            }
        } else {
            Self {
                verified: false,
                status: VerificationStatus::RootMismatch,
            }
        }
    }
}

impl fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            VerificationStatus::Included => {
                write!(f, "transaction is included under the committed merkle root")
            }
            VerificationStatus::NotInTree => {
                write!(f, "the provided transaction hash is not part of the merkle tree")
            }
            VerificationStatus::RootMismatch => {
                write!(f, "proof rejected: recomputed root does not match the committed root")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockproof_merkle::{prove, Keccak256Hasher};

    fn test_leaves(count: usize) -> Vec<B256> {
        (0..count)
            .map(|i| Keccak256Hasher::hash_leaf(format!("tx-{i}").as_bytes()))
            .collect()
    }

    #[test]
    fn included_leaf_is_verified() {
        let leaves = test_leaves(4);
        let (root, proof) = prove(&leaves, &leaves[2]).unwrap();

        let outcome = VerificationOutcome::evaluate(&leaves[2], &proof, &root);
        assert!(outcome.verified);
        assert_eq!(outcome.status, VerificationStatus::Included);
    }

    #[test]
    fn absent_leaf_is_not_in_tree_not_rejected() {
        let leaves = test_leaves(4);
        let stranger = Keccak256Hasher::hash_leaf(b"not-in-block");
        let (root, proof) = prove(&leaves, &stranger).unwrap();
        assert!(proof.is_empty());

        let outcome = VerificationOutcome::evaluate(&stranger, &proof, &root);
        assert!(!outcome.verified);
        assert_eq!(outcome.status, VerificationStatus::NotInTree);
    }

    #[test]
    fn tampered_proof_is_a_root_mismatch() {
        let leaves = test_leaves(4);
        let (root, proof) = prove(&leaves, &leaves[0]).unwrap();

        let wrong_leaf = leaves[1];
        let outcome = VerificationOutcome::evaluate(&wrong_leaf, &proof, &root);
        assert!(!outcome.verified);
        assert_eq!(outcome.status, VerificationStatus::RootMismatch);
    }

    #[test]
    fn single_leaf_tree_verifies_with_an_empty_proof() {
        let leaves = test_leaves(1);
        let (root, proof) = prove(&leaves, &leaves[0]).unwrap();
        assert!(proof.is_empty());

        let outcome = VerificationOutcome::evaluate(&leaves[0], &proof, &root);
        assert!(outcome.verified);
        assert_eq!(outcome.status, VerificationStatus::Included);
    }
}
