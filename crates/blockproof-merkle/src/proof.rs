use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use crate::errors::{MerkleError, MerkleResult};
use crate::hasher::Keccak256Hasher;

/// Position of a sibling digest relative to the running hash.
///
/// Orientation travels with every proof step so that a verifier can
/// reconstruct the exact concatenation order used at construction time
/// without knowing the leaf's original index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// The sibling is hashed to the left: `keccak256(sibling || current)`.
    Left,
    /// The sibling is hashed to the right: `keccak256(current || sibling)`.
    Right,
}

/// One level of an inclusion proof: the sibling digest and which side of the
/// running hash it sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    pub sibling: B256,
    pub orientation: Orientation,
}

/// An inclusion proof: sibling digests in leaf-to-root order.
///
/// An empty proof makes no inclusion claim. It verifies only for the
/// single-leaf tree, where the leaf is the root; against any other root it
/// fails. Hosts should present "no proof" and "proof rejected" as different
/// facts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionProof {
    steps: Vec<ProofStep>,
}

impl InclusionProof {
    pub fn new(steps: Vec<ProofStep>) -> Self {
        Self { steps }
    }

    /// Rebuild a proof from untyped `(sibling_bytes, orientation)` pairs, as
    /// decoded from a transport or file format.
    ///
    /// Each sibling must be exactly 32 bytes; anything else is rejected as
    /// [`MerkleError::MalformedProof`] before it can reach the pairing loop.
    pub fn from_parts<S>(parts: Vec<(S, Orientation)>) -> MerkleResult<Self>
    where
        S: AsRef<[u8]>,
    {
        let steps = parts
            .into_iter()
            .enumerate()
            .map(|(i, (sibling, orientation))| {
                let sibling = sibling.as_ref();
                if sibling.len() != 32 {
                    return Err(MerkleError::MalformedProof(format!(
                        "step {} has a {}-byte sibling, expected 32",
                        i,
                        sibling.len()
                    )));
                }
                Ok(ProofStep {
                    sibling: B256::from_slice(sibling),
                    orientation,
                })
            })
            .collect::<MerkleResult<Vec<_>>>()?;

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Recompute the root from `leaf` and compare it against `root`.
    ///
    /// This is the independent recomputation contract: folding the leaf with
    /// each sibling in order, on the recorded side, must land exactly on the
    /// committed root. The same loop can be mirrored verbatim by a remote
    /// verifier.
    pub fn verify(&self, leaf: &B256, root: &B256) -> bool {
        let mut current = *leaf;
        for step in &self.steps {
            current = match step.orientation {
                Orientation::Left => Keccak256Hasher::hash_pair(&step.sibling, &current),
                Orientation::Right => Keccak256Hasher::hash_pair(&current, &step.sibling),
            };
        }
        current == *root
    }
}

/// Free-function form of [`InclusionProof::verify`] for hosts that treat the
/// core as three calls: build, prove, verify.
pub fn verify(leaf: &B256, proof: &InclusionProof, root: &B256) -> bool {
    proof.verify(leaf, root)
}
