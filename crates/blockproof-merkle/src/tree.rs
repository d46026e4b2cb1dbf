use alloy_primitives::B256;

use crate::errors::{MerkleError, MerkleResult};
use crate::hasher::Keccak256Hasher;
use crate::proof::{InclusionProof, Orientation, ProofStep};

/// A binary keccak-256 merkle tree over an ordered list of leaf digests.
///
/// The tree retains every layer so that a root and any number of inclusion
/// proofs can be extracted from one construction pass. It is immutable after
/// [`MerkleTree::build`]; a new leaf set requires a new tree.
///
/// Odd-sized layers follow the carry-forward rule: the unpaired last element
/// is promoted into the next layer unchanged. Promotion produces no proof
/// step, so proofs for leaves on a promoted path can be shorter than
/// `ceil(log2(leaf_count))`.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    /// All layers, leaves first. The last layer holds exactly the root.
    layers: Vec<Vec<B256>>,
    root: B256,
}

impl MerkleTree {
    /// Build the full tree from an ordered, non-empty leaf list.
    ///
    /// Construction is a pure function of the leaf order and the pairing
    /// rules in [`Keccak256Hasher`]; identical input always commits to the
    /// identical root.
    pub fn build(leaves: &[B256]) -> MerkleResult<Self> {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyLeaves);
        }

        let mut layers = Vec::new();
        let mut current = leaves.to_vec();

        while current.len() > 1 {
            let mut next = Vec::with_capacity(current.len().div_ceil(2));

            let mut i = 0;
            while i < current.len() {
                if i + 1 < current.len() {
                    next.push(Keccak256Hasher::hash_pair(&current[i], &current[i + 1]));
                } else {
                    // Odd layer: promote the unpaired last element unchanged.
                    next.push(current[i]);
                }
                i += 2;
            }

            layers.push(current);
            current = next;
        }

        let root = current[0];
        layers.push(current);

        Ok(Self { layers, root })
    }

    pub fn root(&self) -> B256 {
        self.root
    }

    pub fn leaf_count(&self) -> usize {
        self.layers[0].len()
    }

    /// Number of pairing levels between the leaf layer and the root.
    pub fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    /// Index of the first leaf equal to `target`, if any.
    ///
    /// Duplicate leaves are permitted; proofs always locate the first
    /// occurrence, which is as valid a witness as any later one.
    pub fn leaf_index(&self, target: &B256) -> Option<usize> {
        self.layers[0].iter().position(|leaf| leaf == target)
    }

    /// Extract the inclusion proof for the leaf at `leaf_index`.
    ///
    /// Walks each layer below the root, recording the sibling of the current
    /// node: the element to the right when the index is even, to the left
    /// when it is odd. An unpaired last node records nothing for that layer,
    /// matching the carry-forward rule used at construction.
    pub fn proof_for_index(&self, leaf_index: usize) -> MerkleResult<InclusionProof> {
        let leaf_count = self.leaf_count();
        if leaf_index >= leaf_count {
            return Err(MerkleError::IndexOutOfRange {
                index: leaf_index,
                leaf_count,
            });
        }

        let mut steps = Vec::new();
        let mut index = leaf_index;

        for layer in &self.layers[..self.layers.len() - 1] {
            if index % 2 == 0 {
                if index + 1 < layer.len() {
                    steps.push(ProofStep {
                        sibling: layer[index + 1],
                        orientation: Orientation::Right,
                    });
                }
                // index + 1 == layer.len(): promoted node, no step here.
            } else {
                steps.push(ProofStep {
                    sibling: layer[index - 1],
                    orientation: Orientation::Left,
                });
            }
            index /= 2;
        }

        Ok(InclusionProof::new(steps))
    }

    /// Proof for the first occurrence of `target`, or `None` when the target
    /// is not a leaf of this tree.
    pub fn proof_for_leaf(&self, target: &B256) -> MerkleResult<Option<InclusionProof>> {
        match self.leaf_index(target) {
            Some(index) => Ok(Some(self.proof_for_index(index)?)),
            None => Ok(None),
        }
    }
}

/// Build the tree over `leaves` and extract the proof for `target` in one
/// call.
///
/// A target that is not among the leaves is a normal outcome, not an error:
/// the committed root is still returned, together with an empty proof that
/// makes no inclusion claim.
pub fn prove(leaves: &[B256], target: &B256) -> MerkleResult<(B256, InclusionProof)> {
    let tree = MerkleTree::build(leaves)?;
    let proof = tree.proof_for_leaf(target)?.unwrap_or_default();
    Ok((tree.root(), proof))
}
