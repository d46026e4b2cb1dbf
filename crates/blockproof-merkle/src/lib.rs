/*!
# Blockproof Merkle

Binary keccak-256 merkle trees over ordered transaction-hash leaves, with
inclusion proofs that carry their own sibling orientation.

## Purpose

This crate is the computational core of blockproof. It takes an ordered list
of 32-byte digests (one per transaction hash), commits to them with a single
root digest, and produces or checks inclusion proofs for individual leaves.
It performs no I/O, keeps no state between calls, and never logs: fetching
blocks, persisting snapshots, and presenting results are host concerns.

## Pairing rules

- Adjacent leaves are paired left-to-right and hashed as
  `keccak256(left || right)`. Concatenation order is positional, never sorted,
  so leaf order is significant and two permutations of the same leaf set
  commit to different roots.
- **Odd layers use the carry-forward rule**: the unpaired last element of an
  odd-sized layer is promoted into the next layer unchanged. It is never
  hashed with a copy of itself, and it contributes no proof step at the layer
  it was promoted from.

Any independent verifier (for example an on-chain contract re-checking a
proof) must apply the same two rules; `InclusionProof::verify` is the
reference recomputation.

## Usage

```rust
use blockproof_merkle::{prove, Keccak256Hasher, MerkleTree};

fn example() -> blockproof_merkle::MerkleResult<()> {
    let leaves: Vec<_> = [b"tx-a", b"tx-b", b"tx-c"]
        .iter()
        .map(|tx| Keccak256Hasher::hash_leaf(*tx))
        .collect();

    let tree = MerkleTree::build(&leaves)?;
    let (root, proof) = prove(&leaves, &leaves[1])?;

    assert_eq!(root, tree.root());
    assert!(proof.verify(&leaves[1], &root));
    Ok(())
}
```
*/

pub mod errors;
pub mod hasher;
pub mod proof;
pub mod tree;

pub use errors::{MerkleError, MerkleResult};
pub use hasher::Keccak256Hasher;
pub use proof::{verify, InclusionProof, Orientation, ProofStep};
pub use tree::{prove, MerkleTree};

// Re-export the digest type so hosts don't need a direct alloy-primitives
// dependency just to name leaves and roots.
pub use alloy_primitives::B256;
