/*!
# Blockproof Client

Host-side collaborators for the blockproof merkle core.

## Purpose

The merkle core consumes ordered digest sequences and produces roots, proofs,
and booleans; it performs no I/O. This crate supplies the two things a host
needs around it:

- **`BlockClient`**: one bounded Ethereum JSON-RPC call that turns a block
  number into the block's ordered list of transaction hashes, ready to use as
  merkle leaves.
- **`VerificationOutcome`**: a tagged result for presenting verification to
  users. "The target is not part of the tree, so there is no proof to check"
  and "a proof was checked and rejected" are different facts and must never be
  conflated.

The client is an explicit handle constructed from an RPC URL and passed by
reference into the functions that need it; there is no global provider state.

## Usage

```rust,no_run
use blockproof_client::{BlockClient, ClientResult};
use blockproof_merkle::MerkleTree;

async fn example() -> ClientResult<()> {
    let client = BlockClient::new("https://eth.example.org")?;
    let hashes = client.fetch_transaction_hashes(19_000_000).await?;

    let tree = MerkleTree::build(&hashes).expect("block has transactions");
    println!("root: {}", tree.root());
    Ok(())
}
```
*/

pub mod client;
pub mod errors;
pub mod types;

pub use client::BlockClient;
pub use errors::{ClientError, ClientResult};
pub use types::{VerificationOutcome, VerificationStatus};
