use std::fs;
use std::path::Path;

use blockproof_merkle::{InclusionProof, B256};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// On-disk record of one fetched block: the ordered transaction hashes and
/// the merkle root committed over them.
///
/// The snapshot is what lets `prove` run in a later invocation than
/// `fetch-block`; the CLI itself keeps no state between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockSnapshot {
    pub block_number: u64,
    pub merkle_root: B256,
    pub transactions: Vec<B256>,
}

impl BlockSnapshot {
    pub fn load(path: &Path) -> CliResult<Self> {
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }

    pub fn save(&self, path: &Path) -> CliResult<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// A generated inclusion proof together with the context needed to check it:
/// the target hash, the committed root, and the block it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofFile {
    pub block_number: u64,
    pub tx_hash: B256,
    pub merkle_root: B256,
    pub proof: InclusionProof,
}

impl ProofFile {
    pub fn load(path: &Path) -> CliResult<Self> {
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }

    pub fn save(&self, path: &Path) -> CliResult<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Parse a 32-byte hex digest, with or without the 0x prefix.
pub fn parse_digest(input: &str) -> CliResult<B256> {
    input
        .parse::<B256>()
        .map_err(|e| CliError::InvalidDigest(format!("'{input}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockproof_merkle::{Keccak256Hasher, MerkleTree};

    fn test_snapshot() -> BlockSnapshot {
        let transactions: Vec<B256> = (0..5)
            .map(|i: u8| Keccak256Hasher::hash_leaf(&[i]))
            .collect();
        let merkle_root = MerkleTree::build(&transactions).unwrap().root();

        BlockSnapshot {
            block_number: 19_000_000,
            merkle_root,
            transactions,
        }
    }

    #[test]
    fn snapshot_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("block.json");

        let snapshot = test_snapshot();
        snapshot.save(&path).unwrap();
        let loaded = BlockSnapshot::load(&path).unwrap();

        assert_eq!(loaded.block_number, snapshot.block_number);
        assert_eq!(loaded.merkle_root, snapshot.merkle_root);
        assert_eq!(loaded.transactions, snapshot.transactions);
    }

    #[test]
    fn proof_file_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proof.json");

        let snapshot = test_snapshot();
        let tree = MerkleTree::build(&snapshot.transactions).unwrap();
        let proof_file = ProofFile {
            block_number: snapshot.block_number,
            tx_hash: snapshot.transactions[2],
            merkle_root: tree.root(),
            proof: tree.proof_for_index(2).unwrap(),
        };

        proof_file.save(&path).unwrap();
        let loaded = ProofFile::load(&path).unwrap();

        assert_eq!(loaded.proof, proof_file.proof);
        assert!(loaded.proof.verify(&loaded.tx_hash, &loaded.merkle_root));
    }

    #[test]
    fn corrupt_proof_file_is_a_typed_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proof.json");
        fs::write(&path, "{ \"block_number\": 1, \"tx_hash\": ").unwrap();

        assert!(matches!(ProofFile::load(&path), Err(CliError::Json(_))));
    }

    #[test]
    fn snapshot_with_wrong_width_digest_is_a_typed_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("block.json");
        fs::write(
            &path,
            r#"{ "block_number": 1, "merkle_root": "0xdead", "transactions": [] }"#,
        )
        .unwrap();

        assert!(matches!(BlockSnapshot::load(&path), Err(CliError::Json(_))));
    }

    #[test]
    fn missing_snapshot_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.json");

        assert!(matches!(BlockSnapshot::load(&path), Err(CliError::Io(_))));
    }

    #[test]
    fn parse_digest_accepts_both_prefixed_and_bare_hex() {
        let bare = "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470";
        let prefixed = format!("0x{bare}");

        assert_eq!(
            parse_digest(bare).unwrap(),
            parse_digest(&prefixed).unwrap()
        );
    }

    #[test]
    fn parse_digest_rejects_wrong_width_input() {
        assert!(matches!(
            parse_digest("0xdeadbeef"),
            Err(CliError::InvalidDigest(_))
        ));
    }
}
