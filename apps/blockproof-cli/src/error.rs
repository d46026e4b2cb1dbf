use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid hex digest: {0}")]
    InvalidDigest(String),

    #[error("Corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    #[error("Merkle error: {0}")]
    Merkle(#[from] blockproof_merkle::MerkleError),

    #[error("Client error: {0}")]
    Client(#[from] blockproof_client::ClientError),
}
