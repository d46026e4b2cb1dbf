use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid RPC url '{url}': {source}")]
    InvalidRpcUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("RPC error: {0}")]
    Rpc(#[from] alloy::transports::TransportError),

    #[error("block {0} not found")]
    BlockNotFound(u64),

    #[error("block {0} contains no transactions")]
    EmptyBlock(u64),
}
