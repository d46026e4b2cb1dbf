use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use error::CliResult;

#[derive(Parser)]
#[command(name = "blockproof")]
#[command(about = "Blockproof CLI - Merkle inclusion proofs over Ethereum block transactions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a block's transaction hashes and commit to them with a merkle root
    FetchBlock {
        /// Block number to fetch
        #[arg(short, long)]
        block: u64,

        /// Ethereum JSON-RPC URL
        #[arg(short, long, default_value = "https://ethereum-rpc.publicnode.com")]
        rpc_url: String,

        /// Output file for the block snapshot
        #[arg(short, long, default_value = "block.json")]
        output: PathBuf,
    },

    /// Generate an inclusion proof for one transaction hash in a snapshot
    Prove {
        /// Block snapshot produced by fetch-block
        #[arg(short, long, default_value = "block.json")]
        snapshot: PathBuf,

        /// Target transaction hash (0x-prefixed, 32 bytes)
        #[arg(short, long)]
        tx_hash: String,

        /// Output file for the proof
        #[arg(short, long, default_value = "proof.json")]
        output: PathBuf,
    },

    /// Verify an inclusion proof against a committed merkle root
    Verify {
        /// Proof file produced by prove
        #[arg(short, long, default_value = "proof.json")]
        proof: PathBuf,

        /// Transaction hash to check (defaults to the hash recorded in the proof file)
        #[arg(short, long)]
        tx_hash: Option<String>,

        /// Committed merkle root (defaults to the root recorded in the proof file)
        #[arg(short, long)]
        root: Option<String>,
    },
}

#[tokio::main]
async fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::FetchBlock {
            block,
            rpc_url,
            output,
        } => commands::fetch_block::execute(block, rpc_url, output).await,

        Commands::Prove {
            snapshot,
            tx_hash,
            output,
        } => commands::prove::execute(snapshot, tx_hash, output),

        Commands::Verify {
            proof,
            tx_hash,
            root,
        } => commands::verify::execute(proof, tx_hash, root),
    }
}
