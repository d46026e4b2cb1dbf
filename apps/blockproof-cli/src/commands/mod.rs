pub mod fetch_block;
pub mod prove;
pub mod verify;
