pub mod base64url;
pub mod hash_pool;

pub use base64url::{decode_bytes, encode_bytes};
pub use hash_pool::HashPool;
