//! Size limit constants for input validation

/// Default maximum length for a token string accepted by the parser (64KB)
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Maximum number of idle hashers a single pool keeps for reuse
///
/// Hashers returned beyond this bound are dropped, so a burst of concurrent
/// signing does not pin memory forever.
pub(crate) const MAX_IDLE_HASHERS: usize = 64;

/// Initial capacity of the buffer used to assemble an encoded token
pub(crate) const ENCODE_BUFFER_CAPACITY: usize = 512;
