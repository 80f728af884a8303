use crate::error::Result;

/// Produces signatures over a signing input
///
/// Implementations are shared across threads through the [`Registry`](crate::Registry),
/// so signing must only need `&self`.
pub trait Signer: Send + Sync {
    /// Length in bytes of the signatures this signer produces
    ///
    /// Used to size the encode buffer; `0` means the token carries no
    /// signature segment.
    fn size(&self) -> usize;

    /// Sign the exact bytes of `payload`
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>>;
}

/// Checks signatures over a signing input
pub trait Verifier: Send + Sync {
    /// Verify `signature` over the exact bytes of `payload`
    ///
    /// Returns `Ok(false)` when the signature is well formed for the call but
    /// does not match. An `Err` means the check could not be performed at all.
    fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<bool>;
}
