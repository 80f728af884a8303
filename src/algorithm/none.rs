use crate::algorithm::{Signer, Verifier};
use crate::error::Result;

/// Unsecured tokens (`"alg": "none"`)
///
/// Signs to an empty signature and accepts every signature. Registering it
/// is an explicit decision to trust unsigned tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoneAlgorithm;

impl Signer for NoneAlgorithm {
    fn size(&self) -> usize {
        0
    }

    fn sign(&self, _payload: &[u8]) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }
}

impl Verifier for NoneAlgorithm {
    fn verify(&self, _payload: &[u8], _signature: &[u8]) -> Result<bool> {
        Ok(true)
    }
}
