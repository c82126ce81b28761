use crate::domain::AppError;
use crate::domain::keys::PemKeyPair;

/// Produces fresh asymmetric signing key material.
pub trait SigningKeySource {
    /// Generate a new key pair, returned as trimmed PEM text.
    fn generate_pair(&self) -> Result<PemKeyPair, AppError>;
}
