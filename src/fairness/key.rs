use crate::*;
use rand::TryRngCore;
use rand::rngs::OsRng;

/// The operating system could not supply randomness. A round cannot be
/// dealt without a trustworthy key, so this is never recovered from.
#[derive(Debug, Clone)]
pub struct EntropyError(String);

impl std::fmt::Display for EntropyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "entropy source unavailable: {}", self.0)
    }
}

impl std::error::Error for EntropyError {}

/// 256-bit HMAC key, generated for exactly one round and then revealed.
/// Not Clone: a key leaves its round only by being revealed.
pub struct SecretKey([u8; KEY_BYTES]);

impl SecretKey {
    /// Draws from the operating system CSPRNG. There is no fallback source.
    pub fn generate() -> Result<Self, EntropyError> {
        let mut bytes = [0u8; KEY_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| EntropyError(e.to_string()))?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Lowercase hex, 64 characters. This text is the HMAC key material.
    pub fn hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::str::FromStr for SecretKey {
    type Err = hex::FromHexError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; KEY_BYTES];
        hex::decode_to_slice(s.trim(), &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl std::fmt::Display for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.hex())
    }
}

/// Redacted so that debug logging cannot leak a key before its reveal.
impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretKey(..)")
    }
}
