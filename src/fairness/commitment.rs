use super::*;
use crate::*;
use hmac::Hmac;
use hmac::Mac;
use sha3::Sha3_256;

type HmacSha3 = Hmac<Sha3_256>;

/// HMAC-SHA3-256 tag binding a move name to a round's SecretKey.
/// Published before the player moves; checked after the key is revealed.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Commitment([u8; TAG_BYTES]);

impl Commitment {
    /// Deterministic in (message, key): the same pair always seals to the same tag.
    pub fn seal(message: &str, key: &SecretKey) -> Self {
        let mut mac = Self::mac(key);
        mac.update(message.as_bytes());
        Self(mac.finalize().into_bytes().into())
    }

    /// Recomputes the tag from a revealed pair and compares in constant time.
    pub fn verify(&self, message: &str, key: &SecretKey) -> bool {
        let mut mac = Self::mac(key);
        mac.update(message.as_bytes());
        mac.verify_slice(&self.0).is_ok()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Keyed by the hex text of the key, which is what players paste into
    /// external HMAC calculators.
    fn mac(key: &SecretKey) -> HmacSha3 {
        HmacSha3::new_from_slice(key.hex().as_bytes()).expect("hmac accepts keys of any length")
    }
}

impl std::str::FromStr for Commitment {
    type Err = hex::FromHexError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; TAG_BYTES];
        hex::decode_to_slice(s.trim(), &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl std::fmt::Display for Commitment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
