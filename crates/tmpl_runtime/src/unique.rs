//! Deterministic unique identifiers.
//!
//! The digest is SHA-256 over a 16-byte namespace seed followed directly by
//! the UTF-8 bytes of every argument, in order and with no separator. The
//! identifier is the first seven digest bytes as lowercase hex.
//!
//! This approximates the deployment engine's own naming function; it is
//! stable and order-sensitive but not bit-identical to it.

use sha2::{Digest, Sha256};
use tmpl_value::Value;

use crate::errors::UniqueError;
use crate::probe::try_as_string;

/// Reserved URL namespace `6ba7b811-9dad-11d1-80b4-00c04fd430c8`, in the
/// mixed-endian byte layout (first three fields little-endian).
pub const URL_NAMESPACE: [u8; 16] = [
    0x11, 0xb8, 0xa7, 0x6b, 0xad, 0x9d, 0xd1, 0x11, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
];

/// Number of digest bytes rendered into a unique string.
const UNIQUE_BYTES: usize = 7;

/// Length of a unique string in hex characters.
pub const UNIQUE_STRING_LEN: usize = UNIQUE_BYTES * 2;

/// Namespace-seeded hasher configuration.
///
/// Holds only the seed; every call builds its own `Sha256` state, so a
/// single `UniqueHasher` can be shared freely across threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniqueHasher {
    namespace: [u8; 16],
}

impl Default for UniqueHasher {
    fn default() -> Self {
        UniqueHasher::with_namespace(URL_NAMESPACE)
    }
}

impl UniqueHasher {
    pub const fn with_namespace(namespace: [u8; 16]) -> Self {
        UniqueHasher { namespace }
    }

    pub fn namespace(&self) -> &[u8; 16] {
        &self.namespace
    }

    /// Stream the seed and each argument's text into a fresh SHA-256 state.
    ///
    /// Every argument must be a string (or text placeholder); integers are
    /// not converted. An empty argument list is accepted and hashes the
    /// namespace seed alone, where the deployment engine's own function
    /// rejects it.
    #[tracing::instrument(level = "trace", skip_all, fields(arguments = args.len()))]
    pub fn digest(&self, args: &[Value]) -> Result<[u8; 32], UniqueError> {
        let mut hasher = Sha256::new();
        hasher.update(self.namespace);
        for (index, arg) in args.iter().enumerate() {
            let Some(text) = try_as_string(arg) else {
                tracing::debug!(index, type_name = arg.type_name(), "argument has no text form");
                return Err(UniqueError::NotText {
                    index,
                    type_name: arg.type_name(),
                });
            };
            hasher.update(text.as_bytes());
        }
        Ok(hasher.finalize().into())
    }

    /// First seven digest bytes as fourteen lowercase hex characters.
    pub fn unique_string(&self, args: &[Value]) -> Result<String, UniqueError> {
        let digest = self.digest(args)?;
        Ok(hex::encode(&digest[..UNIQUE_BYTES]))
    }
}

/// Digest with the default URL namespace.
pub fn compute_digest(args: &[Value]) -> Result<[u8; 32], UniqueError> {
    UniqueHasher::default().digest(args)
}

/// Unique string with the default URL namespace.
pub fn unique_string(args: &[Value]) -> Result<String, UniqueError> {
    UniqueHasher::default().unique_string(args)
}
