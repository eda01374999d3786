//! The hashing seam consumed by shard-selection layers.
//!
//! Which digest a deployment runs is decided by configuration outside this
//! crate; routing code programs against [`KeyHasher`] and receives whichever
//! implementation was configured.

use crate::crc;
use crate::pins::PinTable;
use crate::shard;

/// A deterministic key-to-digest function.
///
/// Implementations are pure: the same key always produces the same digest,
/// and concurrent calls need no coordination.
pub trait KeyHasher {
    /// Digest of `key`.
    fn hash_key(&self, key: &[u8]) -> u32;
}

/// Standard CRC-32 digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCrc32;

impl KeyHasher for StandardCrc32 {
    #[inline]
    fn hash_key(&self, key: &[u8]) -> u32 {
        crc::standard_crc32(key)
    }
}

/// Legacy client-compatible digest with pinned location codes.
///
/// Uses the built-in pin table unless one is supplied with
/// [`LegacyCrc32::with_pins`].
#[derive(Debug, Clone, Default)]
pub struct LegacyCrc32 {
    pins: Option<PinTable>,
}

impl LegacyCrc32 {
    /// Hasher over the built-in pin table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hasher over a custom pin table.
    pub fn with_pins(pins: PinTable) -> Self {
        Self { pins: Some(pins) }
    }

    fn pins(&self) -> &PinTable {
        match &self.pins {
            Some(pins) => pins,
            None => PinTable::builtin(),
        }
    }
}

impl KeyHasher for LegacyCrc32 {
    #[inline]
    fn hash_key(&self, key: &[u8]) -> u32 {
        shard::legacy_shard_hash_with(self.pins(), key)
    }
}
