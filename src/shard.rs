//! Legacy client-compatible shard digest.
//!
//! Sharded deployments only stay cache-hot if the proxy and every client
//! library place a key on the same shard. The digest here reproduces, bit
//! for bit, the CRC-32 convention of the legacy memcached client libraries:
//! the standard table walk, then complement, shift right by 16 and mask to
//! 15 bits. It is *not* the standard CRC-32 of the key; use
//! [`standard_crc32`](crate::crc::standard_crc32) for that.
//!
//! Before hashing, exactly-2-byte keys are checked against the pinned
//! location codes ([`PinTable`]); a pinned key resolves directly to its
//! bucket and never reaches the hash. Unpinned 2-byte keys hash normally.

use crate::crc;
use crate::pins::PinTable;

/// Shard digest of `key`, with the built-in pinned codes applied.
///
/// Pinned 2-byte codes return their fixed bucket (small values, 0–17 in the
/// built-in table). Every other key, including unpinned 2-byte keys, empty
/// keys, and arbitrary binary, takes the hash path and lands in
/// `[0, 0x7FFF]`. Callers reduce the hash-path result themselves (modulo
/// shard count or a continuum lookup); pinned results are bucket indices and
/// are used as-is.
///
/// # Example
///
/// ```
/// use oxihash::shard::legacy_shard_hash;
///
/// assert_eq!(legacy_shard_hash(b"us"), 0); // pinned
/// assert_eq!(legacy_shard_hash(b"in"), 6); // pinned
/// assert_eq!(legacy_shard_hash(b"zz"), 9433); // unpinned, hashed
/// assert_eq!(legacy_shard_hash(b"user:12345"), 28942);
/// ```
#[inline]
pub fn legacy_shard_hash(key: &[u8]) -> u32 {
    legacy_shard_hash_with(PinTable::builtin(), key)
}

/// Shard digest of `key` against a caller-supplied pin table.
///
/// Same digest as [`legacy_shard_hash`]; only the override set differs. An
/// empty [`PinTable`] disables pinning entirely.
pub fn legacy_shard_hash_with(pins: &PinTable, key: &[u8]) -> u32 {
    if let Some(bucket) = pins.lookup(key) {
        return bucket;
    }

    let mut reg = u32::MAX;
    crc::accumulate(&mut reg, key);

    ((!reg) >> 16) & 0x7FFF
}
