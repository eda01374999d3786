//! # OxiHash
//!
//! Deterministic key hashing for sharded cache proxies.
//!
//! A proxy in front of a sharded memcached-style fleet must place every key
//! on the same shard the client libraries would pick, without coordinating
//! with them. This crate provides the two digests that contract requires:
//!
//! - [`crc`]: standard CRC-32 (ISO 3309), as a one-shot function and an
//!   incremental calculator
//! - [`shard`]: the legacy client-compatible digest (CRC walk with
//!   complement/shift/mask finalization) plus the pinned-code override
//! - [`pins`]: the pinned two-letter location codes and custom pin tables
//! - [`traits`]: the [`KeyHasher`] seam routing layers program against
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │ Proxy routing layer (external)                        │
//! │     shard table, connection pool, modulo/continuum    │
//! ├───────────────────────────────────────────────────────┤
//! │ Digests (this crate)                                  │
//! │     standard_crc32, legacy_shard_hash, pin tables     │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! Both digests are pure functions over caller-owned bytes. The CRC table is
//! a compile-time constant and the built-in pin table is built once behind a
//! one-time barrier, so any number of threads may hash concurrently without
//! locking.
//!
//! ## Example
//!
//! ```rust
//! use oxihash::{legacy_shard_hash, standard_crc32};
//!
//! // Shard placement, identical to the legacy clients
//! let shards = 8u32;
//! let shard = legacy_shard_hash(b"user:12345") % shards;
//! assert_eq!(shard, 28942 % shards);
//!
//! // Pinned location codes bypass the hash and are used as-is
//! assert_eq!(legacy_shard_hash(b"br"), 2);
//!
//! // Conventional CRC-32 is available wherever a real checksum is needed
//! assert_eq!(standard_crc32(b"123456789"), 0xCBF43926);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod crc;
pub mod error;
pub mod pins;
pub mod shard;
pub mod traits;

// Re-exports for convenience
pub use crc::{Crc32, standard_crc32};
pub use error::{OxiHashError, Result};
pub use pins::{PinEntry, PinTable};
pub use shard::{legacy_shard_hash, legacy_shard_hash_with};
pub use traits::{KeyHasher, LegacyCrc32, StandardCrc32};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::crc::{Crc32, standard_crc32};
    pub use crate::error::{OxiHashError, Result};
    pub use crate::pins::{PinEntry, PinTable};
    pub use crate::shard::{legacy_shard_hash, legacy_shard_hash_with};
    pub use crate::traits::{KeyHasher, LegacyCrc32, StandardCrc32};
}
