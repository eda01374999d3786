//! Pinned two-letter location codes.
//!
//! The legacy digest carries an operational override: a fixed set of 2-byte
//! location codes that must resolve to pre-assigned buckets instead of being
//! hashed. The assignment is an opaque, hand-maintained table inherited from
//! the deployment it must stay compatible with; codes are matched by exact
//! byte equality (case-sensitive, length exactly 2) and nothing about their
//! meaning is inferred here.
//!
//! [`PinTable`] is the immutable lookup over that data. The built-in table
//! ([`PinTable::builtin`]) is constructed once per process and shared;
//! custom tables can be built from `(code, bucket)` entries with
//! [`PinTable::from_entries`].

use crate::error::{OxiHashError, Result};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::OnceLock;

/// Built-in pinned codes, grouped by bucket.
///
/// Several codes can share a bucket; each code appears exactly once. Kept in
/// the upstream grouping so additions land in the right group and the table
/// stays auditable against the deployment's assignment.
const PIN_GROUPS: &[(u32, &[&[u8; 2]])] = &[
    (
        0,
        &[
            b"us", b"bo", b"sk", b"sn", b"tw", b"mg", b"ye", b"xk", b"ne", b"tt", b"lr",
        ],
    ),
    (
        1,
        &[
            b"fr", b"cz", b"dz", b"gt", b"ph", b"cm", b"cu", b"kw", b"lb", b"jm", b"mq", b"bi",
            b"me",
        ],
    ),
    (2, &[b"br"]),
    (3, &[b"tr"]),
    (
        4,
        &[
            b"ro", b"be", b"za", b"ng", b"pk", b"ke", b"jo", b"bd", b"kz", b"is", b"gn", b"mw",
            b"mt",
        ],
    ),
    (
        5,
        &[
            b"cl", b"gb", b"nl", b"no", b"iq", b"gr", b"hk", b"bf", b"tg", b"et", b"rw", b"mu",
            b"kg",
        ],
    ),
    (6, &[b"in"]),
    (
        7,
        &[
            b"cn", b"bg", b"ru", b"jp", b"pr", b"ae", b"qa", b"sd", b"gp", b"pg", b"sr",
        ],
    ),
    (8, &[b"it"]),
    (
        9,
        &[
            b"id", b"pl", b"ma", b"th", b"at", b"ao", b"sy", b"ht", b"ly", b"ga", b"ge", b"bw",
            b"mn",
        ],
    ),
    (
        10,
        &[
            b"ve", b"sa", b"eg", b"ch", b"au", b"sv", b"sg", b"lk", b"zw", b"cy", b"gm", b"mr",
            b"la",
        ],
    ),
    (
        11,
        &[
            b"pe", b"de", b"do", b"si", b"fi", b"ni", b"al", b"cd", b"tz", b"zm", b"kh", b"re",
            b"td",
        ],
    ),
    (
        12,
        &[
            b"ar", b"uy", b"ua", b"hr", b"ee", b"bj", b"mm", b"lu", b"np", b"dj",
        ],
    ),
    (13, &[b"mx"]),
    (
        14,
        &[
            b"vn", b"ec", b"se", b"dk", b"rs", b"hn", b"lv", b"ps", b"ml", b"md", b"cv", b"nc",
            b"uz", b"an",
        ],
    ),
    (
        15,
        &[
            b"es", b"ca", b"tn", b"py", b"pa", b"mz", b"mk", b"nz", b"af", b"cg", b"fj", b"pf",
        ],
    ),
    (
        16,
        &[
            b"co", b"lt", b"il", b"ir", b"gh", b"ie", b"by", b"na", b"gf", b"am", b"gq",
        ],
    ),
    (
        17,
        &[
            b"pt", b"hu", b"my", b"cr", b"ci", b"kr", b"ba", b"om", b"ug", b"az", b"bh", b"mo",
            b"sl",
        ],
    ),
];

/// A single pinned code and its bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinEntry {
    /// The 2-byte code, matched by exact byte equality.
    pub code: [u8; 2],
    /// The bucket the code is pinned to.
    pub bucket: u32,
}

/// Immutable mapping from 2-byte codes to pinned buckets.
///
/// # Example
///
/// ```
/// use oxihash::pins::PinTable;
///
/// let pins = PinTable::builtin();
/// assert_eq!(pins.lookup(b"us"), Some(0));
/// assert_eq!(pins.lookup(b"zz"), None);
/// assert_eq!(pins.lookup(b"usa"), None); // only exact 2-byte keys match
/// ```
#[derive(Debug, Clone, Default)]
pub struct PinTable {
    map: HashMap<[u8; 2], u32>,
}

impl PinTable {
    /// The built-in pin table, constructed on first use and shared for the
    /// process lifetime.
    pub fn builtin() -> &'static PinTable {
        static BUILTIN: OnceLock<PinTable> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let mut map = HashMap::new();
            for &(bucket, codes) in PIN_GROUPS {
                for &code in codes {
                    map.insert(*code, bucket);
                }
            }
            PinTable { map }
        })
    }

    /// Build a table from `(code, bucket)` entries.
    ///
    /// Codes must be exactly 2 bytes. Repeating a code with the same bucket
    /// is accepted; repeating it with a different bucket is an error.
    ///
    /// # Example
    ///
    /// ```
    /// use oxihash::pins::PinTable;
    ///
    /// let pins = PinTable::from_entries([("zz", 42u32), ("yy", 7)]).unwrap();
    /// assert_eq!(pins.lookup(b"zz"), Some(42));
    ///
    /// assert!(PinTable::from_entries([("usa", 0u32)]).is_err());
    /// assert!(PinTable::from_entries([("zz", 1u32), ("zz", 2)]).is_err());
    /// ```
    pub fn from_entries<I, C>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (C, u32)>,
        C: AsRef<[u8]>,
    {
        let mut map = HashMap::new();
        for (code, bucket) in entries {
            let code = code.as_ref();
            let code: [u8; 2] = code
                .try_into()
                .map_err(|_| OxiHashError::invalid_code(code))?;
            match map.entry(code) {
                Entry::Occupied(slot) => {
                    let existing = *slot.get();
                    if existing != bucket {
                        return Err(OxiHashError::conflicting_code(&code, existing, bucket));
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(bucket);
                }
            }
        }
        Ok(Self { map })
    }

    /// Bucket pinned for `key`, or `None` if `key` is not a pinned 2-byte
    /// code. Keys of any other length never match.
    #[inline]
    pub fn lookup(&self, key: &[u8]) -> Option<u32> {
        let code: &[u8; 2] = key.try_into().ok()?;
        self.map.get(code).copied()
    }

    /// Iterate over all entries, for audit or export. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = PinEntry> + '_ {
        self.map.iter().map(|(&code, &bucket)| PinEntry { code, bucket })
    }

    /// Number of pinned codes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
