//! End-to-end shard placement tests.
//!
//! These exercise the crate the way a proxy's routing layer does: digest a
//! key, reduce it to a shard, and expect agreement with the legacy client
//! convention and the pinned-code assignment.

use oxihash::{
    KeyHasher, LegacyCrc32, PinTable, StandardCrc32, legacy_shard_hash, legacy_shard_hash_with,
    standard_crc32,
};

#[test]
fn test_standard_crc32_reference_vectors() {
    // Published CRC-32 check values
    assert_eq!(standard_crc32(b""), 0x00000000);
    assert_eq!(standard_crc32(b"123456789"), 0xCBF43926);
    assert_eq!(standard_crc32(b"Hello, World!"), 0xEC4AC3D0);
}

#[test]
fn test_every_builtin_pin_routes_to_its_bucket() {
    let pins = PinTable::builtin();
    assert_eq!(pins.len(), 165);

    for entry in pins.iter() {
        assert_eq!(
            legacy_shard_hash(&entry.code),
            entry.bucket,
            "code {:?} must route to bucket {}",
            entry.code,
            entry.bucket
        );
        // Pinned buckets are small direct indices, not hash values
        assert!(entry.bucket <= 17);
    }
}

#[test]
fn test_spec_placement_scenarios() {
    assert_eq!(legacy_shard_hash(b"us"), 0);
    assert_eq!(legacy_shard_hash(b"fr"), 1);
    assert_eq!(legacy_shard_hash(b"br"), 2);
    assert_eq!(legacy_shard_hash(b"in"), 6);
}

#[test]
fn test_unpinned_two_byte_key_falls_through() {
    // "zz" is not a pinned code; it must take the hash path and agree with
    // the shifted standard digest
    assert_eq!(legacy_shard_hash(b"zz"), 9433);
    assert_eq!(
        legacy_shard_hash(b"zz"),
        (standard_crc32(b"zz") >> 16) & 0x7FFF
    );
}

#[test]
fn test_hash_path_agrees_with_reference_for_typical_keys() {
    let keys: &[&[u8]] = &[
        b"",
        b"a",
        b"user:12345",
        b"memcache:key:1",
        b"session/9f8e7d6c-5b4a-3928-1706-aabbccddeeff",
        &[0xFF, 0x00, 0xFE],
        &[0u8; 33],
    ];
    for key in keys {
        assert_eq!(
            legacy_shard_hash(key),
            (standard_crc32(key) >> 16) & 0x7FFF,
            "key {:?}",
            key
        );
        assert!(legacy_shard_hash(key) <= 0x7FFF);
    }
}

#[test]
fn test_modulo_reduction_is_stable() {
    // The caller-side reduction a proxy applies on the hash path
    let shards = 8;
    let shard = legacy_shard_hash(b"user:12345") % shards;
    assert_eq!(shard, 28942 % shards);

    for _ in 0..3 {
        assert_eq!(legacy_shard_hash(b"user:12345") % shards, shard);
    }
}

#[test]
fn test_custom_pin_table_end_to_end() {
    // An operator pins two extra codes and drops the rest
    let pins = PinTable::from_entries([("zz", 3u32), ("qq", 12)]).unwrap();

    assert_eq!(legacy_shard_hash_with(&pins, b"zz"), 3);
    assert_eq!(legacy_shard_hash_with(&pins, b"qq"), 12);
    // "us" is not pinned in this table, so it hashes
    assert_eq!(
        legacy_shard_hash_with(&pins, b"us"),
        (standard_crc32(b"us") >> 16) & 0x7FFF
    );
    // The built-in assignment is unaffected
    assert_eq!(legacy_shard_hash(b"us"), 0);
    assert_eq!(legacy_shard_hash(b"zz"), 9433);
}

#[test]
fn test_hasher_seam_selects_algorithm() {
    // A routing layer holding the configured hasher behind the trait
    let hashers: Vec<Box<dyn KeyHasher>> =
        vec![Box::new(StandardCrc32), Box::new(LegacyCrc32::new())];

    assert_eq!(hashers[0].hash_key(b"123456789"), 0xCBF43926);
    assert_eq!(hashers[1].hash_key(b"123456789"), 19444);
    assert_eq!(hashers[1].hash_key(b"us"), 0);
}

#[test]
fn test_concurrent_hashing() {
    // Both digests are pure and share only immutable tables; hammer them
    // from several threads and expect identical answers everywhere
    let keys: Vec<Vec<u8>> = (0..64u32)
        .map(|i| format!("user:{i}").into_bytes())
        .collect();
    let expected: Vec<(u32, u32)> = keys
        .iter()
        .map(|k| (standard_crc32(k), legacy_shard_hash(k)))
        .collect();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for (key, &(std_digest, shard_digest)) in keys.iter().zip(&expected) {
                    assert_eq!(standard_crc32(key), std_digest);
                    assert_eq!(legacy_shard_hash(key), shard_digest);
                }
            });
        }
    });

    // The pinned path too
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(legacy_shard_hash(b"br"), 2);
                assert_eq!(legacy_shard_hash(b"mx"), 13);
            });
        }
    });
}
