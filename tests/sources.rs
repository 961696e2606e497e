use std::io::{self, Write};
use std::thread;

use anyhow::Result;
use checksum_core::{
    hash, hash_file, hash_reader, verify_file, verify_reader, AlgorithmId, HashError, Hasher,
    Verification, CHUNK_SIZE,
};
use tempfile::NamedTempFile;
use test_log::test;

fn temp_file_with(contents: &[u8]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents)?;
    file.flush()?;
    Ok(file)
}

#[test]
fn file_spanning_several_chunks() -> Result<()> {
    // straddles the read size so the last read is partial
    let contents: Vec<u8> = (0..3 * CHUNK_SIZE + 17).map(|i| (i % 251) as u8).collect();
    let file = temp_file_with(&contents)?;

    for algorithm in AlgorithmId::ALL {
        let from_file = hash_file(algorithm, file.path(), None)?;
        assert_eq!(from_file, hash(algorithm, &contents), "{algorithm}");
    }
    Ok(())
}

#[test]
fn empty_file() -> Result<()> {
    let file = temp_file_with(b"")?;
    assert_eq!(
        hash_file(AlgorithmId::Md5, file.path(), None)?.to_hex(),
        "d41d8cd98f00b204e9800998ecf8427e"
    );
    Ok(())
}

#[test]
fn shake_file_with_length() -> Result<()> {
    let file = temp_file_with(b"abc")?;
    let digest = hash_file(AlgorithmId::Shake128, file.path(), Some(16))?;
    assert_eq!(digest.to_hex(), "5881092dd818bf5cf8a3ddb793fbcba7");
    let default = hash_file(AlgorithmId::Shake128, file.path(), None)?;
    assert_eq!(default.len(), 32);
    Ok(())
}

#[test]
fn missing_file_is_source_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gone.tar.gz");
    let err = hash_file(AlgorithmId::Sha256, &path, None).unwrap_err();
    assert!(matches!(err, HashError::SourceUnavailable { .. }), "{err:?}");
    assert!(err.to_string().contains("gone.tar.gz"));
}

#[test]
fn io_copy_drives_a_hasher() -> Result<()> {
    let mut hasher = Hasher::new(AlgorithmId::Sha512_256);
    let copied = io::copy(&mut &b"abc"[..], &mut hasher)?;
    assert_eq!(copied, 3);
    assert_eq!(hasher.bytes_processed(), 3);
    assert_eq!(
        hasher.finalize()?.to_hex(),
        "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23"
    );
    Ok(())
}

#[test]
fn verify_file_reports_match_and_mismatch() -> Result<()> {
    let file = temp_file_with(b"abc")?;

    let passed = verify_file(
        AlgorithmId::Sha1,
        file.path(),
        "A9993E364706816ABA3E25717850C26C9CD0D89D",
    )?;
    assert!(passed.is_match());

    let failed = verify_file(
        AlgorithmId::Sha1,
        file.path(),
        "0000000000000000000000000000000000000000",
    )?;
    assert_eq!(
        failed,
        Verification::Mismatch {
            expected: "0000000000000000000000000000000000000000".to_string(),
            actual: "a9993e364706816aba3e25717850c26c9cd0d89d".to_string(),
        }
    );
    Ok(())
}

#[test]
fn verify_rejects_non_hex_before_reading() {
    let err = verify_reader(AlgorithmId::Md5, &b"abc"[..], "zz", "memory").unwrap_err();
    assert!(matches!(err, HashError::InvalidChecksum(_)));
}

#[test]
fn blank_shake_checksum_never_matches() -> Result<()> {
    let file = temp_file_with(b"totally different payload")?;
    for algorithm in [AlgorithmId::Shake128, AlgorithmId::Shake256] {
        for expected in ["", "   ", "\r\n"] {
            let err = verify_file(algorithm, file.path(), expected).unwrap_err();
            assert!(matches!(err, HashError::InvalidChecksum(_)), "{algorithm}: {err:?}");
        }
    }
    Ok(())
}

#[test]
fn reader_rejects_oversized_shake_request() {
    let err = hash_reader(
        AlgorithmId::Shake256,
        &b""[..],
        Some(checksum_core::MAX_SHAKE_OUTPUT + 1),
        "memory",
    )
    .unwrap_err();
    assert!(matches!(err, HashError::InvalidOutputLength { .. }));
}

#[test]
fn independent_hashers_on_separate_threads() -> Result<()> {
    let files = (0..8u8)
        .map(|i| temp_file_with(&vec![i; 10_000 + i as usize]))
        .collect::<Result<Vec<_>>>()?;

    let concurrent: Vec<String> = thread::scope(|s| {
        let handles: Vec<_> = files
            .iter()
            .map(|file| s.spawn(move || hash_file(AlgorithmId::Sha3_256, file.path(), None)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap().to_hex())
            .collect()
    });

    for (i, digest) in concurrent.iter().enumerate() {
        let expected = hash(AlgorithmId::Sha3_256, &vec![i as u8; 10_000 + i]);
        assert_eq!(*digest, expected.to_hex());
    }
    Ok(())
}
