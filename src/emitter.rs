use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::ChunkError;
use crate::index::INDEX_FILE_NAME;

/// Chunk ids are padded to at least this many digits
pub const MIN_ID_WIDTH: usize = 4;

/// Digit width for chunk ids, wide enough that ids sort lexicographically
pub fn id_width(total: usize) -> usize {
    total.to_string().len().max(MIN_ID_WIDTH)
}

/// Chunk id for the 1-based sequence number, e.g. `chunk_0001`
pub fn chunk_label(seq: usize, width: usize) -> String {
    format!("chunk_{seq:0width$}")
}

/// File name for the 1-based sequence number, e.g. `chunk_0001.txt`
pub fn chunk_file_name(seq: usize, width: usize) -> String {
    format!("chunk_{seq:0width$}.txt")
}

/// Hex-encoded SHA-256 digest of the chunk bytes
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

fn is_chunk_file(name: &str) -> bool {
    name.starts_with("chunk_") && name.ends_with(".txt")
}

/// Whether the destination already holds chunk files from a prior run
pub fn has_existing_chunks(dir: &Path) -> Result<bool, ChunkError> {
    if !dir.exists() {
        return Ok(false);
    }
    if !dir.is_dir() {
        return Err(ChunkError::NotADirectory(dir.to_path_buf()));
    }
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if is_chunk_file(&entry.file_name().to_string_lossy()) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Remove prior chunk files and the manifest from the destination
pub fn clear_destination(dir: &Path) -> Result<(), ChunkError> {
    if !dir.exists() {
        return Ok(());
    }
    if !dir.is_dir() {
        return Err(ChunkError::NotADirectory(dir.to_path_buf()));
    }
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == INDEX_FILE_NAME || is_chunk_file(&name) {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}

/// Make the destination ready for emission.
///
/// Without `force`, any pre-existing chunk file is a collision and nothing
/// is written; with `force`, prior chunk artifacts are removed first.
pub fn prepare_destination(dir: &Path, force: bool) -> Result<(), ChunkError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ChunkError::NotADirectory(dir.to_path_buf()));
    }
    if force {
        clear_destination(dir)?;
    } else if has_existing_chunks(dir)? {
        return Err(ChunkError::DestinationCollision(dir.to_path_buf()));
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Write one chunk's raw bytes; the handle is closed before returning
pub fn write_chunk(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<(), ChunkError> {
    fs::write(dir.join(file_name), bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_id_width_has_floor_of_four() {
        assert_eq!(id_width(1), 4);
        assert_eq!(id_width(9_999), 4);
        assert_eq!(id_width(10_000), 5);
        assert_eq!(id_width(123_456), 6);
    }

    #[test]
    fn test_chunk_naming() {
        assert_eq!(chunk_label(1, 4), "chunk_0001");
        assert_eq!(chunk_label(42, 5), "chunk_00042");
        assert_eq!(chunk_file_name(3, 4), "chunk_0003.txt");
    }

    #[test]
    fn test_sha256_known_digests() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            sha256_hex(b"hello world"),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_missing_destination_has_no_chunks() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("absent");
        assert!(!has_existing_chunks(&dir).unwrap());
    }

    #[test]
    fn test_collision_detected_without_force() {
        let tmp = TempDir::new().unwrap();
        prepare_destination(tmp.path(), false).unwrap();
        write_chunk(tmp.path(), "chunk_0001.txt", b"data").unwrap();

        let err = prepare_destination(tmp.path(), false).unwrap_err();
        assert!(matches!(err, ChunkError::DestinationCollision(_)));
    }

    #[test]
    fn test_force_clears_prior_artifacts() {
        let tmp = TempDir::new().unwrap();
        write_chunk(tmp.path(), "chunk_0001.txt", b"old").unwrap();
        write_chunk(tmp.path(), "chunk_0002.txt", b"old").unwrap();
        std::fs::write(tmp.path().join(INDEX_FILE_NAME), b"{}").unwrap();
        std::fs::write(tmp.path().join("notes.md"), b"keep me").unwrap();

        prepare_destination(tmp.path(), true).unwrap();

        assert!(!tmp.path().join("chunk_0001.txt").exists());
        assert!(!tmp.path().join("chunk_0002.txt").exists());
        assert!(!tmp.path().join(INDEX_FILE_NAME).exists());
        // Unrelated files are left alone.
        assert!(tmp.path().join("notes.md").exists());
    }

    #[test]
    fn test_destination_must_be_a_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("occupied");
        std::fs::write(&file, b"x").unwrap();

        let err = prepare_destination(&file, false).unwrap_err();
        assert!(matches!(err, ChunkError::NotADirectory(_)));
        let err = prepare_destination(&file, true).unwrap_err();
        assert!(matches!(err, ChunkError::NotADirectory(_)));
    }
}
