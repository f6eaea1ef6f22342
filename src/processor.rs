//! Batch-processor seam and the filesystem-backed implementation.
//!
//! The driver consumes batch processing through [`ArtifactProcessor`] and
//! treats it as opaque: one call, awaited to completion, no retries. The
//! shipped [`FsArtifactProcessor`] mirrors artifacts from the source tree
//! into the output tree, copying bytes without interpreting them.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::errors::ProcessError;

/// A batch-processing capability over a directory of artifacts.
///
/// Settles exactly once: `Ok(())` when the whole batch completed, or a
/// [`ProcessError`] describing what went wrong.
#[async_trait]
pub trait ArtifactProcessor: Send + Sync {
    async fn process_all(&self, source: &Path, dest: &Path) -> Result<(), ProcessError>;
}

/// Processes artifacts by mirroring them from `source` into `dest`.
///
/// Artifacts are opaque: every regular file under `source` is copied to the
/// same relative path under `dest`, directories are recreated, and entries
/// already at their target location (the in-place default, when the output
/// path equals the artifacts path) are left untouched. Entries are handled
/// sequentially; the first failure aborts the batch.
#[derive(Debug, Default)]
pub struct FsArtifactProcessor;

impl FsArtifactProcessor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ArtifactProcessor for FsArtifactProcessor {
    async fn process_all(&self, source: &Path, dest: &Path) -> Result<(), ProcessError> {
        let meta =
            fs::metadata(source)
                .await
                .map_err(|e| ProcessError::SourceUnavailable {
                    path: source.to_path_buf(),
                    source: e,
                })?;
        if !meta.is_dir() {
            return Err(ProcessError::NotADirectory(source.to_path_buf()));
        }

        fs::create_dir_all(dest)
            .await
            .map_err(|e| ProcessError::WriteArtifact {
                path: dest.to_path_buf(),
                source: e,
            })?;

        let mut copied = 0usize;
        for entry in WalkDir::new(source) {
            let entry = entry.map_err(|e| ProcessError::ReadArtifact {
                path: source.to_path_buf(),
                source: e,
            })?;

            // strip_prefix cannot fail for entries yielded under `source`
            let rel: &Path = match entry.path().strip_prefix(source) {
                Ok(rel) => rel,
                Err(_) => continue,
            };
            if rel.as_os_str().is_empty() {
                continue;
            }

            let target: PathBuf = dest.join(rel);
            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)
                    .await
                    .map_err(|e| ProcessError::WriteArtifact {
                        path: target.clone(),
                        source: e,
                    })?;
            } else {
                if entry.path() == target {
                    debug!(artifact = %target.display(), "already in place, skipping");
                    continue;
                }
                fs::copy(entry.path(), &target).await.map_err(|e| {
                    ProcessError::WriteArtifact {
                        path: target.clone(),
                        source: e,
                    }
                })?;
                copied += 1;
            }
        }

        info!(
            source = %source.display(),
            dest = %dest.display(),
            copied,
            "batch processing finished"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn mirrors_nested_artifacts_into_dest() {
        let td = tempdir().unwrap();
        let src = td.path().join("in");
        let dst = td.path().join("out");
        stdfs::create_dir_all(src.join("nested")).unwrap();
        stdfs::write(src.join("a.bin"), b"alpha").unwrap();
        stdfs::write(src.join("nested").join("b.bin"), b"beta").unwrap();

        FsArtifactProcessor::new()
            .process_all(&src, &dst)
            .await
            .unwrap();

        assert_eq!(stdfs::read(dst.join("a.bin")).unwrap(), b"alpha");
        assert_eq!(stdfs::read(dst.join("nested").join("b.bin")).unwrap(), b"beta");
    }

    #[tokio::test]
    async fn in_place_run_leaves_artifacts_untouched() {
        let td = tempdir().unwrap();
        let src = td.path().join("in");
        stdfs::create_dir_all(&src).unwrap();
        stdfs::write(src.join("a.bin"), b"alpha").unwrap();

        FsArtifactProcessor::new()
            .process_all(&src, &src)
            .await
            .unwrap();

        assert_eq!(stdfs::read(src.join("a.bin")).unwrap(), b"alpha");
    }

    #[tokio::test]
    async fn missing_source_is_reported() {
        let td = tempdir().unwrap();
        let src = td.path().join("nope");

        let err = FsArtifactProcessor::new()
            .process_all(&src, &src)
            .await
            .unwrap_err();
        assert!(matches!(err, ProcessError::SourceUnavailable { .. }));
    }

    #[tokio::test]
    async fn file_source_is_rejected() {
        let td = tempdir().unwrap();
        let src = td.path().join("file.bin");
        stdfs::write(&src, b"not a dir").unwrap();

        let err = FsArtifactProcessor::new()
            .process_all(&src, td.path())
            .await
            .unwrap_err();
        assert!(matches!(err, ProcessError::NotADirectory(_)));
    }
}
