use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{LottoError, Result};

pub const LOG_PREFIX: &str = "lotto_log_";
pub const ERROR_LOG: &str = "lotto_error.log";
const LOCK_FILE: &str = "lotto.lock";

/// Marker line prefix written exactly once per log file; its presence means
/// the file has already been reconciled against the published numbers.
pub const RESULT_SENTINEL: &str = "당첨 결과";

pub fn log_path(dir: &Path, round: u32) -> PathBuf {
    dir.join(format!("{LOG_PREFIX}{round}.txt"))
}

/// Round number encoded in a `lotto_log_<round>.txt` filename.
pub fn round_from_filename(name: &str) -> Result<u32> {
    name.strip_prefix(LOG_PREFIX)
        .and_then(|rest| rest.strip_suffix(".txt"))
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| LottoError::InvalidFormat(format!("올바르지 않은 파일명 형식({name})입니다.")))
}

/// Finds the purchase log with the highest round number.
///
/// Any file carrying the log prefix but not the `<round>.txt` suffix is an
/// error rather than being skipped, so a typo in the log directory surfaces
/// instead of silently shadowing a round.
pub fn latest_log_file(dir: &Path) -> Result<(PathBuf, u32)> {
    let mut latest: Option<(PathBuf, u32)> = None;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if !name.starts_with(LOG_PREFIX) {
            continue;
        }
        let round = round_from_filename(name)?;
        if latest.as_ref().is_none_or(|(_, best)| round > *best) {
            latest = Some((entry.path(), round));
        }
    }

    latest.ok_or_else(|| {
        LottoError::NotFound(format!(
            "로또 구매 내역({LOG_PREFIX}[회차번호].txt)을 찾을 수 없습니다."
        ))
    })
}

/// Appends to a log file, creating it on first write.
pub fn append(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// One `<timestamp> - <detail>` line in the shared error log.
pub fn append_error_line(dir: &Path, timestamp: &str, detail: &str) -> Result<()> {
    append(&dir.join(ERROR_LOG), &format!("{timestamp} - {detail}\n"))
}

/// Single-writer guard for a log directory.
///
/// Log files are opened read-modify-append without OS-level locking, so two
/// runs against the same directory would race. The lock file makes the
/// second run fail fast instead. A lock left behind by a killed process must
/// be removed by the operator.
pub struct RunLock {
    path: PathBuf,
}

impl RunLock {
    pub fn acquire(dir: &Path) -> Result<Self> {
        let path = dir.join(LOCK_FILE);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => Ok(Self { path }),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                Err(LottoError::AlreadyRunning(format!(
                    "{} exists; another run may be in progress",
                    path.display()
                )))
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::warn!("failed to remove lock file {}: {e}", self.path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_directory_has_no_log() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            latest_log_file(dir.path()),
            Err(LottoError::NotFound(_))
        ));
    }

    #[test]
    fn highest_round_wins() {
        let dir = TempDir::new().unwrap();
        for round in [3u32, 12, 9] {
            fs::write(log_path(dir.path(), round), "").unwrap();
        }
        let (path, round) = latest_log_file(dir.path()).unwrap();
        assert_eq!(round, 12);
        assert_eq!(path, log_path(dir.path(), 12));
    }

    #[test]
    fn unrelated_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(ERROR_LOG), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(log_path(dir.path(), 7), "").unwrap();
        assert_eq!(latest_log_file(dir.path()).unwrap().1, 7);
    }

    #[test]
    fn malformed_log_name_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("lotto_log_abc.txt"), "").unwrap();
        let err = latest_log_file(dir.path()).unwrap_err();
        assert!(matches!(err, LottoError::InvalidFormat(_)), "{err}");
    }

    #[test]
    fn round_suffix_must_be_digits_only() {
        assert_eq!(round_from_filename("lotto_log_1149.txt").unwrap(), 1149);
        assert!(round_from_filename("lotto_log_.txt").is_err());
        assert!(round_from_filename("lotto_log_12a.txt").is_err());
        assert!(round_from_filename("lotto_log_12.log").is_err());
    }

    #[test]
    fn append_creates_then_extends() {
        let dir = TempDir::new().unwrap();
        let path = log_path(dir.path(), 1);
        append(&path, "first\n").unwrap();
        append(&path, "second\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn error_log_line_shape() {
        let dir = TempDir::new().unwrap();
        append_error_line(dir.path(), "2024-12-07 09:00:00", "not-found: 파일 없음").unwrap();
        let content = fs::read_to_string(dir.path().join(ERROR_LOG)).unwrap();
        assert_eq!(content, "2024-12-07 09:00:00 - not-found: 파일 없음\n");
    }

    #[test]
    fn lock_is_exclusive_until_dropped() {
        let dir = TempDir::new().unwrap();
        let lock = RunLock::acquire(dir.path()).unwrap();
        assert!(matches!(
            RunLock::acquire(dir.path()),
            Err(LottoError::AlreadyRunning(_))
        ));
        drop(lock);
        RunLock::acquire(dir.path()).unwrap();
    }
}
