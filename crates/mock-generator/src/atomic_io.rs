//! Atomic fixture writes.
//!
//! Each fixture is written to a hidden sibling file, flushed, and renamed over
//! the target, so a reader never observes a half-written fixture.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::Utf8Path;
use cap_std::fs::{Dir, OpenOptions};

use crate::error::WriteError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Writes `contents` to `file_name` inside `dir`, replacing any existing file.
///
/// `dir_path` is only used to report errors against a readable path.
///
/// # Errors
///
/// Returns [`WriteError`] when `file_name` is not a bare file name or when the
/// temporary file cannot be written or renamed.
pub(crate) fn write_atomic(
    dir: &Dir,
    dir_path: &Utf8Path,
    file_name: &str,
    contents: &str,
) -> Result<(), WriteError> {
    let target_path = dir_path.join(file_name);
    if file_name.is_empty() || file_name.contains(['/', '\\']) || file_name.starts_with('.') {
        return Err(WriteError {
            path: target_path,
            message: "fixture name must be a plain file name".to_owned(),
        });
    }

    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(".{file_name}.{}.{nanos}.{counter}.tmp", std::process::id());

    write_temp_file(dir, &dir_path.join(&tmp_name), &tmp_name, contents)?;
    if let Err(err) = replace_target(dir, &tmp_name, file_name) {
        drop(dir.remove_file(&tmp_name));
        return Err(WriteError {
            path: target_path,
            message: err.to_string(),
        });
    }
    sync_directory(dir);

    Ok(())
}

fn write_temp_file(
    dir: &Dir,
    tmp_path: &Utf8Path,
    tmp_name: &str,
    contents: &str,
) -> Result<(), WriteError> {
    let to_write_error = |err: io::Error| WriteError {
        path: tmp_path.to_path_buf(),
        message: err.to_string(),
    };

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options).map_err(to_write_error)?;

    let written = file
        .write_all(contents.as_bytes())
        .and_then(|()| file.sync_all());
    if let Err(err) = written {
        drop(file);
        drop(dir.remove_file(tmp_name));
        return Err(to_write_error(err));
    }
    Ok(())
}

#[cfg(windows)]
fn replace_target(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Rename refuses to overwrite on Windows.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn replace_target(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

fn sync_directory(dir: &Dir) {
    // Best effort: some platforms cannot fsync a directory handle.
    if let Err(err) = dir.open(".").and_then(|handle| handle.sync_all()) {
        tracing::debug!(%err, "directory sync skipped");
    }
}

#[cfg(test)]
mod tests {
    use cap_std::ambient_authority;
    use rstest::{fixture, rstest};

    use super::*;

    struct Scratch {
        path: camino::Utf8PathBuf,
        dir: Dir,
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            drop(std::fs::remove_dir_all(&self.path));
        }
    }

    #[fixture]
    fn scratch() -> Scratch {
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = camino::Utf8PathBuf::from_path_buf(std::env::temp_dir())
            .expect("UTF-8 temp dir")
            .join(format!("atomic-io-{}-{counter}", std::process::id()));
        Dir::create_ambient_dir_all(&path, ambient_authority()).expect("create scratch dir");
        let dir = Dir::open_ambient_dir(&path, ambient_authority()).expect("open scratch dir");
        Scratch { path, dir }
    }

    #[rstest]
    fn writes_and_replaces_contents(scratch: Scratch) {
        write_atomic(&scratch.dir, &scratch.path, "a.json", "[1]\n").expect("first write");
        write_atomic(&scratch.dir, &scratch.path, "a.json", "[2]\n").expect("second write");

        let contents = scratch.dir.read_to_string("a.json").expect("read back");
        assert_eq!(contents, "[2]\n");
    }

    #[rstest]
    fn leaves_no_temporary_files(scratch: Scratch) {
        write_atomic(&scratch.dir, &scratch.path, "b.json", "{}\n").expect("write");

        let names: Vec<String> = scratch
            .dir
            .entries()
            .expect("list")
            .map(|entry| {
                entry
                    .expect("entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        assert_eq!(names, ["b.json"]);
    }

    #[rstest]
    #[case("")]
    #[case("nested/c.json")]
    #[case(".hidden")]
    fn rejects_names_that_are_not_plain_files(scratch: Scratch, #[case] name: &str) {
        let err = write_atomic(&scratch.dir, &scratch.path, name, "{}").expect_err("rejected");
        assert_eq!(err.message, "fixture name must be a plain file name");
    }
}
