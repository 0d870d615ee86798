use std::fs;
use std::io::{self, ErrorKind, Write};

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

/// What occupies a folder path before anything is created.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FolderState {
    Present,
    Missing,
    /// A non-directory sits at the path or at one of its ancestors.
    Blocked,
}

impl FolderState {
    pub fn label(&self) -> &'static str {
        match self {
            FolderState::Present => "✓ present",
            FolderState::Missing => "❌ missing",
            FolderState::Blocked => "⚠️  blocked",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FolderPlan<'a> {
    pub path: &'a str,
    pub state: FolderState,
}

impl FolderPlan<'_> {
    /// True only when `init` would actually create the folder.
    pub fn would_create(&self) -> bool {
        self.state == FolderState::Missing
    }
}

/// Ensure every folder exists relative to the current directory, reporting on stdout.
pub fn ensure_folders(paths: &[&str]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    ensure_folders_in(Utf8Path::new("."), paths, &mut out)
}

/// Create each folder under `root` in list order, parents included.
///
/// Folders that already exist are left alone. The first failure stops the
/// pass; folders created before it stay on disk.
pub fn ensure_folders_in<W: Write>(root: &Utf8Path, paths: &[&str], out: &mut W) -> Result<()> {
    for path in paths {
        let target = resolve(root, path);
        fs::create_dir_all(&target).with_context(|| format!("creating directory {}", path))?;
        debug!(path = %target, "folder ensured");

        writeln!(out, "✅ Created: {}", path).context("writing progress line")?;
        out.flush().context("flushing progress output")?;
    }
    Ok(())
}

/// Inspect each folder under `root` without touching the filesystem.
pub fn plan_folders<'a>(root: &Utf8Path, paths: &[&'a str]) -> Vec<FolderPlan<'a>> {
    paths
        .iter()
        .map(|&path| FolderPlan {
            path,
            state: inspect_folder(root, path),
        })
        .collect()
}

/// Classify `path` the way `create_dir_all` would see it.
///
/// A dangling symlink, at the path or at an ancestor, counts as blocked.
pub fn inspect_folder(root: &Utf8Path, path: &str) -> FolderState {
    let target = resolve(root, path);
    match fs::symlink_metadata(&target) {
        Ok(_) => match fs::metadata(&target) {
            Ok(meta) if meta.is_dir() => FolderState::Present,
            Ok(_) => FolderState::Blocked,
            Err(err) => {
                debug!(path = %target, error = %err, "entry does not resolve to a folder");
                FolderState::Blocked
            }
        },
        Err(err) if err.kind() == ErrorKind::NotFound => {
            let parent = Utf8Path::new(path).parent().filter(|p| !p.as_str().is_empty());
            match parent.map(|p| inspect_folder(root, p.as_str())) {
                Some(FolderState::Blocked) => FolderState::Blocked,
                _ => FolderState::Missing,
            }
        }
        Err(err) => {
            debug!(path = %target, error = %err, "folder not reachable");
            FolderState::Blocked
        }
    }
}

fn resolve(root: &Utf8Path, path: &str) -> Utf8PathBuf {
    root.join(path)
}
