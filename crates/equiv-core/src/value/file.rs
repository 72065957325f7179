//! Filesystem path handles.

use std::any::Any;
use std::path::{Component, Path, PathBuf};

use crate::object::Object;
use crate::types::{well_known, TypeRef};

/// A handle naming a file, existing or not.
///
/// Native equality compares the raw spelling, so `a/../b.txt` and `b.txt`
/// differ. [`canonical_form`](Self::canonical_form) gives the spelling-free
/// identity used by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    path: PathBuf,
}

impl FileHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the absolute path with `.` and `..` folded away.
    ///
    /// Purely lexical: symlinks are not followed and the file need not exist.
    /// Relative paths are resolved against the current working directory.
    pub fn canonical_form(&self) -> String {
        let absolute = std::path::absolute(&self.path).unwrap_or_else(|_| self.path.clone());
        normalize(&absolute).to_string_lossy().into_owned()
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped =
                    matches!(out.components().next_back(), Some(Component::Normal(_))) && out.pop();
                // `..` above the root stays at the root
                if !popped && !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

impl Object for FileHandle {
    fn runtime_type(&self) -> &TypeRef {
        well_known::path()
    }

    fn native_equals(&self, other: &dyn Object) -> bool {
        other.downcast_ref::<FileHandle>().is_some_and(|o| o.path == self.path)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
