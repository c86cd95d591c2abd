use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Whole-file read and write access.
///
/// The cleanup loop only ever reads a file completely and writes it back
/// completely, so that is all a store has to offer.
pub trait FileStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// Store backed by the real filesystem. Writes are not atomic.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskStore;

impl FileStore for DiskStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAccess {
    Read(PathBuf),
    Write(PathBuf),
}

/// In-memory store used to drive the cleanup loop without touching disk.
///
/// Unknown paths fail with `NotFound`; paths marked read-only fail writes
/// with `PermissionDenied`. Every attempted access is logged in order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    read_only: RefCell<BTreeSet<PathBuf>>,
    log: RefCell<Vec<StoreAccess>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file<P: Into<PathBuf>, C: Into<Vec<u8>>>(self, path: P, contents: C) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn insert<P: Into<PathBuf>, C: Into<Vec<u8>>>(&self, path: P, contents: C) {
        self.files.borrow_mut().insert(path.into(), contents.into());
    }

    pub fn set_read_only<P: Into<PathBuf>>(&self, path: P) {
        self.read_only.borrow_mut().insert(path.into());
    }

    pub fn contents<P: AsRef<Path>>(&self, path: P) -> Option<Vec<u8>> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    pub fn text<P: AsRef<Path>>(&self, path: P) -> Option<String> {
        self.contents(path)
            .and_then(|bytes| String::from_utf8(bytes).ok())
    }

    pub fn accesses(&self) -> Vec<StoreAccess> {
        self.log.borrow().clone()
    }

    pub fn writes(&self) -> Vec<PathBuf> {
        self.log
            .borrow()
            .iter()
            .filter_map(|access| match access {
                StoreAccess::Write(path) => Some(path.clone()),
                StoreAccess::Read(_) => None,
            })
            .collect()
    }
}

impl FileStore for MemoryStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.log.borrow_mut().push(StoreAccess::Read(path.to_path_buf()));

        self.files.borrow().get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        self.log.borrow_mut().push(StoreAccess::Write(path.to_path_buf()));

        if self.read_only.borrow().contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("read-only file: {}", path.display()),
            ));
        }

        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}
