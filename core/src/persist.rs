use crate::IndexBundle;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaFile {
    pub num_docs: u32,
    pub num_terms: usize,
    pub total_postings: usize,
    /// Bytes per document id in the uncompressed size baseline.
    pub posting_width_bytes: u64,
    pub created_at: String,
    pub version: u32,
}

impl MetaFile {
    pub fn describe(bundle: &IndexBundle, created_at: String) -> Self {
        Self {
            num_docs: bundle.uncompressed.num_docs(),
            num_terms: bundle.uncompressed.len(),
            total_postings: bundle.uncompressed.total_postings(),
            posting_width_bytes: crate::evaluate::POSTING_WIDTH_BYTES,
            created_at,
            version: FORMAT_VERSION,
        }
    }
}

pub struct IndexPaths {
    pub root: PathBuf,
}

impl IndexPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    pub fn bundle(&self) -> PathBuf { self.root.join("index.bin") }
    pub fn meta(&self) -> PathBuf { self.root.join("meta.json") }
}

/// Write both representations into one container.
pub fn save_bundle(paths: &IndexPaths, bundle: &IndexBundle) -> Result<()> {
    create_dir_all(&paths.root)?;
    let path = paths.bundle();
    let mut f = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    let bytes = bincode::serialize(bundle)?;
    f.write_all(&bytes)?;
    Ok(())
}

/// Read a container back, rejecting a corrupt raw half or a compressed half that does not match it.
pub fn load_bundle(paths: &IndexPaths) -> Result<IndexBundle> {
    let path = paths.bundle();
    let mut f = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf)?;
    let bundle: IndexBundle = bincode::deserialize(&buf)
        .with_context(|| format!("decoding index container {}", path.display()))?;
    if !bundle.uncompressed.is_consistent() {
        bail!("index container {} holds a corrupt raw index", path.display());
    }
    if !bundle.compressed.is_derived_from(&bundle.uncompressed) {
        bail!("index container {} holds mismatched representations", path.display());
    }
    Ok(bundle)
}

pub fn save_meta(paths: &IndexPaths, meta: &MetaFile) -> Result<()> {
    create_dir_all(&paths.root)?;
    let mut f = File::create(paths.meta())?;
    let json = serde_json::to_string_pretty(meta)?;
    f.write_all(json.as_bytes())?;
    Ok(())
}

pub fn load_meta(paths: &IndexPaths) -> Result<MetaFile> {
    let path = paths.meta();
    let mut f = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
    let mut buf = String::new();
    f.read_to_string(&mut buf)?;
    let meta: MetaFile = serde_json::from_str(&buf)?;
    Ok(meta)
}
