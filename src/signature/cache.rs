// On-disk signature cache.
//
// A pretty-printed JSON object of author -> signature, stored inside the
// labeled corpus directory. There is no content hash: the cache is trusted
// until it fails to parse or the caller forces a rebuild.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::store::SignatureStore;

/// Default cache file name, relative to the labeled corpus directory.
pub const CACHE_FILE_NAME: &str = "signatures_cache.json";

/// Read a cached store. Any I/O or parse error (including a truncated file)
/// is returned so the caller can fall back to a rebuild.
pub fn load_cache(path: &Path) -> Result<SignatureStore> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open signature cache {}", path.display()))?;
    let store = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Signature cache {} is corrupt", path.display()))?;
    Ok(store)
}

/// Write the store as 4-space indented JSON, overwriting any existing file.
pub fn save_cache(path: &Path, store: &SignatureStore) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create signature cache {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    store
        .serialize(&mut serializer)
        .context("Failed to serialize signatures")?;

    writer.write_all(b"\n")?;
    writer
        .flush()
        .with_context(|| format!("Failed to write signature cache {}", path.display()))?;
    Ok(())
}
