use crate::error::ExportError;
use crate::store::Store;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the current state as a seed document, loadable with `--seed`.
pub fn export_json<P: AsRef<Path>>(store: &Store, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let json = serde_json::to_string_pretty(&store.snapshot())?;

    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(json.as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    Ok(())
}
