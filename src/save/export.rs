use crate::Error;
use crate::Result;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// anything written to disk as a pretty JSON report under a results root.
///
/// reports are grouped by controller: root/<directory>/<name>.json
pub trait Export: Serialize {
    fn directory(&self) -> String;
    fn name(&self) -> String;
    fn path(&self, root: &Path) -> PathBuf {
        root.join(self.directory())
            .join(format!("{}.json", self.name()))
    }
    fn save(&self, root: &Path) -> Result<PathBuf> {
        let path = self.path(root);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| Error::Io {
                operation: format!("create directory {}", parent.display()),
                source,
            })?;
        }
        let file = std::fs::File::create(&path).map_err(|source| Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        let ref mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut *writer, self)?;
        std::io::Write::flush(writer).map_err(|source| Error::Io {
            operation: format!("write {}", path.display()),
            source,
        })?;
        log::info!("{:<32}{:<32}", "saving      report", path.display());
        Ok(path)
    }
}
