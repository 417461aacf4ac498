use std::path::Path;
use log::info;
use crate::error::HealthResult;

/// Persist the rendered report as UTF-8, replacing any previous contents.
///
/// Missing parent directories are created first; a bare filename (no parent
/// component) writes into the current directory. Failures propagate.
pub fn save_report<P: AsRef<Path>>(report: &str, path: P) -> HealthResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, report)?;
    info!("Report saved to {:?}", path);
    Ok(())
}
