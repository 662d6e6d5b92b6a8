use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, error, warn};

use crate::shader::{ShaderSource, ShaderStage};

// get the GLSL sources sitting directly in shader_dir, sorted by file name
pub fn collect_glsl_sources(shader_dir: &Path) -> Result<Vec<ShaderSource>> {
    let entries = fs::read_dir(shader_dir)
        .with_context(|| format!("Failed to read shader directory {}", shader_dir.display()))?;

    let mut sources = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                error!(
                    "Failed to read a file in {}: {}, {}",
                    shader_dir.display(),
                    e,
                    e.kind()
                );
                continue;
            }
        };

        let entry_path = entry.path();
        // skips build/ and anything else that is not a plain file
        if !entry_path.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let file_name = match file_name.to_str() {
            Some(name) => name,
            None => {
                warn!(
                    "Skipping {}, file name is not valid UTF-8",
                    entry_path.display()
                );
                continue;
            }
        };

        let stage = match ShaderStage::from_file_name(file_name) {
            Some(stage) => stage,
            None => {
                debug!("Skipping {}, not a shader stage source", file_name);
                continue;
            }
        };

        debug!(
            "found {:?} ({}) shader {}",
            stage,
            stage.extension(),
            entry_path.display()
        );
        sources.push(ShaderSource {
            file_name: file_name.to_string(),
            path: entry_path,
            stage,
        });
    }

    sources.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(sources)
}

#[cfg(test)]
pub(crate) mod test_dir {
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    /// Scratch directory under the system temp dir, removed on drop.
    pub struct ScratchDir {
        path: PathBuf,
    }

    impl ScratchDir {
        pub fn new(label: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "shader-tools-{}-{}-{}",
                label,
                std::process::id(),
                COUNTER.fetch_add(1, Ordering::Relaxed)
            ));
            let _ = fs::remove_dir_all(&path);
            fs::create_dir_all(&path).unwrap();
            Self { path }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        pub fn touch(&self, name: &str) {
            fs::write(self.path.join(name), "#version 450\nvoid main() {}\n").unwrap();
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.path);
        }
    }
}
