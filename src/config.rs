use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const SDK_PATH_VAR: &str = "VK_SDK_PATH";
pub const SHADER_DIR_VAR: &str = "COUST_SHADER_DIR";
pub const BUILD_DIR_NAME: &str = "build";

#[cfg(windows)]
const COMPILER_SUBPATH: [&str; 2] = ["Bin", "glslc.exe"];
#[cfg(not(windows))]
const COMPILER_SUBPATH: [&str; 2] = ["bin", "glslc"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub compiler: PathBuf,
    pub shader_dir: PathBuf,
    pub build_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read the working directory")?;
        Self::from_vars(
            env::var_os(SDK_PATH_VAR),
            env::var_os(SHADER_DIR_VAR),
            &cwd,
        )
    }

    pub fn from_vars(
        sdk_path: Option<OsString>,
        shader_dir_override: Option<OsString>,
        cwd: &Path,
    ) -> Result<Self> {
        let sdk_path = sdk_path.with_context(|| format!("{} is not set", SDK_PATH_VAR))?;
        Ok(Self::resolve(
            Path::new(&sdk_path),
            cwd,
            shader_dir_override.map(PathBuf::from),
        ))
    }

    /// The tool runs from `Tool/`, so by default the shaders are found in the
    /// sibling `Coust/shaders` directory.
    pub fn resolve(sdk_path: &Path, cwd: &Path, shader_dir_override: Option<PathBuf>) -> Self {
        let compiler = COMPILER_SUBPATH
            .iter()
            .fold(sdk_path.to_path_buf(), |path, part| path.join(part));
        let shader_dir = shader_dir_override
            .unwrap_or_else(|| cwd.join("..").join("Coust").join("shaders"));
        let build_dir = shader_dir.join(BUILD_DIR_NAME);

        Self {
            compiler,
            shader_dir,
            build_dir,
        }
    }
}
