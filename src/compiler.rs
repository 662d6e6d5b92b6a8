use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use log::{info, warn};

use crate::config::Config;
use crate::filesystem_utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Disassembly,
    Binary,
}

impl OutputKind {
    pub fn flag(self) -> &'static str {
        match self {
            OutputKind::Disassembly => "-S",
            OutputKind::Binary => "-O",
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            OutputKind::Disassembly => ".ass",
            OutputKind::Binary => ".spv",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub compiler: PathBuf,
    pub input: PathBuf,
    pub kind: OutputKind,
    pub output: PathBuf,
}

impl Invocation {
    pub fn new(
        compiler: &Path,
        input: &Path,
        file_name: &str,
        build_dir: &Path,
        kind: OutputKind,
    ) -> Self {
        Self {
            compiler: compiler.to_path_buf(),
            input: input.to_path_buf(),
            kind,
            output: build_dir.join(format!("{}{}", file_name, kind.suffix())),
        }
    }
}

/// Runs one compiler invocation to completion. `Ok(false)` means the process
/// ran but exited unsuccessfully; `Err` means it could not be run at all.
pub trait CompilerInvoker {
    fn invoke(&mut self, invocation: &Invocation) -> io::Result<bool>;
}

pub struct Glslc;

impl CompilerInvoker for Glslc {
    fn invoke(&mut self, invocation: &Invocation) -> io::Result<bool> {
        let status = Command::new(&invocation.compiler)
            .arg(&invocation.input)
            .arg(invocation.kind.flag())
            .arg("-o")
            .arg(&invocation.output)
            .status()?;
        Ok(status.success())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub invocations: usize,
    pub failures: usize,
}

pub fn compile_all(config: &Config, invoker: &mut impl CompilerInvoker) -> Result<BatchReport> {
    if !config.build_dir.is_dir() {
        bail!(
            "Build directory {} does not exist",
            config.build_dir.display()
        );
    }

    let sources = filesystem_utils::collect_glsl_sources(&config.shader_dir)?;
    info!(
        "Compiling {} shaders from {}",
        sources.len(),
        config.shader_dir.display()
    );

    let mut report = BatchReport::default();
    for source in &sources {
        for kind in [OutputKind::Disassembly, OutputKind::Binary] {
            let invocation = Invocation::new(
                &config.compiler,
                &source.path,
                &source.file_name,
                &config.build_dir,
                kind,
            );

            let success = invoker.invoke(&invocation).with_context(|| {
                format!(
                    "Failed to run {} on {}",
                    invocation.compiler.display(),
                    source.file_name
                )
            })?;

            report.invocations += 1;
            if success {
                info!("{} -> {}", source.file_name, invocation.output.display());
            } else {
                report.failures += 1;
                warn!(
                    "{} exited unsuccessfully for {}",
                    invocation.compiler.display(),
                    source.file_name
                );
            }
        }
    }

    Ok(report)
}
