use anyhow::{Context, Result};
use log::{debug, Level};
use shader_tools::path_literal::path_to_literal;

fn main() -> Result<()> {
    simple_logger::init_with_level(Level::Info)?;

    let cwd = std::env::current_dir().context("Failed to read the working directory")?;
    debug!("working directory {}", cwd.display());
    println!("{}", path_to_literal(&cwd.to_string_lossy()));

    Ok(())
}
