use anyhow::Result;
use log::{info, warn, Level};
use shader_tools::compiler::{self, Glslc};
use shader_tools::config::Config;

fn main() -> Result<()> {
    simple_logger::init_with_level(Level::Info)?;

    let config = Config::from_env()?;
    let report = compiler::compile_all(&config, &mut Glslc)?;

    if report.failures > 0 {
        warn!(
            "{} of {} compiler runs failed",
            report.failures, report.invocations
        );
    } else {
        info!("{} compiler runs finished", report.invocations);
    }

    Ok(())
}
