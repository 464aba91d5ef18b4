use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use spdlog::info;

use postsmith::config::SAMPLE_CONFIG;

use crate::SampleConfigArgs;

pub fn sample_config_cmd(args: SampleConfigArgs) -> Result<()> {
    let Some(path) = args.out else {
        print!("{}", SAMPLE_CONFIG);
        return Ok(());
    };

    let file = File::create(&path)
        .with_context(|| format!("Error creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(SAMPLE_CONFIG.as_bytes())?;
    writer.flush()?;

    info!("Sample configuration written to {}", path.display());
    Ok(())
}
