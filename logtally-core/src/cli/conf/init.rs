use crate::conf::CONFIG_FILE;
use anyhow::{Result, bail};
use std::fs;
use std::path::PathBuf;

const TEMPLATE: &str = include_str!("../../../config-templates/logtally.hcl");

pub fn init(path: PathBuf) -> Result<()> {
    // Refuse to overwrite an existing non-empty directory
    if path.exists() {
        if path.is_file() {
            bail!("{} exists and is not a directory", path.display());
        }

        let is_empty = fs::read_dir(&path)?.next().is_none();
        if !is_empty {
            bail!(
                "config directory '{}' already exists and is not empty",
                path.display()
            );
        }
    }

    fs::create_dir_all(path.join("logs"))?;
    fs::write(path.join(CONFIG_FILE), TEMPLATE)?;

    println!("✔ Initialized logtally config in {}", path.display());
    println!("✔ Created:");
    println!("  - {CONFIG_FILE}");
    println!("  - logs/");
    println!();
    println!("Next steps:");
    println!("  logtally config check {}", path.display());
    println!("  logtally serve --config {}", path.display());

    Ok(())
}
