use anyhow::Context;
use std::path::Path;
use warroom_core::config::Config;
use warroom_core::{io, paths};

pub fn run(root: &Path, project: Option<&str>) -> anyhow::Result<()> {
    io::ensure_dir(&paths::warroom_dir(root)).context("creating .warroom directory")?;
    io::ensure_dir(&paths::incidents_dir(root)).context("creating incidents directory")?;

    let config_path = paths::config_path(root);
    if config_path.exists() {
        println!("war room already initialized at {}", root.display());
        return Ok(());
    }

    let name = project
        .map(str::to_string)
        .or_else(|| {
            root.file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "warroom".to_string());

    let config = Config::new(&name);
    config.save(root).context("writing config")?;

    println!("initialized war room '{}' at {}", name, root.display());
    println!("next: warroom incident create <slug> --title '...'");
    Ok(())
}
