use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use dockside::cli::CliArgs;
use dockside::host::project::MarkerDetector;
use dockside::script::{parse_script, ScriptCommand};
use dockside::workbench::Workbench;

fn main() -> Result<()> {
    dockside::tracing::init();

    let startup = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    if startup.save_config {
        startup.panel.save().context("Failed to save config")?;
    }

    let source = match &startup.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read script from stdin")?;
            buf
        }
    };
    let commands = parse_script(&source)?;

    tracing::info!(
        "Running {} commands (side={}, follow={:?})",
        commands.len(),
        startup.panel.side,
        startup.panel.follow_buffer_file
    );

    let mut bench = Workbench::new(startup.panel, MarkerDetector::default(), startup.cwd);

    for command in commands {
        let is_status = command == ScriptCommand::Status;
        if is_status && startup.json {
            println!("{}", serde_json::to_string(&bench.status())?);
            continue;
        }
        for line in bench.run(command) {
            println!("{}", line);
        }
    }

    Ok(())
}
