// src/main.rs

use anyhow::Result;
use bopo_create::commands;

fn main() -> Result<()> {
    commands::run_cli()
}
