// bopo-create/src/commands.rs

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::{
    cli::Cli,
    debrief::{debrief, Value},
    install, logging,
    plan::{self, Answers, HostInfo},
    prompt::{self, PromptError, TerminalPrompter},
    registry::{NpmRegistry, Offline, VersionResolver},
    report,
    settings::Settings,
    style::{self, em, red},
    writer,
};

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    run(&cli)
}

/// Full generator pass for already-parsed flags.
pub fn run(cli: &Cli) -> Result<()> {
    let settings = cli.apply(Settings::load(cli.config.as_deref())?);
    let summary = debrief(&Value::from_serialize(&settings), settings.debrief);
    debug!(settings = %summary, "settings");

    println!("{}", style::banner(cli.temp));

    let answers = match gather_answers(cli, &settings) {
        Ok(a) => a,
        Err(e) if is_cancelled(&e) => {
            println!("\n{}", red("cancelled"));
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    println!("\n◇  Generating project...");
    let resolver: Box<dyn VersionResolver> = if cli.offline {
        info!("offline: pinning dev dependencies to `latest`");
        Box::new(Offline)
    } else {
        Box::new(NpmRegistry::new(settings.registry_url.clone())?)
    };
    let plan = plan::build_plan(&answers, HostInfo::detect(), resolver.as_ref(), settings.debrief)?;

    let out = writer::output_folder(settings.output_base(cli.temp), &answers.name)?;
    writer::write_plan(&plan, &out).with_context(|| format!("generating {}", out.display()))?;
    println!("{}", report::render_tree(&out)?);

    if answers.install {
        install::install_dependencies(&out)?;
    }

    println!("{}  {}", style::green("✔"), em(&display_path(out)));
    println!("{}", style::outro());
    Ok(())
}

fn gather_answers(cli: &Cli, settings: &Settings) -> Result<Answers> {
    let preset = cli.preset();
    if let Some(reason) = preset.scope.as_deref().and_then(prompt::validate_scope) {
        bail!("--scope: {reason}");
    }
    if let Some(reason) = preset.name.as_deref().and_then(prompt::validate_name) {
        bail!("--name: {reason}");
    }

    let answers = if cli.yes {
        prompt::default_answers(settings, &preset)
    } else {
        let mut p = TerminalPrompter::stdio();
        prompt::ask_answers(&mut p, settings, &preset)?
    };
    // config-file defaults skip the prompt validators when `-y` is given
    if let Some(reason) = prompt::validate_scope(&answers.scope) {
        bail!("scope {:?}: {reason}", answers.scope);
    }
    if let Some(reason) = prompt::validate_name(&answers.name) {
        bail!("name {:?}: {reason}", answers.name);
    }
    info!(name = %answers.name, bundler = %answers.bundler, addons = answers.addons.len(), "answers collected");
    Ok(answers)
}

fn is_cancelled(e: &anyhow::Error) -> bool {
    matches!(e.downcast_ref::<PromptError>(), Some(PromptError::Cancelled))
}

fn display_path(p: PathBuf) -> String {
    p.canonicalize().unwrap_or(p).display().to_string()
}
