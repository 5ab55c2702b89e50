// bopo-create/src/prompt.rs
//! Linear question flow: scope, name, description, entry, bundler, addons, install.
//!
//! Answers already given on the command line are not asked again. The
//! terminal prompter reads lines from any `BufRead`, so tests drive it with
//! an in-memory cursor. End of input cancels the whole flow.

use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::{
    catalog::{Addon, Bundler},
    plan::Answers,
    settings::Settings,
    style::{dim, em, SEP},
    util,
};

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("cancelled")]
    Cancelled,
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}

type PromptResult<T> = Result<T, PromptError>;

/// Returns `Some(reason)` when the input is rejected.
pub type Validator = fn(&str) -> Option<String>;

pub struct TextQuestion<'a> {
    pub message: &'a str,
    pub default: &'a str,
    pub placeholder: &'a str,
    pub validate: Option<Validator>,
}

pub struct Choice {
    pub label: String,
    pub hint: String,
}

pub trait Prompter {
    fn text(&mut self, q: &TextQuestion<'_>) -> PromptResult<String>;
    /// Index of the chosen option.
    fn select(&mut self, message: &str, options: &[Choice], initial: usize) -> PromptResult<usize>;
    /// Indices of the chosen options, ascending.
    fn multiselect(&mut self, message: &str, options: &[Choice], initial: &[bool]) -> PromptResult<Vec<usize>>;
    fn confirm(&mut self, message: &str, initial: bool) -> PromptResult<bool>;
}

/* ============================== Terminal prompter ============================== */

pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, header: &str) -> PromptResult<String> {
        write!(self.output, "\n◆  {header}{SEP} ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Cancelled);
        }
        Ok(line.trim().to_string())
    }

    fn list(&mut self, options: &[Choice], marks: impl Fn(usize) -> &'static str) -> io::Result<()> {
        for (i, c) in options.iter().enumerate() {
            let hint = if c.hint.is_empty() { String::new() } else { format!(" {}", dim(&c.hint)) };
            write!(self.output, "\n│  {} {}) {}{}", marks(i), i + 1, c.label, hint)?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn text(&mut self, q: &TextQuestion<'_>) -> PromptResult<String> {
        loop {
            let header = if q.placeholder.is_empty() {
                q.message.to_string()
            } else {
                format!("{} {}", q.message, dim(q.placeholder))
            };
            let raw = self.ask(&header)?;
            let value = if raw.is_empty() { q.default.to_string() } else { raw };
            match q.validate.and_then(|v| v(&value)) {
                Some(reason) => writeln!(self.output, "▲  {reason}")?,
                None => return Ok(value),
            }
        }
    }

    fn select(&mut self, message: &str, options: &[Choice], initial: usize) -> PromptResult<usize> {
        loop {
            self.list(options, |i| if i == initial { "●" } else { "○" })?;
            let raw = self.ask(message)?;
            if raw.is_empty() {
                return Ok(initial);
            }
            match parse_choice(&raw, options) {
                Some(i) => return Ok(i),
                None => writeln!(self.output, "▲  pick 1-{} or a name", options.len())?,
            }
        }
    }

    fn multiselect(&mut self, message: &str, options: &[Choice], initial: &[bool]) -> PromptResult<Vec<usize>> {
        loop {
            self.list(options, |i| if initial.get(i).copied().unwrap_or(false) { "◼" } else { "◻" })?;
            let raw = self.ask(&format!("{message} {}", em("(comma separated, `none` for nothing)")))?;
            if raw.is_empty() {
                return Ok((0..options.len()).filter(|i| initial.get(*i).copied().unwrap_or(false)).collect());
            }
            if raw.eq_ignore_ascii_case("none") {
                return Ok(Vec::new());
            }
            let picked: Option<Vec<usize>> = raw
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| parse_choice(s, options))
                .collect();
            match picked {
                Some(mut v) => {
                    v.sort_unstable();
                    v.dedup();
                    return Ok(v);
                }
                None => writeln!(self.output, "▲  unknown choice in `{raw}`")?,
            }
        }
    }

    fn confirm(&mut self, message: &str, initial: bool) -> PromptResult<bool> {
        let hint = if initial { "Y/n" } else { "y/N" };
        loop {
            let raw = self.ask(&format!("{message} {}", dim(hint)))?;
            match raw.to_ascii_lowercase().as_str() {
                "" => return Ok(initial),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "▲  answer yes or no")?,
            }
        }
    }
}

/// 1-based index or case-insensitive label.
fn parse_choice(raw: &str, options: &[Choice]) -> Option<usize> {
    let t = raw.trim();
    if let Ok(n) = t.parse::<usize>() {
        return (1..=options.len()).contains(&n).then(|| n - 1);
    }
    options.iter().position(|c| c.label.eq_ignore_ascii_case(t))
}

/* ================================== The flow ================================== */

/// Answers supplied up front (flags). `None` means "ask".
#[derive(Clone, Debug, Default)]
pub struct Preset {
    pub scope: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub entry: Option<String>,
    pub bundler: Option<Bundler>,
    pub addons: Option<Vec<Addon>>,
    pub install: Option<bool>,
}

pub fn validate_scope(v: &str) -> Option<String> {
    if v.is_empty() || !v.starts_with('@') {
        return Some("Scope must start with \"@\"".into());
    }
    None
}

pub fn validate_name(v: &str) -> Option<String> {
    util::invalid_package_name(v)
}

/// Settings defaults with every preset applied; nothing is asked.
pub fn default_answers(settings: &Settings, preset: &Preset) -> Answers {
    Answers {
        scope: preset.scope.clone().unwrap_or_else(|| settings.default_scope.clone()),
        name: preset.name.clone().unwrap_or_else(|| settings.default_name.clone()),
        description: preset.description.clone().unwrap_or_default(),
        entry: util::strip_ts_ext(preset.entry.as_deref().unwrap_or(&settings.default_entry)).to_string(),
        bundler: preset.bundler.unwrap_or(settings.default_bundler),
        addons: preset.addons.clone().unwrap_or_else(|| Addon::ALL.to_vec()),
        install: preset.install.unwrap_or(true),
    }
}

/// Ask for everything the preset leaves open.
pub fn ask_answers(p: &mut dyn Prompter, settings: &Settings, preset: &Preset) -> PromptResult<Answers> {
    let scope = match &preset.scope {
        Some(s) => s.clone(),
        None => p.text(&TextQuestion {
            message: &format!("scope {}", em("(optional)")),
            default: &settings.default_scope,
            placeholder: &settings.default_scope,
            validate: Some(validate_scope),
        })?,
    };

    let name = match &preset.name {
        Some(n) => n.clone(),
        None => p.text(&TextQuestion {
            message: "name",
            default: &settings.default_name,
            placeholder: &settings.default_name,
            validate: Some(validate_name),
        })?,
    };

    let description = match &preset.description {
        Some(d) => d.clone(),
        None => p.text(&TextQuestion {
            message: &format!("description {}", em("(optional)")),
            default: "",
            placeholder: "the best javascript package ever!",
            validate: None,
        })?,
    };

    let entry = match &preset.entry {
        Some(e) => e.clone(),
        None => p.text(&TextQuestion {
            message: "entry",
            default: &settings.default_entry,
            placeholder: &format!("{}.ts", settings.default_entry),
            validate: None,
        })?,
    };
    let entry = util::strip_ts_ext(&entry).to_string();

    let bundler = match preset.bundler {
        Some(b) => b,
        None => {
            let options: Vec<Choice> = Bundler::ALL
                .iter()
                .map(|b| Choice { label: b.name().into(), hint: b.hint().into() })
                .collect();
            let initial = Bundler::ALL
                .iter()
                .position(|b| *b == settings.default_bundler)
                .unwrap_or(0);
            Bundler::ALL[p.select("bundler", &options, initial)?]
        }
    };

    let addons = match &preset.addons {
        Some(a) => a.clone(),
        None => {
            let options: Vec<Choice> = Addon::ALL
                .iter()
                .map(|a| Choice { label: a.label().into(), hint: a.hint().into() })
                .collect();
            p.multiselect("addons", &options, &[true; Addon::ALL.len()])?
                .into_iter()
                .map(|i| Addon::ALL[i])
                .collect()
        }
    };

    let install = match preset.install {
        Some(i) => i,
        None => p.confirm("install dependencies?", true)?,
    };

    Ok(Answers { scope, name, description, entry, bundler, addons, install })
}
