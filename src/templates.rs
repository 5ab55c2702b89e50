// bopo-create/src/templates.rs
//! Template files baked into the binary, plus placeholder substitution.

pub const PACKAGE_JSON: &str = include_str!("../templates/package.json");
pub const TSCONFIG: &str = include_str!("../templates/tsconfig.json");
pub const TSUP_CONFIG: &str = include_str!("../templates/tsup.config.ts");
pub const PRETTIER: &str = include_str!("../templates/prettier.config.json");
pub const JSR: &str = include_str!("../templates/jsr.json");
pub const WORKFLOW: &str = include_str!("../templates/workflow.yml");
pub const GITIGNORE: &str = include_str!("../templates/gitignore");

/// Entry file name, without extension.
pub const PATH_TOKEN: &str = "_PATH_";
/// Bare package name.
pub const NAME_TOKEN: &str = "_NAME_";
/// Package scope, including the leading `@`.
pub const SCOPE_TOKEN: &str = "_SCOPE_";

/// Values substituted into templates.
#[derive(Clone, Copy, Debug)]
pub struct Placeholders<'a> {
    pub entry: &'a str,
    pub name: &'a str,
    pub scope: &'a str,
}

impl Placeholders<'_> {
    /// Replace every known token. Unknown `_FOO_` sequences are left alone.
    pub fn render(&self, template: &str) -> String {
        template
            .replace(PATH_TOKEN, self.entry)
            .replace(NAME_TOKEN, self.name)
            .replace(SCOPE_TOKEN, self.scope)
    }

    /// Only the entry path; used for files where `_NAME_` has no meaning.
    pub fn render_path(&self, template: &str) -> String {
        template.replace(PATH_TOKEN, self.entry)
    }
}

/// Stub module written to `src/<entry>.ts`.
pub fn entry_module(description: &str) -> String {
    let about = if description.trim().is_empty() {
        "A blank package template."
    } else {
        description.trim()
    };
    format!(
        "/**\n * @module {about}\n */\n\nexport const foo = (msg: string) => console.log(msg)\n\nfoo('hello world')\n"
    )
}
