mod generate;

use generate::run_generate;

use anyhow::{Context as _, Result};

use crate::cli::Cli;
use crate::config::{resolve_plan, resolve_target};
use crate::display::Context;
use crate::io::preflight_output;

pub fn dispatch(cli: Cli, ctx: Context) -> Result<()> {
    let target = resolve_target(&cli)?;
    let replaces_existing = preflight_output(&target.path, cli.output.force)
        .with_context(|| format!("Refusing to write {}", target.path.display()))?;

    let plan = resolve_plan(&cli, target)?;
    run_generate(plan, replaces_existing, ctx)
}
