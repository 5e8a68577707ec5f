use std::io::Write;

use anyhow::Context;
use tracing::info;

use resolve_core::lookup::LookupService;

use crate::terminal::print;

/// Runs the whole pipeline for `host`, writing the two result lines to `out`.
///
/// The first line goes out before the blocking lookup starts.
pub fn resolve<W: Write>(host: &str, service: &LookupService, out: &mut W) -> anyhow::Result<()> {
    let local = service.local_hostname()?;
    print::resolving(out, host, &local).context("writing to stdout")?;

    let resolution = service.resolve(host)?;
    info!("{host} -> {}", resolution.address);
    print::has_address(out, &resolution).context("writing to stdout")?;

    Ok(())
}
