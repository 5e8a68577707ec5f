use std::io::{self, Write};

use resolve_common::network::resolution::Resolution;

/// `Resolving '<remote>' from '<local>':`
pub fn resolving<W: Write>(out: &mut W, remote: &str, local: &str) -> io::Result<()> {
    writeln!(out, "Resolving '{remote}' from '{local}':")?;
    out.flush()
}

/// `<remote> has address <dotted-decimal>`
pub fn has_address<W: Write>(out: &mut W, resolution: &Resolution) -> io::Result<()> {
    writeln!(out, "{resolution}")?;
    out.flush()
}
