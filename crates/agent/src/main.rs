use std::io::{self, Read, Write};

use storefront_agent::{handle_invocation, Invocation};
use storefront_catalog::Catalog;

/// Read one invocation envelope from stdin, answer it against the
/// built-in catalog, and write the response envelope to stdout.
fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let invocation: Invocation = serde_json::from_str(&input)?;

    let catalog = Catalog::builtin();
    let response = handle_invocation(&catalog, &invocation);

    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;

    Ok(())
}
