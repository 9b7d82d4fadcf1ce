//! `cem serve` (§6): the docs dev-server with live reload is an external
//! collaborator (out of core scope) — this is the thin shell that owns
//! the subcommand's name and exit code contract.

pub fn run(port: u16) -> anyhow::Result<()> {
    println!("cem serve: the dev server with live reload is not part of this build (requested port {port})");
    Ok(())
}
