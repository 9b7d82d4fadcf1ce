//! `cem mcp` (§6): the Model Context Protocol server is an external
//! collaborator (out of core scope) — this is the thin shell that owns
//! the subcommand's name and exit code contract.

pub fn run() -> anyhow::Result<()> {
    println!("cem mcp: the Model Context Protocol server is not part of this build");
    Ok(())
}
