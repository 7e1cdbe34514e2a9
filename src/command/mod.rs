pub mod bump;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum CargoCommand {
    /// Record the next release in the README's version support table.
    VersionTable(bump::BumpArgs),
}
