pub mod graph;
pub mod init;
mod path;

use crate::cli::{Cli, Commands};
use crate::config;
use crate::error::Result;
use crate::graph::Neo4jGraph;
use std::io;

pub async fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Init(args) => init::execute(args),
        Commands::Path => path::execute(),
        command => {
            let settings = config::resolve(&config::config_dir()?, &cli.overrides())?;
            let store = Neo4jGraph::connect(&settings).await?;
            let mut stdout = io::stdout();
            graph::execute(command, &store, &mut stdout).await
        }
    }
}
