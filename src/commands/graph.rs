use crate::cli::{Commands, InfoArgs, ListArgs, OutputFormat};
use crate::error::Result;
use crate::graph::{GraphInfo, GraphStore, HopRange, Person};
use crate::utils;
use prettytable::{row, Table};
use std::io::Write;

/// Execute a graph command against `store`, writing results to `out`.
pub async fn execute<W: Write>(
    command: &Commands,
    store: &dyn GraphStore,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Add { name, age } => handle_add(store, out, name, *age).await,
        Commands::Remove { name } => handle_remove(store, out, name).await,
        Commands::Edit { name, age } => handle_edit(store, out, name, *age).await,
        Commands::Befriend { name, friend } => handle_befriend(store, out, name, friend).await,
        Commands::List(args) => handle_list(store, out, args).await,
        Commands::Info(args) => handle_info(store, out, args).await,
        Commands::Init(_) | Commands::Path => Ok(()),
    }
}

async fn handle_add<W: Write>(
    store: &dyn GraphStore,
    out: &mut W,
    name: &str,
    age: Option<i64>,
) -> Result<()> {
    if store.add(name, age).await? > 0 {
        match age {
            Some(age) => writeln!(out, "Created new Person: {} ({})", name, age)?,
            None => writeln!(out, "Created new Person: {}", name)?,
        }
    }
    Ok(())
}

async fn handle_remove<W: Write>(store: &dyn GraphStore, out: &mut W, name: &str) -> Result<()> {
    if store.remove(name).await? > 0 {
        writeln!(out, "Removed {}", name)?;
    }
    Ok(())
}

async fn handle_edit<W: Write>(
    store: &dyn GraphStore,
    out: &mut W,
    name: &str,
    age: i64,
) -> Result<()> {
    if store.edit(name, age).await? > 0 {
        writeln!(
            out,
            "Edited {} successfully, now is {} years old.",
            name, age
        )?;
    }
    Ok(())
}

async fn handle_befriend<W: Write>(
    store: &dyn GraphStore,
    out: &mut W,
    name: &str,
    friend: &str,
) -> Result<()> {
    if store.befriend(name, friend).await? > 0 {
        writeln!(out, "{} and {} are now friends!", name, friend)?;
    } else {
        writeln!(out, "No relationship created")?;
    }
    Ok(())
}

async fn handle_list<W: Write>(store: &dyn GraphStore, out: &mut W, args: &ListArgs) -> Result<()> {
    let range = HopRange::new(args.depth, args.full);
    let friends = store.list_friends(&args.name, range).await?;
    write_friends(out, &friends, args.format)
}

async fn handle_info<W: Write>(store: &dyn GraphStore, out: &mut W, args: &InfoArgs) -> Result<()> {
    let info = store.info().await?;
    write_info(out, &info, args.format)
}

/// Writes a friend listing in the requested format.
pub fn write_friends<W: Write>(out: &mut W, friends: &[Person], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for friend in friends {
                writeln!(out, "{}", utils::friend_line(friend))?;
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_titles(row!["Name", "Age"]);
            for friend in friends {
                let age = friend.age.map(|a| a.to_string()).unwrap_or_default();
                table.add_row(row![friend.name, age]);
            }
            table.print(out)?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(friends)?)?;
        }
    }
    Ok(())
}

/// Writes graph counters in the requested format.
pub fn write_info<W: Write>(out: &mut W, info: &GraphInfo, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(
            out,
            "Found {} Nodes and {} Relationships",
            info.nodes, info.relationships
        )?,
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_titles(row!["Nodes", "Relationships"]);
            table.add_row(row![info.nodes, info.relationships]);
            table.print(out)?;
        }
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(info)?)?,
    }
    Ok(())
}
