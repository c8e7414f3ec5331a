use clap::{command, Args, Parser, Subcommand, ValueEnum};

use crate::config::Overrides;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Manage a social graph of people and friendships",
    long_about = "socialgraph is a command-line tool for keeping a small social graph in a Neo4j database. It adds, edits and removes people, records who is friends with whom, and lists friends of friends up to any depth."
)]
pub struct Cli {
    /// Bolt URI of the database (overrides DATABASE_URI)
    #[arg(long, global = true)]
    pub uri: Option<String>,

    /// Database user (overrides DATABASE_USER)
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Database password (overrides DATABASE_PASS)
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Database name (overrides DATABASE_NAME)
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Log what is sent to the database
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            uri: self.uri.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
            database: self.database.clone(),
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Add a person unless someone with that name exists
    #[command()]
    Add {
        /// Name of the person
        #[arg()]
        name: String,
        /// Age of the person
        #[arg(allow_negative_numbers = true)]
        age: Option<i64>,
    },

    /// Remove a person and all their friendships
    #[command(alias = "rm")]
    Remove {
        /// Name of the person
        #[arg()]
        name: String,
    },

    /// Change the age of a person
    #[command()]
    Edit {
        /// Name of the person
        #[arg()]
        name: String,
        /// New age
        #[arg(allow_negative_numbers = true)]
        age: i64,
    },

    /// Make one person a friend of another
    #[command()]
    Befriend {
        /// Person making the friendship
        #[arg()]
        name: String,
        /// Person being befriended
        #[arg()]
        friend: String,
    },

    /// List friends of a person
    #[command(name = "list", alias = "ls")]
    List(ListArgs),

    /// Count people and friendships
    #[command()]
    Info(InfoArgs),

    /// Write the default configuration file
    #[command(alias = "initialize")]
    Init(InitArgs),

    /// Show path to config directory
    #[command()]
    Path,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ListArgs {
    /// Name of the person
    #[arg()]
    pub name: String,

    /// How many friendships away to look
    #[arg(short, long, default_value_t = 1)]
    pub depth: u32,

    /// Include friends at every depth up to --depth
    #[arg(short, long)]
    pub full: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct InitArgs {
    /// Overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Table,
    Json,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
