use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(about = "Command-line inventory manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the inventory data file
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Emit diagnostic trace output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// The five raw fields of an item, validated by the engine (not by clap)
#[derive(Args, Debug)]
pub struct ItemFields {
    /// Item number (unique, non-negative integer)
    #[arg(allow_hyphen_values = true)]
    pub id: String,

    /// Quantity on hand (integer, may be negative)
    #[arg(allow_hyphen_values = true)]
    pub quantity: String,

    /// Item name
    pub name: String,

    /// Storage location
    pub location: String,

    /// Free-form description
    pub description: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new item to the inventory
    #[command(alias = "a")]
    Add(ItemFields),

    /// List every item in the inventory
    #[command(alias = "ls")]
    List,

    /// Look up an item by its item number
    #[command(alias = "f")]
    Find {
        /// Item number to look up
        id: i64,
    },

    /// Delete an item by id or by list position
    #[command(alias = "rm")]
    Delete {
        /// Item number to delete
        #[arg(required_unless_present = "index", conflicts_with = "index")]
        id: Option<i64>,

        /// Delete by list position (zero-based) instead of by id
        #[arg(long)]
        index: Option<usize>,
    },

    /// Update the item with the given item number
    #[command(alias = "up")]
    Update(ItemFields),

    /// Import an inventory snapshot, replacing the current contents
    Load {
        /// Snapshot to read (omit for a no-op)
        path: Option<PathBuf>,
    },

    /// Export the inventory to a snapshot file
    Save {
        /// Destination file (omit for a no-op)
        path: Option<PathBuf>,
    },
}
