//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "amity")]
#[command(about = "Relationship and schedule tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new tracker
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Weekly summary: goals, quote, and recent contacts
    Home,

    /// Manage contacts
    People {
        #[command(subcommand)]
        command: PeopleCommands,
    },

    /// Manage calendar events
    Planner {
        #[command(subcommand)]
        command: PlannerCommands,
    },

    /// Manage weekly goal indicators
    Goals {
        #[command(subcommand)]
        command: GoalsCommands,
    },

    /// Browse and vote on the community feed
    Feed {
        #[command(subcommand)]
        command: FeedCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum PeopleCommands {
    /// List contacts with the dot-color legend
    List {
        /// Only show one dot color (yellow, green, lightBlue, darkBlue, purple, gray, red)
        #[arg(short, long)]
        dot: Option<String>,

        /// Only show people contacted within the recency window
        #[arg(short, long)]
        recent: bool,
    },

    /// Add a contact
    Add {
        name: String,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        instagram: Option<String>,

        #[arg(long)]
        facebook: Option<String>,

        /// Dot color (default: yellow)
        #[arg(short, long)]
        dot: Option<String>,

        #[arg(long)]
        family: bool,

        #[arg(long)]
        platonic: bool,
    },

    /// Show one contact in full, including notes
    Show { id: String },

    /// Update fields on a contact
    Set {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        instagram: Option<String>,

        #[arg(long)]
        facebook: Option<String>,

        #[arg(short, long)]
        dot: Option<String>,

        /// Mark as family (true/false)
        #[arg(long)]
        family: Option<bool>,

        /// Mark as platonic (true/false)
        #[arg(long)]
        platonic: Option<bool>,
    },

    /// Record a contact now
    Contact {
        id: String,

        /// Also count this contact as a date
        #[arg(long)]
        date: bool,
    },

    /// Attach a note to a contact
    Note {
        id: String,
        text: String,

        /// Note kind (pre, post, general)
        #[arg(short, long, default_value = "general")]
        kind: String,

        /// Event this note relates to
        #[arg(long)]
        event: Option<String>,
    },

    /// Remove a contact
    Remove { id: String },
}

#[derive(Subcommand, Debug)]
pub enum PlannerCommands {
    /// Add an event
    Add {
        title: String,

        /// Event date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Start time, e.g. "9:00 AM"
        #[arg(long)]
        start: Option<String>,

        /// End time, e.g. "10:00 AM"
        #[arg(long)]
        end: Option<String>,

        /// Category label (default: Other)
        #[arg(short, long)]
        category: Option<String>,

        /// Display color (default: the category's palette color)
        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List events, optionally for one date
    List {
        #[arg(long)]
        date: Option<String>,
    },

    /// Day view: events for a date laid out on the hourly grid
    Day { date: String },

    /// Update fields on an event
    Set {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long)]
        pre_notes: Option<String>,

        #[arg(long)]
        post_notes: Option<String>,
    },

    /// Remove an event
    Remove { id: String },
}

#[derive(Subcommand, Debug)]
pub enum GoalsCommands {
    /// List indicators with progress
    List,

    /// Add an indicator
    Add { name: String, goal: u32 },

    /// Set an indicator's current count
    Set { id: String, current: u32 },

    /// Move an indicator's count (default +1)
    Bump {
        id: String,

        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        by: i64,
    },

    /// Zero every counter for a new week
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum FeedCommands {
    /// List feed items, newest first
    List {
        /// Only one category (dates, memes, spiritual, tips)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Post a feed item
    Add {
        /// Category (dates, memes, spiritual, tips)
        category: String,
        text: String,

        #[arg(long)]
        anonymous: bool,
    },

    /// Vote on a feed item (up or down); voting the same way again clears it
    Vote { id: String, vote: String },
}
