use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use gatherings::model::EventType;
use gatherings::tabs::Tab;

#[derive(Parser, Debug)]
#[command(name = "gatherings")]
#[command(about = "Discover and submit campus tech events from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Emit JSON instead of formatted output
    #[arg(long, global = true)]
    pub json: bool,
}

/// Filter flags shared by the browsing commands.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Search by name, description, location, or college
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only this event type (hackathon, tech-talk, workshop)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub event_type: Option<EventType>,

    /// Only events hosted by this college (exact name)
    #[arg(short, long)]
    pub college: Option<String>,

    /// Earliest event date, inclusive (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<NaiveDate>,

    /// Latest event date, inclusive (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List events
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Tab to display (all, hackathon, tech-talk, workshop, search)
        #[arg(long)]
        tab: Option<Tab>,
    },

    /// View full details of a listed event
    #[command(alias = "v")]
    View {
        /// Position of the event in the listing (e.g. 1)
        index: usize,

        #[command(flatten)]
        filters: FilterArgs,

        /// Tab the position refers to
        #[arg(long)]
        tab: Option<Tab>,
    },

    /// Submit a new event to the directory
    #[command(alias = "add")]
    Submit(SubmitArgs),

    /// List the colleges represented in the directory
    Colleges,
}

#[derive(Args, Debug, Default, Clone)]
pub struct SubmitArgs {
    /// Event name
    #[arg(long)]
    pub name: Option<String>,

    /// A brief description of the event
    #[arg(long)]
    pub description: Option<String>,

    /// Event date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Display time, free text (e.g. "2:00 PM - 5:00 PM")
    #[arg(long)]
    pub time: Option<String>,

    /// Where the event takes place (building, room)
    #[arg(long)]
    pub location: Option<String>,

    /// Hosting college
    #[arg(long)]
    pub college: Option<String>,

    /// Event type (hackathon, tech-talk, workshop)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub event_type: EventType,

    /// Event page URL
    #[arg(long)]
    pub link: Option<String>,

    /// Optional image URL
    #[arg(long, value_name = "URL")]
    pub image_url: Option<String>,
}
