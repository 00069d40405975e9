use clap::Parser;
use colored::*;
use gatherings::api::EventDirectory;
use gatherings::error::{DirectoryError, Result};
use gatherings::filter::FilterCriteria;
use gatherings::model::{Event, EventInput, EventType};
use gatherings::tabs::Tab;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, FilterArgs, SubmitArgs};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List { filters, tab }) => handle_list(&filters, tab, cli.json),
        Some(Commands::View { index, filters, tab }) => {
            handle_view(index, &filters, tab, cli.json)
        }
        Some(Commands::Submit(submit)) => handle_submit(submit, cli.json),
        Some(Commands::Colleges) => handle_colleges(cli.json),
        None => handle_list(&FilterArgs::default(), None, cli.json),
    }
}

/// Open the seeded directory with the requested criteria applied. An
/// explicit `--tab` overrides the automatic search-tab switch.
fn open_directory(filters: &FilterArgs, tab: Option<Tab>) -> EventDirectory {
    let mut directory = EventDirectory::with_seed();
    directory.set_criteria(criteria_from(filters));
    if let Some(tab) = tab {
        directory.set_active_tab(tab);
    }
    directory
}

fn criteria_from(filters: &FilterArgs) -> FilterCriteria {
    FilterCriteria {
        search_query: filters.search.clone(),
        event_type: filters.event_type,
        college: filters.college.clone(),
        start_date: filters.from,
        end_date: filters.to,
    }
}

fn handle_list(filters: &FilterArgs, tab: Option<Tab>, json: bool) -> Result<()> {
    let directory = open_directory(filters, tab);
    let events = directory.active_view();

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    print_tab_bar(&directory);
    print_events(&events, directory.active_tab());
    Ok(())
}

fn handle_view(index: usize, filters: &FilterArgs, tab: Option<Tab>, json: bool) -> Result<()> {
    let directory = open_directory(filters, tab);
    let events = directory.active_view();

    let event = index
        .checked_sub(1)
        .and_then(|i| events.get(i))
        .ok_or_else(|| {
            DirectoryError::Api(format!(
                "No event at position {} (listing has {})",
                index,
                events.len()
            ))
        })?;

    if json {
        println!("{}", serde_json::to_string_pretty(event)?);
        return Ok(());
    }

    print_event_details(event);
    Ok(())
}

fn handle_submit(submit: SubmitArgs, json: bool) -> Result<()> {
    let input = EventInput {
        name: submit.name.unwrap_or_default(),
        description: submit.description.unwrap_or_default(),
        date: submit.date.unwrap_or_default(),
        time: submit.time.unwrap_or_default(),
        location: submit.location.unwrap_or_default(),
        college: submit.college.unwrap_or_default(),
        event_type: submit.event_type,
        link: submit.link.unwrap_or_default(),
        image_url: submit.image_url,
    };

    let mut directory = EventDirectory::with_seed();
    let event = directory.submit_event(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&event)?);
        return Ok(());
    }

    println!("{}", format!("Event submitted: {}", event.name).green());
    print_event_details(&event);
    Ok(())
}

fn handle_colleges(json: bool) -> Result<()> {
    let directory = EventDirectory::with_seed();
    let colleges = directory.colleges();

    if json {
        println!("{}", serde_json::to_string_pretty(&colleges)?);
        return Ok(());
    }

    for college in colleges {
        println!("{}", college);
    }
    Ok(())
}

const LINE_WIDTH: usize = 100;
const TYPE_WIDTH: usize = 11;
const DATE_WIDTH: usize = 20;

fn print_tab_bar(directory: &EventDirectory) {
    let views = directory.views();
    let active = directory.active_tab();

    let bar = Tab::ALL
        .iter()
        .map(|&tab| {
            let entry = format!("{} ({})", tab.label(), views.count(tab));
            if tab == active {
                entry.bold().underline().to_string()
            } else {
                entry.dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ·  ");

    println!("{}\n", bar);
}

fn print_events(events: &[Event], active: Tab) {
    if events.is_empty() {
        println!("No events found.");
        let hint = if active == Tab::Search {
            "Try adjusting your search query or filters."
        } else {
            "Try adjusting your filters or add a new event."
        };
        println!("{}", hint.dimmed());
        return;
    }

    for (i, event) in events.iter().enumerate() {
        let idx_str = format!("{:>2}. ", i + 1);
        let badge = type_badge(event.event_type);
        let date = format_event_date(event);

        let available =
            LINE_WIDTH.saturating_sub(idx_str.width() + TYPE_WIDTH + DATE_WIDTH);
        let name = truncate_to_width(&event.name, available);
        let padding = available.saturating_sub(name.width());
        // Colored strings carry ANSI codes, so padding is computed on the
        // plain text and applied by hand.
        let badge_padding = TYPE_WIDTH.saturating_sub(event.event_type.as_str().width());

        println!(
            "{}{}{}{}{}{:>date_w$}",
            idx_str,
            name.bold(),
            " ".repeat(padding),
            badge,
            " ".repeat(badge_padding),
            date,
            date_w = DATE_WIDTH,
        );
        println!(
            "    {}",
            format!("{} · {} · {}", event.college, event.location, event.time).dimmed()
        );
    }
}

fn print_event_details(event: &Event) {
    println!("{}", event.name.bold());
    println!(
        "{}  {}",
        colorize_type(event.event_type.label(), event.event_type),
        format_event_date(event)
    );
    println!("{}", event.time);
    println!("{}, {}", event.location, event.college);
    println!();
    println!("{}", event.description);
    println!();
    println!("{}", event.link.underline());
    if let Some(image_url) = &event.image_url {
        println!("{}", image_url.dimmed());
    }
}

fn type_badge(event_type: EventType) -> ColoredString {
    colorize_type(event_type.as_str(), event_type)
}

fn colorize_type(text: &str, event_type: EventType) -> ColoredString {
    match event_type {
        EventType::Hackathon => text.magenta(),
        EventType::TechTalk => text.blue(),
        EventType::Workshop => text.green(),
    }
}

/// Long-form date ("June 15, 2025"); unparseable dates render as stored.
fn format_event_date(event: &Event) -> String {
    match event.calendar_date() {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => event.date.clone(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
