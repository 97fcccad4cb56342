use amity::application::planner::parse_date;
use amity::application::{
    init, manage_config::ConfigService, EventUpdate, FeedService, IndicatorService, NewEvent,
    NewPerson, PeopleService, PersonUpdate, PlannerService,
};
use amity::cli::{
    Cli, Commands, FeedCommands, GoalsCommands, PeopleCommands, PlannerCommands,
};
use amity::cli::output;
use amity::domain::content::{ContentCategory, Vote};
use amity::domain::person::{DotColor, NoteKind};
use amity::domain::samples;
use amity::error::{AmityError, Result};
use amity::infrastructure::{CollectionStore, FileStore};
use chrono::Utc;
use clap::Parser;
use flexi_logger::Logger;
use std::str::FromStr;

fn main() {
    // Diagnostic stream for persistence warnings; RUST_LOG overrides the level
    let _logger = Logger::try_with_env_or_str("warn")
        .and_then(|logger| logger.start())
        .ok();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => init::init(&path),
        Commands::Config { key, value, list } => run_config(key, value, list),
        Commands::Home => run_home(),
        Commands::People { command } => run_people(command),
        Commands::Planner { command } => run_planner(command),
        Commands::Goals { command } => run_goals(command),
        Commands::Feed { command } => run_feed(command),
    }
}

fn people_service(store: FileStore) -> PeopleService {
    PeopleService::new(store, samples::sample_people(Utc::now()))
}

fn feed_service(store: FileStore) -> FeedService {
    FeedService::new(store, samples::sample_content(Utc::now()))
}

fn indicator_service(store: FileStore) -> IndicatorService {
    IndicatorService::new(store, samples::default_indicators())
}

fn run_config(key: Option<String>, value: Option<String>, list: bool) -> Result<()> {
    let store = FileStore::discover()?;
    let service = ConfigService::new(store);

    if list {
        let config = service.list()?;
        println!("row_height = {}", config.row_height);
        println!("recent_days = {}", config.recent_days);
        println!("created = {}", config.created.to_rfc3339());
        Ok(())
    } else if let Some(k) = key {
        if let Some(v) = value {
            service.set(&k, &v)?;
            println!("Set {} = {}", k, v);
            Ok(())
        } else {
            let val = service.get(&k)?;
            println!("{}", val);
            Ok(())
        }
    } else {
        println!("Usage: amity config [--list | <key> [<value>]]");
        println!("Valid keys: row_height, recent_days, created");
        Ok(())
    }
}

fn run_home() -> Result<()> {
    let store = FileStore::discover()?;
    let config = store.load_config()?;
    let now = Utc::now();

    let indicators = indicator_service(store.clone()).load()?;
    let recent = people_service(store).list(None, Some((now, config.recent_days)))?;
    let quote = samples::quote_of_the_day(now);

    print!(
        "{}",
        output::format_home(quote, &indicators, &recent, config.recent_days, now)
    );
    Ok(())
}

fn run_people(command: PeopleCommands) -> Result<()> {
    let store = FileStore::discover()?;
    let service = people_service(store.clone());
    let now = Utc::now();

    match command {
        PeopleCommands::List { dot, recent } => {
            let dot = dot
                .map(|s| DotColor::from_str(&s).map_err(AmityError::Config))
                .transpose()?;
            let recent_within = if recent {
                let config = store.load_config()?;
                Some((now, config.recent_days))
            } else {
                None
            };

            let people = service.list(dot, recent_within)?;
            print!("{}", output::format_people_list(&people, now));
            if dot.is_none() && !recent {
                println!();
                print!("{}", output::format_dot_legend(&service.counts()?));
            }
            Ok(())
        }
        PeopleCommands::Add {
            name,
            phone,
            email,
            instagram,
            facebook,
            dot,
            family,
            platonic,
        } => {
            let dot_color = dot
                .map(|s| DotColor::from_str(&s).map_err(AmityError::Config))
                .transpose()?
                .unwrap_or_default();

            let person = service.add(
                NewPerson {
                    name,
                    phone,
                    email,
                    instagram,
                    facebook,
                    dot_color,
                    is_family: family,
                    is_platonic: platonic,
                },
                now,
            )?;
            println!("Added {} ({})", person.name, person.id);
            Ok(())
        }
        PeopleCommands::Show { id } => {
            let person = service.get(&id)?;
            print!("{}", output::format_person_detail(&person, now));
            Ok(())
        }
        PeopleCommands::Set {
            id,
            name,
            phone,
            email,
            instagram,
            facebook,
            dot,
            family,
            platonic,
        } => {
            let dot_color = dot
                .map(|s| DotColor::from_str(&s).map_err(AmityError::Config))
                .transpose()?;

            let person = service.update(
                &id,
                PersonUpdate {
                    name,
                    phone,
                    email,
                    instagram,
                    facebook,
                    dot_color,
                    is_family: family,
                    is_platonic: platonic,
                },
            )?;
            println!("Updated {} ({})", person.name, person.id);
            Ok(())
        }
        PeopleCommands::Contact { id, date } => {
            let person = service.record_contact(&id, now, date)?;
            println!("Logged contact with {}", person.name);
            if date {
                println!("Date count: {}", person.date_count);
            }
            Ok(())
        }
        PeopleCommands::Note {
            id,
            text,
            kind,
            event,
        } => {
            let kind = NoteKind::from_str(&kind).map_err(AmityError::Config)?;
            let person = service.add_note(&id, &text, kind, event, now)?;
            println!("Noted on {}", person.name);
            Ok(())
        }
        PeopleCommands::Remove { id } => {
            service.remove(&id)?;
            println!("Removed {}", id);
            Ok(())
        }
    }
}

fn run_planner(command: PlannerCommands) -> Result<()> {
    let store = FileStore::discover()?;
    let service = PlannerService::new(store.clone());
    let now = Utc::now();

    match command {
        PlannerCommands::Add {
            title,
            date,
            start,
            end,
            category,
            color,
            notes,
        } => {
            let event = service.add(
                NewEvent {
                    title,
                    date: parse_date(&date)?,
                    start_time: start,
                    end_time: end,
                    category,
                    color,
                    notes,
                },
                now,
            )?;
            println!("Added {} ({})", event.title, event.id);
            Ok(())
        }
        PlannerCommands::List { date } => {
            let date = date.as_deref().map(parse_date).transpose()?;
            let events = service.list(date)?;
            print!("{}", output::format_event_list(&events));
            Ok(())
        }
        PlannerCommands::Day { date } => {
            let date = parse_date(&date)?;
            let config = store.load_config()?;
            let entries = service.day_view(date, config.row_height)?;
            print!("{}", output::format_day_view(date, &entries));
            Ok(())
        }
        PlannerCommands::Set {
            id,
            title,
            date,
            start,
            end,
            category,
            color,
            notes,
            pre_notes,
            post_notes,
        } => {
            let event = service.update(
                &id,
                EventUpdate {
                    title,
                    date: date.as_deref().map(parse_date).transpose()?,
                    start_time: start,
                    end_time: end,
                    category,
                    color,
                    notes,
                    pre_notes,
                    post_notes,
                },
            )?;
            println!("Updated {} ({})", event.title, event.id);
            Ok(())
        }
        PlannerCommands::Remove { id } => {
            service.remove(&id)?;
            println!("Removed {}", id);
            Ok(())
        }
    }
}

fn run_goals(command: GoalsCommands) -> Result<()> {
    let store = FileStore::discover()?;
    let service = indicator_service(store);

    match command {
        GoalsCommands::List => {
            print!("{}", output::format_indicator_list(&service.load()?));
            Ok(())
        }
        GoalsCommands::Add { name, goal } => {
            let indicator = service.add(&name, goal, Utc::now())?;
            println!("Added {} ({})", indicator.name, indicator.id);
            Ok(())
        }
        GoalsCommands::Set { id, current } => {
            let indicator = service.set_current(&id, current)?;
            println!("{}: {}/{}", indicator.name, indicator.current, indicator.goal);
            Ok(())
        }
        GoalsCommands::Bump { id, by } => {
            let indicator = service.bump(&id, by)?;
            println!("{}: {}/{}", indicator.name, indicator.current, indicator.goal);
            Ok(())
        }
        GoalsCommands::Reset => {
            service.reset_all()?;
            println!("Reset all goals for a new week");
            Ok(())
        }
    }
}

fn run_feed(command: FeedCommands) -> Result<()> {
    let store = FileStore::discover()?;
    let service = feed_service(store);

    match command {
        FeedCommands::List { category } => {
            let category = category
                .map(|s| ContentCategory::from_str(&s).map_err(AmityError::Config))
                .transpose()?;
            let items = service.list(category)?;
            print!("{}", output::format_feed(&items));
            Ok(())
        }
        FeedCommands::Add {
            category,
            text,
            anonymous,
        } => {
            let category = ContentCategory::from_str(&category).map_err(AmityError::Config)?;
            let item = service.add(category, &text, anonymous, Utc::now())?;
            println!("Posted to {} ({})", item.category.label(), item.id);
            Ok(())
        }
        FeedCommands::Vote { id, vote } => {
            let vote = Vote::from_str(&vote).map_err(AmityError::Config)?;
            let item = service.vote(&id, vote)?;
            let held = match item.user_vote {
                Some(Vote::Up) => "up",
                Some(Vote::Down) => "down",
                None => "none",
            };
            println!("+{} / -{} (your vote: {})", item.upvotes, item.downvotes, held);
            Ok(())
        }
    }
}
