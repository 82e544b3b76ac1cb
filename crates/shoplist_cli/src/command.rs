//! Line commands for driving a session from stdin.
//!
//! # Responsibility
//! - Parse one input line into a `Command`.
//! - Apply a `Command` to a `Navigator` as the current user and render the
//!   result as text.
//!
//! # Invariants
//! - No business rule lives here; every check is delegated to core.

use shoplist_core::{
    parse_visibility_filter, DetailSession, ItemId, ListId, Navigator, Outcome, UserId,
    VisibilityFilter,
};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NO_LIST_OPEN: &str = "no list is open";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SwitchUser(UserId),
    Lists,
    Filter(VisibilityFilter),
    CreateList(String),
    ToggleArchive(ListId),
    DeleteList(ListId),
    Open(ListId),
    Rename(String),
    AddItem(String),
    ToggleResolved(ItemId),
    RemoveItem(ItemId),
    AddMember(String),
    RemoveMember(String),
    Items,
    Back,
    Leave,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidNumber(String),
    InvalidFilter(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(value) => write!(f, "unknown command: {value}"),
            Self::MissingArgument(name) => write!(f, "missing argument: {name}"),
            Self::InvalidNumber(value) => write!(f, "not a valid id: {value}"),
            Self::InvalidFilter(message) => write!(f, "{message}"),
        }
    }
}

impl Error for CommandError {}

/// Parses one line. Blank lines parse to `None`.
///
/// Name arguments are passed through untrimmed after the first separating
/// space, so `add  x` adds the item ` x`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.trim_start().split_once(' ') {
        Some((verb, rest)) => (verb, rest),
        None => (line.trim(), ""),
    };

    let command = match verb {
        "user" => Command::SwitchUser(parse_id(rest, "user id")?),
        "lists" => Command::Lists,
        "filter" => Command::Filter(
            parse_visibility_filter(rest)
                .map_err(|err| CommandError::InvalidFilter(err.to_string()))?,
        ),
        "create" => Command::CreateList(rest.to_string()),
        "archive" => Command::ToggleArchive(parse_id(rest, "list id")?),
        "delete" => Command::DeleteList(parse_id(rest, "list id")?),
        "open" => Command::Open(parse_id(rest, "list id")?),
        "rename" => Command::Rename(rest.to_string()),
        "add" => Command::AddItem(rest.to_string()),
        "resolve" => Command::ToggleResolved(parse_id(rest, "item id")?),
        "remove" => Command::RemoveItem(parse_id(rest, "item id")?),
        "member+" => Command::AddMember(rest.to_string()),
        "member-" => Command::RemoveMember(rest.to_string()),
        "items" => Command::Items,
        "back" => Command::Back,
        "leave" => Command::Leave,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_id(value: &str, name: &'static str) -> Result<u32, CommandError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CommandError::MissingArgument(name));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| CommandError::InvalidNumber(trimmed.to_string()))
}

/// Applies `command` as the navigator's current user and returns the text
/// to print.
pub fn execute(nav: &mut Navigator, command: Command) -> String {
    let actor = nav.acting_user();
    match command {
        Command::SwitchUser(id) => {
            let outcome = nav.switch_user(id);
            format!("{outcome}; acting as {}", nav.acting_user())
        }
        Command::Lists => render_lists(nav),
        Command::Filter(filter) => {
            match nav.session_mut() {
                Some(session) => session.set_filter(filter),
                None => nav.collection_mut().set_filter(filter),
            }
            format!("filter: {}", filter.as_str())
        }
        Command::CreateList(name) => match nav.collection_mut().create_list(&actor, &name) {
            Outcome::Applied(id) => format!("created list {id}"),
            other => other.to_string(),
        },
        Command::ToggleArchive(id) => nav.collection_mut().toggle_archive(&actor, id).to_string(),
        Command::DeleteList(id) => nav.collection_mut().delete_list(&actor, id).to_string(),
        Command::Open(id) => match nav.open(id) {
            Outcome::Applied(route) => format!("opened {route}"),
            other => other.to_string(),
        },
        Command::Back => format!("back to {}", nav.back()),
        Command::Leave => match nav.leave() {
            Outcome::Applied(route) => format!("left list; back to {route}"),
            other => other.to_string(),
        },
        Command::Items => match nav.session() {
            Some(_) => render_items(nav),
            None => NO_LIST_OPEN.to_string(),
        },
        Command::Quit => "bye".to_string(),
        Command::Rename(name) => on_session(nav, |session| {
            session.rename_list(&actor, &name).to_string()
        }),
        Command::AddItem(name) => on_session(nav, |session| {
            match session.add_item(&actor, &name) {
                Outcome::Applied(id) => format!("added item {id}"),
                other => other.to_string(),
            }
        }),
        Command::ToggleResolved(id) => on_session(nav, |session| {
            session.toggle_resolved(&actor, id).to_string()
        }),
        Command::RemoveItem(id) => on_session(nav, |session| {
            session.remove_item(&actor, id).to_string()
        }),
        Command::AddMember(name) => on_session(nav, |session| {
            session.add_member(&actor, &name).to_string()
        }),
        Command::RemoveMember(name) => on_session(nav, |session| {
            session.remove_member(&actor, &name).to_string()
        }),
    }
}

fn on_session(nav: &mut Navigator, apply: impl FnOnce(&mut DetailSession) -> String) -> String {
    match nav.session_mut() {
        Some(session) => apply(session),
        None => NO_LIST_OPEN.to_string(),
    }
}

fn render_lists(nav: &Navigator) -> String {
    let collection = nav.collection();
    let mut out = format!("[{}] lists:", collection.filter().as_str());
    for list in collection.visible_lists() {
        out.push_str(&format!(
            "\n  {} {} ({} items)",
            list.id,
            list.name,
            list.items.len()
        ));
    }
    out
}

fn render_items(nav: &Navigator) -> String {
    let Some(session) = nav.session() else {
        return String::new();
    };
    let mut out = format!("{} [{}] items:", session.name(), session.filter().as_str());
    for item in session.visible_items() {
        let mark = if item.resolved { "x" } else { " " };
        out.push_str(&format!("\n  [{mark}] {} {}", item.id, item.name));
    }
    out.push_str("\nmembers:");
    for member in session.members() {
        out.push_str(&format!("\n  {member}"));
    }
    out
}
