//! Text formatting for rooms, inventories, help and errors.
//!
//! All user-facing words come from the world's dictionary; the English literals here are
//! only used when a world does not define the entry.

use crate::error::GameError;
use crate::models::dictionary::{Dictionary, ERRORS, HELPTEXT, STRINGS};
use crate::models::item::Item;
use crate::models::room::Room;
use crate::models::world::World;

/// Intro shown when a new game starts.
pub fn welcome(world: &World) -> Vec<String> {
    let dict = &world.dictionary;
    vec![
        dict.format(
            STRINGS,
            "welcome",
            "Welcome %s, to %s.",
            &[world.player.name.as_str(), world.name.as_str()],
        ),
        dict.text(STRINGS, "helpAdvice", "Type 'help' for a list of commands.").to_string(),
        world.name.clone(),
        world.description.clone(),
    ]
}

pub fn prompt(dict: &Dictionary) -> String {
    dict.text(STRINGS, "command", "> ").to_string()
}

/// Room name, description, directions, exits and the visible item tree.
pub fn room_view(room: &Room, dict: &Dictionary) -> String {
    let directions: String = room.exits.iter().map(|e| format!("[{}] ", e.direction)).collect();
    let exits: String = room.exits.iter().map(|e| format!(" [{}]", e.name)).collect();

    format!(
        "{name}\n\n{description}\n\
         {dir_label}{directions}\n\
         {exit_label}{exits}\n\
         {item_label}{items}",
        name = room.name,
        description = room.description,
        dir_label = dict.text(STRINGS, "directions", "Directions: "),
        exit_label = dict.text(STRINGS, "exits", "Exits:"),
        item_label = dict.text(STRINGS, "items", "Objects:"),
        items = item_options(&room.items),
    )
}

/// ` [name [nested] ...]` for every item, descending into open containers.
pub fn item_options(items: &[Item]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(" [");
        out.push_str(&item.name);
        out.push_str(&item_options(item.visible_items()));
        out.push(']');
    }
    out
}

pub fn inventory(world: &World) -> String {
    let dict = &world.dictionary;
    let label = dict.text(STRINGS, "inventory", "Inventory:");
    if world.player.inventory.is_empty() {
        return format!("{label}{}", dict.text(STRINGS, "inventoryEmpty", " (empty)"));
    }
    format!("{label}{}", item_options(&world.player.inventory))
}

/// One line per shortcut, sorted by shortcut, with the command it expands to and its help.
pub fn help(dict: &Dictionary) -> String {
    let mut out = dict.text(STRINGS, "helpHeader", "List of commands:").to_string();
    for (shortcut, command) in dict.sorted_shortcuts() {
        let helptext = dict.text(HELPTEXT, command, "");
        out.push_str(&format!("\n{shortcut}: {command}: {helptext}"));
    }
    out
}

/// Localized text for a failed command.
pub fn error_text(err: &GameError, dict: &Dictionary) -> String {
    let error = |key: &str, fallback: &str, args: &[&str]| dict.format(ERRORS, key, fallback, args);

    match err {
        GameError::NoExit { room, exit } => {
            error("noExit", "%s has no exit '%s'.", &[room.as_str(), exit.as_str()])
        }
        GameError::NoObject { name, room } => {
            error("noObject", "There is no %s in %s.", &[name.as_str(), room.as_str()])
        }
        GameError::NoItem { name, room } => error(
            "noItem",
            "There is no item called %s in %s.",
            &[name.as_str(), room.as_str()],
        ),
        GameError::ItemAlreadyOpen(item) => {
            error("itemOpen", "The %s is already open.", &[item.as_str()])
        }
        GameError::ItemNotOpenable(item) => {
            error("itemNotOpenable", "The %s cannot be opened.", &[item.as_str()])
        }
        GameError::LockedExit(text) | GameError::LockedItem(text) if text.is_empty() => {
            error("locked", "It is locked.", &[])
        }
        GameError::LockedExit(text)
        | GameError::LockedItem(text)
        | GameError::ItemRefused(text) => text.clone(),
        GameError::ItemNotTakeable => error("itemNotTakeable", "You cannot take that.", &[]),
        GameError::ItemNotUseable => error("itemNotUseable", "You cannot use that.", &[]),
        GameError::CannotUseItem { item, target } => error(
            "cannotUseItem",
            "You cannot use the %s on the %s.",
            &[item.as_str(), target.as_str()],
        ),
        GameError::InvalidCommand(input) => {
            error("invalidCommand", "I don't understand '%s'.", &[input.as_str()])
        }
        GameError::SaveFailed { slot, .. } => {
            error("saveFailed", "Unable to save game %s.", &[slot.as_str()])
        }
        GameError::LoadFailed { slot, .. } => {
            error("loadFailed", "Unable to load game %s.", &[slot.as_str()])
        }
    }
}
