//! Interactive console front end for the creature lab.
//!
//! Thin glue over the library: a menu loop that displays status, forwards
//! choices to the creature engine, and drives the save store. The save root
//! comes from `XENOLAB_SAVE_DIR` (default `saves`) and is passed into the
//! store explicitly.

use std::io::{self, BufRead, Write};

use xenolab::{Creature, EvolutionEvent, LabRng, LightOutcome, SaveStore, Status};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let save_root = std::env::var("XENOLAB_SAVE_DIR").unwrap_or_else(|_| "saves".to_string());
    let store = SaveStore::new(save_root);
    let mut rng = LabRng::from_entropy();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to the Creature Lab!");

    let mut creature = match startup_creature(&store, &mut lines) {
        Some(creature) => creature,
        None => return,
    };

    loop {
        print_status(&creature.status());
        println!("1. Feed | 2. Light | 3. Sound | 4. Next Day");
        println!("5. View Diary | 6. Save Game | 7. Delete Save | 8. Exit");

        let Some(choice) = prompt(&mut lines, "Choice: ") else {
            return;
        };

        match choice.as_str() {
            "1" => {
                creature.feed();
                println!("{} enjoyed the meal!", creature.name());
            }
            "2" => {
                println!("Exposing to light rays...");
                match creature.expose_to_light(&mut rng) {
                    LightOutcome::Mutated { level } => {
                        println!("{} is mutating! Mutation level: {level}", creature.name());
                    }
                    LightOutcome::NoEffect => println!("Nothing happened."),
                }
            }
            "3" => {
                println!("Playing cosmic frequencies...");
                let outcome = creature.play_sound(&mut rng);
                if outcome.mutated {
                    println!("{} reacted strangely... more mutations!", creature.name());
                } else {
                    println!("The creature looks happy.");
                }
            }
            "4" => match creature.advance_day(&mut rng) {
                Some(EvolutionEvent::Teen) => {
                    println!("{} evolved into a TEEN form!", creature.name());
                }
                Some(EvolutionEvent::FinalForm(form)) => {
                    println!("{} mutated into FINAL FORM: {form}!", creature.name());
                }
                None => println!("A day passes..."),
            },
            "5" => print_diary(&creature),
            "6" => save_game(&store, &creature, &mut lines),
            "7" => delete_save(&store, &mut lines),
            "8" => {
                println!("Bye!");
                return;
            }
            _ => println!("Invalid choice."),
        }
    }
}

/// Read one trimmed line after printing a prompt. `None` on EOF.
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, text: &str) -> Option<String> {
    print!("{text}");
    let _ = io::stdout().flush();
    match lines.next() {
        Some(Ok(line)) => Some(line.trim().to_string()),
        _ => None,
    }
}

/// Offer to load a saved creature; fall back to naming a new one.
fn startup_creature(
    store: &SaveStore,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Option<Creature> {
    let choice = prompt(lines, "Do you want to load a saved creature? (y/n): ")?;
    if choice.eq_ignore_ascii_case("y") {
        if let Some(creature) = load_game(store, lines) {
            return Some(creature);
        }
    }

    loop {
        let name = prompt(lines, "Name your creature: ")?;
        if name.is_empty() {
            println!("The name must be non-empty.");
            continue;
        }
        return Some(Creature::new(name));
    }
}

fn print_status(status: &Status) {
    let title = format!(" {}'s Status ", status.name);
    let border = "=".repeat(title.len());
    let form = status
        .final_form
        .map_or_else(|| "N/A".to_string(), |form| form.to_string());

    println!("\n{border}");
    println!("{title}");
    println!("{border}");
    println!("  Stage          : {}", status.stage);
    println!("  Health         : {}/100", status.health);
    println!("  Happiness      : {}/100", status.happiness);
    println!("  Hunger         : {}/100", status.hunger);
    println!("  Mutation Level : {}", status.mutation_level);
    println!("  Final Form     : {form}");
    println!("{border}\n");
}

fn print_diary(creature: &Creature) {
    println!("\n==== Evolution Diary ====");
    for entry in creature.diary().iter() {
        println!("{entry}");
    }
    println!("=========================\n");
}

fn save_game(
    store: &SaveStore,
    creature: &Creature,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) {
    let Some(name) = prompt(lines, "Enter a save file name (e.g., alien001): ") else {
        return;
    };
    if name.is_empty() {
        println!("Save name must be non-empty.");
        return;
    }

    match store.save(&name, creature) {
        Ok(path) => println!("Game saved to {}!", path.display()),
        Err(err) => println!("Error saving: {err}"),
    }
}

/// List saves and load one chosen by number or name.
fn load_game(
    store: &SaveStore,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Option<Creature> {
    let names = match store.list() {
        Ok(names) => names,
        Err(err) => {
            println!("Error listing saves: {err}");
            return None;
        }
    };
    if names.is_empty() {
        println!("No save files found.");
        return None;
    }

    println!("\nAvailable save files:");
    for (i, name) in names.iter().enumerate() {
        println!("{}. {name}", i + 1);
    }

    let choice = prompt(lines, "Enter file number or name to load: ")?;
    let name = match resolve_choice(&choice, &names) {
        Some(name) => name,
        None => {
            println!("Invalid choice.");
            return None;
        }
    };

    match store.load(name) {
        Ok(creature) => {
            println!("Game loaded from {name}!");
            Some(creature)
        }
        Err(err) => {
            println!("Error loading file: {err}");
            None
        }
    }
}

fn delete_save(store: &SaveStore, lines: &mut impl Iterator<Item = io::Result<String>>) {
    let names = match store.list() {
        Ok(names) => names,
        Err(err) => {
            println!("Error listing saves: {err}");
            return;
        }
    };
    if names.is_empty() {
        println!("No save files to delete.");
        return;
    }

    println!("\nAvailable save files:");
    for (i, name) in names.iter().enumerate() {
        println!("{}. {name}", i + 1);
    }

    let Some(choice) = prompt(lines, "Enter the number of the file to delete: ") else {
        return;
    };
    let Some(name) = resolve_choice(&choice, &names) else {
        println!("Invalid choice.");
        return;
    };

    let Some(confirm) = prompt(
        lines,
        &format!("Are you sure you want to delete {name}? (y/n): "),
    ) else {
        return;
    };
    if !confirm.eq_ignore_ascii_case("y") {
        println!("Deletion canceled.");
        return;
    }

    match store.delete(name) {
        Ok(()) => println!("Deleted {name}"),
        Err(err) => println!("Error deleting: {err}"),
    }
}

/// Resolve a 1-based index or an exact save name against the listing.
fn resolve_choice<'a>(choice: &str, names: &'a [String]) -> Option<&'a str> {
    if let Ok(index) = choice.parse::<usize>() {
        return names
            .get(index.checked_sub(1)?)
            .map(String::as_str);
    }
    names
        .iter()
        .find(|name| name.as_str() == choice)
        .map(String::as_str)
}
