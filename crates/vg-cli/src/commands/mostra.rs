use std::path::Path;

use colored::Colorize;

use vg_core::{Ability, GameState};
use vg_engine::{JsonFileStore, StateStore};

pub fn run(dir: &Path, partita: &str) -> Result<(), String> {
    let store = JsonFileStore::new(dir);
    let state = store
        .load(partita)
        .map_err(|e| format!("lettura del salvataggio fallita: {e}"))?
        .ok_or_else(|| format!("nessuna partita salvata con chiave '{partita}'"))?;

    print_state(&state);
    Ok(())
}

fn print_state(state: &GameState) {
    let c = &state.character;

    println!("{}", c.name.bold());
    println!(
        "  PF: {}/10 | Luogo: {} | Turno: {}",
        c.hp, state.location, state.turn
    );
    println!(
        "  Regione: {} | Lingua: {} | Difficoltà: {}",
        state.region, state.language, state.difficulty
    );

    println!("\n{}", "Caratteristiche".bold());
    for ability in [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ] {
        println!(
            "  {} {:>2} ({:+})",
            ability.tag(),
            c.scores.score(ability),
            c.scores.modifier(ability)
        );
    }

    println!("\n{}", "Inventario".bold());
    if c.inventory.is_empty() {
        println!("  (vuoto)");
    } else {
        for item in &c.inventory {
            println!("  - {item}");
        }
    }

    println!("\n{}", "Relazioni".bold());
    if state.relationships.is_empty() {
        println!("  (nessuna)");
    } else {
        for (name, rel) in &state.relationships {
            println!(
                "  - {name} (ruolo: {}, fiducia: {}, ostilità: {})",
                rel.role, rel.trust, rel.hostility
            );
        }
    }

    println!("\n{}", "Eventi".bold());
    if state.events.is_empty() {
        println!("  (nessuno)");
    } else {
        for ev in &state.events {
            println!("  - [{}] {}", ev.kind, ev.description);
        }
    }

    if let Some(last) = state.narrative_history.last() {
        println!("\n{}", "Ultima scena".bold());
        println!("  {last}");
    }
}
