//! Prompt builders for every narrated situation.
//!
//! The prompts are Italian and carry the game's tone (bleak, wandering-dead
//! survival). They are plain strings: the narrator decides whether a model
//! or a template answers them.

/// Opening scene for a brand-new game.
pub fn intro(name: &str, region: &str) -> String {
    format!(
        "Ti chiami {name} e ti risvegli in una zona di {region}. \
         Descrivi l'ambiente circostante invaso da vaganti, usando toni cupi."
    )
}

/// Environment description for the current location (`guarda`).
pub fn look(location: &str) -> String {
    format!(
        "Sei in {location}. Descrivi l'ambiente circostante con toni cupi e \
         minacciosi, facendo riferimento ai vaganti presenti."
    )
}

/// Scene for moving toward a direction (`muovi`).
pub fn movement(direction: &str) -> String {
    format!(
        "Il personaggio si muove verso {direction}. Descrivi cosa vede nella \
         nuova area in modo inquietante."
    )
}

/// Dialogue attempt when the player does not speak the local language.
pub fn talk_barrier(name: &str, language: &str) -> String {
    format!(
        "Stai tentando di parlare con {name}, ma parli {language} e lui/lei no. \
         Descrivi la scena con evidenti incomprensioni linguistiche."
    )
}

/// Dialogue with a hostile villain.
pub fn talk_hostile(name: &str, personality: &str) -> String {
    format!(
        "Dialogo teso con {name}, un {personality}. Il personaggio è \
         diffidente e ostile, potresti subire minacce."
    )
}

/// Cooperative or neutral dialogue.
pub fn talk_neutral(name: &str, personality: &str) -> String {
    format!(
        "Conversazione con {name}, {personality}. Mostra come cambia il suo \
         atteggiamento in base alla fiducia attuale."
    )
}

/// Free-form continuation for input that matched no command.
pub fn free_form(location: &str, input: &str) -> String {
    format!(
        "Sei in {location}. L'utente dice: '{input}'. Continua la narrazione \
         in modo realistico e cupo, reagendo a ciò che ha detto l'utente e \
         descrivendo cosa accade nei dintorni, inclusi eventuali vaganti o \
         personaggi."
    )
}
