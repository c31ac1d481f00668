use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use vg_engine::{GameSession, JsonFileStore, SessionConfig};
use vg_narrative::{Narrator, NarratorConfig};

pub fn run(
    dir: &Path,
    partita: &str,
    nome: &str,
    regione: &str,
    difficolta: &str,
    seme: u64,
    endpoint: Option<&str>,
) -> Result<(), String> {
    let store = JsonFileStore::new(dir);

    let mut narrator_config = NarratorConfig::default().with_seed(seme);
    if let Some(endpoint) = endpoint {
        narrator_config = narrator_config.with_endpoint(endpoint);
    }
    let narrator = Narrator::detect(&narrator_config);
    let model_backed = narrator.is_model_backed();

    let config = SessionConfig::default()
        .with_session_key(partita)
        .with_player_name(nome)
        .with_region(regione)
        .with_difficulty(difficolta)
        .with_seed(seme);

    let (mut session, opening) = GameSession::load_or_create(store, narrator, config)
        .map_err(|e| format!("impossibile avviare la partita: {e}"))?;

    println!("  {} Vagante", "Benvenuto in".bold());
    if !model_backed {
        println!("  Narratore: modalità modello non disponibile, uso le descrizioni base.");
    }
    println!("  Scrivi 'aiuto' per i comandi, 'esci' per uscire.\n");
    println!("{opening}\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!(
            "[{} | Turno {}] > ",
            session.state().location,
            session.state().turn
        );
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if ["esci", "quit", "exit"]
            .iter()
            .any(|v| input.eq_ignore_ascii_case(v))
        {
            println!("Alla prossima.");
            break;
        }

        // Only persistence failures come back as errors; they end the
        // session rather than risk playing on top of an unsaved state.
        let output = session
            .process(input)
            .map_err(|e| format!("salvataggio fallito: {e}"))?;
        println!("{output}\n");
    }

    Ok(())
}
