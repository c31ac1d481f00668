//! CLI frontend for the Vagante survival adventure engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "vagante",
    about = "Vagante — un'avventura testuale di sopravvivenza tra i vaganti",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Avvia o riprendi una partita interattiva
    Gioca {
        /// Directory dei salvataggi
        #[arg(short, long, default_value = "salvataggi")]
        salvataggio: PathBuf,

        /// Chiave della partita (un salvataggio per chiave)
        #[arg(short, long, default_value = "partita")]
        partita: String,

        /// Nome del personaggio per una nuova partita
        #[arg(long, default_value = "Sopravvissuto")]
        nome: String,

        /// Regione di partenza per una nuova partita
        #[arg(long, default_value = "Italia")]
        regione: String,

        /// Difficoltà per una nuova partita
        #[arg(long, default_value = "normale")]
        difficolta: String,

        /// Seme RNG per partite riproducibili
        #[arg(long, default_value = "42")]
        seme: u64,

        /// Endpoint del modello narrativo (es. http://localhost:11434)
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Mostra lo stato salvato di una partita
    Mostra {
        /// Directory dei salvataggi
        #[arg(short, long, default_value = "salvataggi")]
        salvataggio: PathBuf,

        /// Chiave della partita
        #[arg(short, long, default_value = "partita")]
        partita: String,
    },

    /// Cancella una partita salvata
    Azzera {
        /// Directory dei salvataggi
        #[arg(short, long, default_value = "salvataggi")]
        salvataggio: PathBuf,

        /// Chiave della partita
        #[arg(short, long, default_value = "partita")]
        partita: String,

        /// Non chiedere conferma
        #[arg(long)]
        forza: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Gioca {
            salvataggio,
            partita,
            nome,
            regione,
            difficolta,
            seme,
            endpoint,
        } => commands::gioca::run(
            &salvataggio,
            &partita,
            &nome,
            &regione,
            &difficolta,
            seme,
            endpoint.as_deref(),
        ),
        Commands::Mostra {
            salvataggio,
            partita,
        } => commands::mostra::run(&salvataggio, &partita),
        Commands::Azzera {
            salvataggio,
            partita,
            forza,
        } => commands::azzera::run(&salvataggio, &partita, forza),
    };

    if let Err(e) = result {
        eprintln!("errore: {e}");
        process::exit(1);
    }
}
