use std::io::{self, BufRead, Write};
use std::path::Path;

use vg_engine::JsonFileStore;

pub fn run(dir: &Path, partita: &str, forza: bool) -> Result<(), String> {
    let store = JsonFileStore::new(dir);

    if !forza {
        print!("Cancellare la partita '{partita}'? [s/N] ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .map_err(|e| e.to_string())?;
        let answer = answer.trim().to_lowercase();
        if answer != "s" && answer != "si" && answer != "sì" {
            println!("Operazione annullata.");
            return Ok(());
        }
    }

    let deleted = store
        .delete(partita)
        .map_err(|e| format!("cancellazione fallita: {e}"))?;
    if deleted {
        println!("Partita '{partita}' cancellata.");
        Ok(())
    } else {
        Err(format!("nessuna partita salvata con chiave '{partita}'"))
    }
}
