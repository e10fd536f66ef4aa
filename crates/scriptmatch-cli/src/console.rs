use std::io::{self, Write};

use colored::*;

use scriptmatch_core::model::LinkedPair;
use scriptmatch_core::{Error, Prompt};

/// Console-backed prompt: questions and progress on stdout, answers read
/// line-by-line from stdin.
pub struct ConsolePrompt;

impl Prompt for ConsolePrompt {
    fn show(&mut self, message: &str) {
        println!("{}", message);
    }

    fn ask(&mut self, question: &str) -> Result<String, Error> {
        print!("{}", question);
        io::stdout().flush().map_err(Error::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(Error::Io)?;
        Ok(input)
    }

    fn on_collected(&mut self, media: usize, scripts: usize) {
        println!(
            "Found {} media files and {} scripts to sort through...",
            media, scripts
        );
    }

    fn on_progress(&mut self, current: usize, total: usize, _name: &str) {
        // Carriage return keeps the counter on one line between prompts.
        print!("[{} of {}] Looking...\r", current, total);
        let _ = io::stdout().flush();
    }

    fn on_linked(&mut self, pair: &LinkedPair) {
        println!(
            "{} {} + {}\n",
            "Linked".green(),
            pair.media_link.display(),
            pair.script_link.display()
        );
    }
}
