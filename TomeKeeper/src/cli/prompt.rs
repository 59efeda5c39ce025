//! Interactive identity prompt

use console::{Term, style};

use crate::error::{Error, Result};
use crate::reconcile::{DecisionPort, IdentityPrompt};

/// Asks the operator on the terminal
///
/// Lists "None" and every candidate as a numbered menu; Enter accepts the
/// preselected option. Refuses to answer when stderr is not a terminal.
pub struct TerminalPrompt {
    term: Term,
}

impl TerminalPrompt {
    #[must_use]
    pub fn new() -> Self {
        Self::with_term(Term::stderr())
    }

    #[must_use]
    pub fn with_term(term: Term) -> Self {
        Self { term }
    }

    fn render(&self, prompt: &IdentityPrompt) -> std::io::Result<()> {
        self.term.write_line("")?;
        self.term.write_line(&format!(
            "Select gameId attribute for {}",
            style(&prompt.ability).green()
        ))?;
        self.term
            .write_line(&style(&prompt.description).yellow().to_string())?;

        let none_marker = if prompt.default == 0 { ">" } else { " " };
        self.term.write_line(&format!("{none_marker} 0) None"))?;
        for (idx, candidate) in prompt.candidates.iter().enumerate() {
            let marker = if prompt.default == idx + 1 { ">" } else { " " };
            self.term.write_line(&format!(
                "{marker} {}) (CID: {}) {}: {}",
                idx + 1,
                candidate.career_id,
                style(candidate.ability_id).red(),
                candidate.description
            ))?;
        }
        Ok(())
    }

    fn read_choice(&self, prompt: &IdentityPrompt) -> std::io::Result<usize> {
        let last = prompt.candidates.len();
        loop {
            self.term
                .write_str(&format!("Choice [0-{last}, Enter = {}]: ", prompt.default))?;
            let line = self.term.read_line()?;
            match parse_choice(&line, prompt) {
                Some(choice) => return Ok(choice),
                None => self
                    .term
                    .write_line(&style(format!("Enter a number from 0 to {last}")).red().to_string())?,
            }
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

/// Menu index for an input line; blank selects the default
fn parse_choice(line: &str, prompt: &IdentityPrompt) -> Option<usize> {
    let line = line.trim();
    if line.is_empty() {
        return Some(prompt.default);
    }
    line.parse::<usize>()
        .ok()
        .filter(|choice| *choice <= prompt.candidates.len())
}

impl DecisionPort for TerminalPrompt {
    fn choose(&mut self, prompt: &IdentityPrompt) -> Result<Option<u32>> {
        if !self.term.is_term() {
            return Err(Error::Prompt(format!(
                "no interactive terminal to resolve {}; rerun with --no-prompt",
                prompt.ability
            )));
        }
        self.render(prompt)
            .and_then(|()| self.read_choice(prompt))
            .map(|choice| prompt.option_id(choice))
            .map_err(|e| Error::Prompt(e.to_string()))
    }
}
