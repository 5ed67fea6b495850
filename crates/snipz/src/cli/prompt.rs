use console::Term;
use snipzapp::interaction::Interaction;

/// Asks on stderr, reads from the terminal. Without a terminal every
/// confirmation is declined and every prompt cancelled.
pub struct TerminalInteraction {
    term: Term,
}

impl TerminalInteraction {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    )
}

impl Interaction for TerminalInteraction {
    fn confirm(&mut self, message: &str) -> bool {
        if !self.term.is_term() {
            return false;
        }
        if self.term.write_str(&format!("{} [y/N] ", message)).is_err() {
            return false;
        }
        self.term
            .read_line()
            .map(|answer| is_yes(&answer))
            .unwrap_or(false)
    }

    fn prompt(&mut self, title: &str, message: &str, default: &str) -> Option<String> {
        if !self.term.is_term() {
            return None;
        }
        self.term.write_line(title).ok()?;
        self.term
            .write_str(&format!("{} [{}]: ", message, default))
            .ok()?;
        let answer = self.term.read_line().ok()?;
        let answer = answer.trim();
        if answer.is_empty() {
            Some(default.to_string())
        } else {
            Some(answer.to_string())
        }
    }
}
