//! Per-run session state.

/// How many entries the `history` command shows.
pub const HISTORY_DISPLAY: usize = 10;

/// Append-only record of every non-empty input line, in entry order.
#[derive(Debug, Default, Clone)]
pub struct Session {
    history: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, line: impl Into<String>) {
        self.history.push(line.into());
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Most recent entries, oldest first.
    pub fn recent(&self, n: usize) -> &[String] {
        let start = self.history.len().saturating_sub(n);
        &self.history[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_returns_tail_in_order() {
        let mut session = Session::new();
        for i in 0..15 {
            session.record(format!("cmd{i}"));
        }
        let recent = session.recent(HISTORY_DISPLAY);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0], "cmd5");
        assert_eq!(recent[9], "cmd14");
    }

    #[test]
    fn recent_on_short_history_returns_all() {
        let mut session = Session::new();
        session.record("help");
        assert_eq!(session.recent(10), ["help".to_string()]);
    }
}
