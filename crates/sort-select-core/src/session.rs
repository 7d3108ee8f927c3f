use std::path::PathBuf;

use crate::diagnostics::Diagnostics;
use crate::error::{SelectError, SelectResult};
use crate::selector::parse_selector;
use crate::shell::SortingApplication;
use crate::strategy::{SortStrategy, Strategy};

pub const PROMPT: &str = "Choose sorting strategy (B for Bubble Sort, S for Selection Sort): ";
pub const INVALID_CHOICE: &str = "Invalid choice. Exiting...";
pub const SORTED_HEADER: &str = "Sorted array:";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOptions {
    pub output: PathBuf,
    /// Write the sorted values to the output sink as well as reporting them.
    pub persist: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from("data.txt"),
            persist: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortOutcome {
    pub strategy: Strategy,
    pub sorted: Vec<i32>,
    pub persisted: bool,
}

/// Owns the sequence across commit events and reacts to each one.
#[derive(Debug)]
pub struct Session<D> {
    options: SessionOptions,
    sequence: Vec<i32>,
    diagnostics: D,
}

impl<D: Diagnostics> Session<D> {
    pub fn new(options: SessionOptions, sequence: Vec<i32>, diagnostics: D) -> Self {
        Self {
            options,
            sequence,
            diagnostics,
        }
    }

    pub fn sequence(&self) -> &[i32] {
        &self.sequence
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> D {
        self.diagnostics
    }

    pub fn prompt(&mut self) -> SelectResult<()> {
        self.diagnostics.emit(PROMPT)
    }

    /// Handles one commit event.
    ///
    /// Recoverable failures are reported on the diagnostics channel and
    /// returned; the sequence is only mutated once the sink has opened.
    pub fn handle_commit(&mut self, input: &str) -> SelectResult<SortOutcome> {
        let strategy = match parse_selector(input) {
            Ok(strategy) => strategy,
            Err(err) => {
                log::info!("rejected selector input {input:?}");
                self.diagnostics.emit(INVALID_CHOICE)?;
                return Err(err);
            }
        };
        log::info!("selected {}", strategy.name());

        let mut app = match SortingApplication::new(&self.options.output, strategy) {
            Ok(app) => app,
            Err(err) => {
                self.report_exception(&err)?;
                return Err(err);
            }
        };

        app.sort_data(&mut self.sequence);

        if self.options.persist {
            if let Err(err) = app.record(&self.sequence) {
                self.report_exception(&err)?;
                return Err(err);
            }
        }
        drop(app);

        self.diagnostics.emit(SORTED_HEADER)?;
        for value in &self.sequence {
            self.diagnostics.emit(&value.to_string())?;
        }

        Ok(SortOutcome {
            strategy,
            sorted: self.sequence.clone(),
            persisted: self.options.persist,
        })
    }

    fn report_exception(&mut self, err: &SelectError) -> SelectResult<()> {
        log::debug!("commit failed: {err}");
        self.diagnostics.emit(&format!("Exception found: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn prompt_is_emitted_verbatim() {
        let mut session = Session::new(SessionOptions::default(), vec![], Vec::<String>::new());
        session.prompt().unwrap();
        assert_eq!(session.diagnostics(), &vec![PROMPT.to_string()]);
    }

    #[test]
    fn repeated_commits_resort_the_same_sequence() {
        let dir = tempdir().unwrap();
        let options = SessionOptions {
            output: dir.path().join("data.txt"),
            persist: false,
        };
        let mut session = Session::new(options, vec![3, 1, 2], Vec::<String>::new());

        session.handle_commit("B").unwrap();
        let second = session.handle_commit("S").unwrap();

        assert_eq!(second.strategy, Strategy::Selection);
        assert_eq!(second.sorted, vec![1, 2, 3]);
        assert_eq!(session.diagnostics().len(), 8);
    }
}
