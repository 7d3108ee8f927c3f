use std::path::PathBuf;

use crate::error::SelectResult;
use crate::sink::OutputSink;
use crate::strategy::SortStrategy;

/// Binds one strategy and one output sink to a single sorting request.
#[derive(Debug)]
pub struct SortingApplication<S> {
    sink: OutputSink,
    strategy: S,
}

impl<S: SortStrategy> SortingApplication<S> {
    /// Opens the sink at `path`. The strategy is dropped if opening fails.
    pub fn new(path: impl Into<PathBuf>, strategy: S) -> SelectResult<Self> {
        let sink = OutputSink::open(path)?;
        Ok(Self { sink, strategy })
    }

    pub fn sink(&self) -> &OutputSink {
        &self.sink
    }

    pub fn sort_data(&self, data: &mut [i32]) {
        log::debug!("sorting {} values with {}", data.len(), self.strategy.name());
        self.strategy.sort(data);
    }

    /// Writes `data` to the sink, one value per line.
    pub fn record(&mut self, data: &[i32]) -> SelectResult<()> {
        let mut rendered = String::new();
        for value in data {
            rendered.push_str(&value.to_string());
            rendered.push('\n');
        }
        self.sink.write(&rendered)
    }
}
