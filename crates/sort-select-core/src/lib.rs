pub mod diagnostics;
pub mod error;
pub mod selector;
pub mod session;
pub mod shell;
pub mod sink;
pub mod strategy;

pub use diagnostics::{Diagnostics, WriterDiagnostics};
pub use error::{ExitCode, SelectError, SelectResult};
pub use selector::parse_selector;
pub use session::{Session, SessionOptions, SortOutcome};
pub use shell::SortingApplication;
pub use sink::OutputSink;
pub use strategy::{BubbleSort, SelectionSort, SortStrategy, Strategy};
