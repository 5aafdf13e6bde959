// src/progress.rs

/// Diagnostic hook for the pipeline. Frontends (GUI/CLI) implement this to
/// surface status; the default is silence.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when a pipeline stage completes.
    fn stage(&mut self, _stage: Stage) {}

    /// A table row whose cell count differs from the header count.
    /// `position` is the row's index among all `<tr>` of the table.
    fn row_dropped(&mut self, _position: usize, _cells: usize, _expected: usize) {}

    /// A designated clock cell that did not parse as a number.
    fn value_unparsed(&mut self, _column: &str, _raw: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Fetched,
    Located,
    Headers,
    Rows,
    Normalized,
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Counts what the pipeline silently recovered from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DropCounter {
    pub rows_dropped: usize,
    pub values_unparsed: usize,
    pub stages: Vec<Stage>,
}

impl Progress for DropCounter {
    fn stage(&mut self, stage: Stage) {
        self.stages.push(stage);
    }
    fn row_dropped(&mut self, _position: usize, _cells: usize, _expected: usize) {
        self.rows_dropped += 1;
    }
    fn value_unparsed(&mut self, _column: &str, _raw: &str) {
        self.values_unparsed += 1;
    }
}

/// Prints status lines to stdout.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
}
