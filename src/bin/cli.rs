// src/bin/cli.rs
use color_eyre::eyre::Result;
use gpu_clocks::{
    config::options::AppOptions,
    pipeline,
    present::{Presenter, TextPresenter},
    progress::{ConsoleProgress, DropCounter, Progress},
};

/// Prints like the GUI binary and also counts what was dropped.
#[derive(Default)]
struct CliProgress {
    counter: DropCounter,
}

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        ConsoleProgress.log(msg);
    }
    fn row_dropped(&mut self, position: usize, cells: usize, expected: usize) {
        self.counter.row_dropped(position, cells, expected);
    }
    fn value_unparsed(&mut self, column: &str, raw: &str) {
        self.counter.value_unparsed(column, raw);
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    gpu_clocks::log::init();
    let opts = AppOptions::default();

    let mut progress = CliProgress::default();
    let dataset = pipeline::run(&opts.scrape, &mut progress)?;

    println!("{}", dataset.preview(opts.display.preview_rows));
    eprintln!(
        "{} rows with a mismatched cell count dropped, {} clock values not numeric",
        progress.counter.rows_dropped, progress.counter.values_unparsed
    );
    println!();

    TextPresenter::new(std::io::stdout().lock())
        .present(dataset)
        .map_err(|e| color_eyre::eyre::eyre!("{e}"))?;
    Ok(())
}
