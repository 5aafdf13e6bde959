// src/pipeline.rs
//
// fetch → locate → headers → rows → normalize.
// Each stage hands its output by value to the next; the first fatal
// error stops the chain and nothing after it runs.

use scraper::Html;

use crate::{
    config::options::ScrapeOptions,
    core::net::{HttpSource, PageSource, RawPage},
    data::{Dataset, RawTable},
    error::Result,
    normalize,
    progress::{Progress, Stage},
    specs::gpu_table,
};

/// Fetch the configured page over HTTP and run it through the pipeline.
pub fn run(opts: &ScrapeOptions, progress: &mut dyn Progress) -> Result<Dataset> {
    let source = HttpSource::new(opts)?;
    run_with(&source, opts, progress)
}

/// Same as `run`, with the page coming from any `PageSource`.
pub fn run_with(
    source: &dyn PageSource,
    opts: &ScrapeOptions,
    progress: &mut dyn Progress,
) -> Result<Dataset> {
    let result = source.fetch(&opts.url).and_then(|page| {
        progress.stage(Stage::Fetched);
        extract(page, progress)
    });
    if let Err(e) = &result {
        loge!("pipeline stopped: {e}");
    }
    progress.finish();
    result
}

/// Everything after the network: markup in, normalized table out.
pub fn extract(page: RawPage, progress: &mut dyn Progress) -> Result<Dataset> {
    let table = extract_table(&page.body, progress)?;
    let ds = normalize::normalize(table, progress)?;
    progress.stage(Stage::Normalized);
    Ok(ds)
}

/// Locate the table and pull headers and shape-checked rows out of `markup`.
pub fn extract_table(markup: &str, progress: &mut dyn Progress) -> Result<RawTable> {
    let doc = Html::parse_document(markup);

    let handle = gpu_table::locate_table(&doc)?;
    progress.stage(Stage::Located);

    let headers = gpu_table::extract_headers(handle)?;
    progress.stage(Stage::Headers);
    progress.log(&format!("Extracted Headers: {headers:?}"));

    let rows = gpu_table::extract_rows(handle, &headers, progress);
    progress.stage(Stage::Rows);

    let table = RawTable::new(headers, rows);
    logf!(rows = table.row_count(), columns = table.header_count(), "extracted GPU table");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use crate::progress::DropCounter;

    struct Fixed(u16, &'static str);

    impl PageSource for Fixed {
        fn fetch(&self, url: &str) -> Result<RawPage> {
            crate::core::net::check_status(self.0)?;
            Ok(RawPage { url: s!(url), status: self.0, body: s!(self.1) })
        }
    }

    const PAGE: &str = r#"
        <div id="list" class="table-wrapper"><table class="processors">
          <thead class="colheader"><tr>
            <th>Product Name</th><th>Released</th><th>GPU clock</th><th>Memory clock</th>
          </tr></thead>
          <tr><td><a href="/x">RX 6400</a></td><td>Jan 2022</td><td>1923 MHz</td><td>2000 MHz</td></tr>
          <tr><td><a href="/y">Arc A770</a></td><td>Oct 2022</td><td>2100 MHz</td><td>2000 MHz</td></tr>
          <tr><td>Mystery</td><td>Unknown</td><td>N/A</td><td>N/A</td></tr>
        </table></div>"#;

    #[test]
    fn runs_all_stages_in_order() {
        let mut counter = DropCounter::default();
        let ds = run_with(&Fixed(200, PAGE), &ScrapeOptions::default(), &mut counter).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.product_name(0), "Arc A770");
        assert_eq!(ds.product_name(1), "RX 6400");
        assert_eq!(
            counter.stages,
            vec![Stage::Fetched, Stage::Located, Stage::Headers, Stage::Rows, Stage::Normalized]
        );
        assert_eq!(counter.values_unparsed, 2);
    }

    #[test]
    fn fetch_failure_stops_before_parsing() {
        let mut counter = DropCounter::default();
        let res = run_with(&Fixed(404, PAGE), &ScrapeOptions::default(), &mut counter);
        assert!(matches!(res, Err(PipelineError::Fetch { status: 404 })));
        assert!(counter.stages.is_empty());
    }

    #[test]
    fn structure_error_stops_after_fetch() {
        let mut counter = DropCounter::default();
        let res = run_with(&Fixed(200, "<p>maintenance</p>"), &ScrapeOptions::default(), &mut counter);
        assert!(matches!(res, Err(PipelineError::StructureNotFound(_))));
        assert_eq!(counter.stages, vec![Stage::Fetched]);
    }
}
