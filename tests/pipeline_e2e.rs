// tests/pipeline_e2e.rs
use gpu_clocks::{
    config::options::ScrapeOptions,
    core::net::{PageSource, RawPage},
    data::ClockColumn,
    pipeline,
    progress::{DropCounter, NullProgress, Stage},
    PipelineError,
};
use pretty_assertions::assert_eq;

const HEADERS: [&str; 8] = [
    "Product Name", "GPU Chip", "Released", "Bus", "Memory",
    "GPU clock", "Memory clock", "Shaders / TMUs / ROPs",
];

fn fixture() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/gpu_specs.html"))
        .unwrap()
}

fn page_with(rows: &[[&str; 8]]) -> String {
    let th: String = HEADERS.iter().map(|h| format!("<th>{h}</th>")).collect();
    let trs: String = rows
        .iter()
        .map(|r| {
            let tds: String = r.iter().map(|c| format!("<td>{c}</td>")).collect();
            format!("<tr>{tds}</tr>")
        })
        .collect();
    format!(
        r#"<html><body><div id="list" class="table-wrapper"><table class="processors">
           <thead class="colheader"><tr>{th}</tr></thead>{trs}
           </table></div></body></html>"#
    )
}

fn raw(body: String) -> RawPage {
    RawPage { url: "http://fixture/".into(), status: 200, body }
}

#[test]
fn two_row_scenario_sorted_by_gpu_clock() {
    let body = page_with(&[
        ["RTX 4060", "AD107", "2023", "PCIe 4.0 x8", "8 GB", "1830 MHz", "1125 MHz", "3072/96/48"],
        ["RTX 4090", "AD102", "2022", "PCIe 4.0 x16", "24 GB", "2235 MHz", "1313 MHz", "16384/512/176"],
    ]);
    let ds = pipeline::extract(raw(body), &mut NullProgress).unwrap();

    assert_eq!(ds.headers, HEADERS.to_vec());
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.product_name(0), "RTX 4090");
    assert_eq!(ds.product_name(1), "RTX 4060");
    assert_eq!(ds.rows[0].gpu_clock, 2235.0);
    assert_eq!(ds.rows[1].gpu_clock, 1830.0);
    assert_eq!(ds.rows[0].memory_clock, 1313.0);
    assert_eq!(ds.rows[1].memory_clock, 1125.0);
    assert_eq!(ds.text(0, "GPU Chip"), Some("AD102"));
}

#[test]
fn fixture_page_end_to_end() {
    let mut counter = DropCounter::default();
    let ds = pipeline::extract(raw(fixture()), &mut counter).unwrap();

    let names: Vec<&str> = (0..ds.len()).map(|i| ds.product_name(i)).collect();
    // RTX 4060 and RX 7600 tie at 1830 MHz and keep page order
    assert_eq!(names, vec!["RTX 4090", "RTX 4060", "RX 7600"]);
    assert_eq!(ds.text(0, "GPU Chip"), Some("AD102"));

    // shape, non-null and sort invariants
    assert!(ds.rows.iter().all(|r| r.cells.len() == ds.headers.len()));
    assert!(ds.rows.iter().all(|r| r.gpu_clock.is_finite() && r.memory_clock.is_finite()));
    assert!(ds.rows.windows(2).all(|w| w[0].gpu_clock >= w[1].gpu_clock));

    // sponsored row dropped for shape; Arc A310 and Radeon 780M for clocks
    assert_eq!(counter.rows_dropped, 1);
    assert_eq!(counter.values_unparsed, 2);
    assert_eq!(ds.max(ClockColumn::Memory), 2250.0);
}

#[test]
fn preview_prints_first_rows() {
    let ds = pipeline::extract(raw(fixture()), &mut NullProgress).unwrap();
    let p = ds.preview(2);
    assert!(p.contains("RTX 4090"));
    assert!(p.contains("RTX 4060"));
    assert!(!p.contains("RX 7600"));
    assert!(p.ends_with("[3 rows x 8 columns]"));
}

#[test]
fn missing_memory_clock_column_is_fatal() {
    let body = r#"<div id="list" class="table-wrapper"><table class="processors">
        <thead class="colheader"><tr><th>Product Name</th><th>GPU clock</th></tr></thead>
        <tr><td>RTX 4090</td><td>2235 MHz</td></tr>
        </table></div>"#;
    match pipeline::extract(raw(body.into()), &mut NullProgress) {
        Err(PipelineError::SchemaMismatch(col)) => assert_eq!(col, "Memory clock"),
        other => panic!("unexpected {other:?}"),
    }
}

struct NotFound;

impl PageSource for NotFound {
    fn fetch(&self, _url: &str) -> gpu_clocks::error::Result<RawPage> {
        Err(PipelineError::Fetch { status: 404 })
    }
}

#[test]
fn fetch_404_produces_no_dataset() {
    let mut counter = DropCounter::default();
    let res = pipeline::run_with(&NotFound, &ScrapeOptions::default(), &mut counter);
    assert!(matches!(res, Err(PipelineError::Fetch { status: 404 })));
    assert_eq!(counter.stages, Vec::<Stage>::new());
}
