// src/bin/gui.rs
use gpu_clocks::{
    config::options::AppOptions,
    gui::ChartWindow,
    pipeline,
    present::Presenter,
    progress::ConsoleProgress,
};
use eframe::egui::{IconData, ViewportBuilder};

/// 32×32 icon: three bars of falling height on a transparent background.
fn app_icon() -> IconData {
    const SIZE: u32 = 32;
    let bars: [(u32, u32, [u8; 3]); 3] = [
        (4, 28, [0x00, 0x00, 0xFF]),
        (13, 20, [0x00, 0x80, 0x00]),
        (22, 12, [0x00, 0x00, 0xFF]),
    ];
    let img = image::RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        for (left, height, [r, g, b]) in bars {
            if x >= left && x < left + 7 && y >= SIZE - height - 2 && y < SIZE - 2 {
                return image::Rgba([r, g, b, 0xFF]);
            }
        }
        image::Rgba([0, 0, 0, 0])
    });
    IconData { rgba: img.into_raw(), width: SIZE, height: SIZE }
}

fn main() {
    gpu_clocks::log::init();
    let opts = AppOptions::default();

    let dataset = match pipeline::run(&opts.scrape, &mut ConsoleProgress) {
        Ok(ds) => ds,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    println!("{}", dataset.preview(opts.display.preview_rows));

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(gpu_clocks::config::consts::WINDOW_TITLE)
            .with_inner_size([opts.display.window_w, opts.display.window_h])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = ChartWindow::new(options).present(dataset) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
