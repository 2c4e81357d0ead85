// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke tests writing PNGs.

use chart_core::{Chart, ChartData, RenderOptions};

fn totals(non_criminal: f64, criminal: f64) -> ChartData {
    ChartData::single(["Non Criminal", "Criminal"], vec![non_criminal, criminal])
}

#[test]
fn render_smoke_png() {
    let chart = Chart::bar(totals(120.0, 45.0));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke_bar.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_all_zero_counts() {
    let chart = Chart::bar(totals(0.0, 0.0));
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let bytes = chart.render_to_png_bytes(&opts).expect("zero counts still render");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn render_line_chart() {
    let data = ChartData::single(
        ["Jan", "Feb", "Mar", "Apr"],
        vec![12.0, 30.0, 7.0, 18.0],
    );
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let bytes = Chart::line(data).render_to_png_bytes(&opts).expect("line render");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn mismatched_series_is_an_error() {
    let data = ChartData::single(["Non Criminal", "Criminal"], vec![1.0]);
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let err = Chart::bar(data).render_to_png_bytes(&opts).unwrap_err();
    assert!(err.to_string().contains("1 values but there are 2 labels"), "{err}");
}
