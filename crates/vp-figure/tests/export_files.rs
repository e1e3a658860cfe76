use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;
use vp_data::read_csv;
use vp_figure::*;

fn out_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("vp_figure_export_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    let _ = std::fs::remove_file(&path);
    path
}

fn full_figure() -> Axes {
    let ds = read_csv("cat,val\nx,1\nx,3\ny,5\n".as_bytes()).unwrap();
    let mut axes = Axes::new();
    let mut rng = StdRng::seed_from_u64(3);
    violinplot(&mut axes, &ds, "cat", "val", Palette::Pastel).unwrap();
    stripplot(&mut axes, &ds, "cat", "val", &mut rng).unwrap();
    boxplot(&mut axes, &ds, "cat", "val").unwrap();
    axes.set_title("violin plot");
    axes.set_xlabel("cat");
    axes.set_ylabel("val");
    axes
}

#[test]
fn png_export_writes_a_file() {
    let path = out_path("figure.png");
    save_figure(&full_figure(), &path, &ExportSettings::default()).unwrap();
    let len = std::fs::metadata(&path).unwrap().len();
    assert!(len > 0);
}

#[test]
fn jpeg_export_writes_a_file() {
    let path = out_path("figure.jpg");
    save_figure(&full_figure(), &path, &ExportSettings::default()).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn svg_export_is_vector_markup() {
    let path = out_path("figure.svg");
    save_figure(&full_figure(), &path, &ExportSettings::default()).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("<svg"));
    assert!(text.contains("violin plot"));
}

#[test]
fn gridlines_can_be_enabled() {
    let path = out_path("grid.svg");
    let mut settings = ExportSettings::default();
    settings.style.show_grid = true;
    save_figure(&full_figure(), &path, &settings).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn cleared_axes_still_export() {
    let path = out_path("empty.png");
    let mut axes = Axes::with_placeholder("Plot Area");
    axes.clear();
    save_figure(&axes, &path, &ExportSettings::default()).unwrap();
    assert!(path.exists());
}

#[test]
fn pdf_export_writes_a_pdf_document() {
    let path = out_path("figure.pdf");
    save_figure(&full_figure(), &path, &ExportSettings::default()).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.len() > 4);
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn unknown_extension_is_rejected_without_writing() {
    let path = out_path("figure.tiff");
    let err = save_figure(&full_figure(), &path, &ExportSettings::default()).unwrap_err();
    assert!(matches!(err, ExportError::UnsupportedFormat { .. }));
    assert!(!path.exists());
}

#[test]
fn missing_directory_is_a_draw_error() {
    let path = std::env::temp_dir()
        .join("vp_figure_no_such_dir")
        .join("nested")
        .join("figure.png");
    let _ = std::fs::remove_dir_all(std::env::temp_dir().join("vp_figure_no_such_dir"));
    let err = save_figure(&full_figure(), &path, &ExportSettings::default()).unwrap_err();
    assert!(matches!(err, ExportError::Draw(_)));
}
