use sealkit_core::StampParameters;
use sealkit_designer::{render_stamp, RasterSurface};
use tempfile::tempdir;

#[test]
fn test_png_keeps_transparency() {
    let params = StampParameters::default()
        .with_size(120, 120)
        .with_texts("", "");
    let mut surface = RasterSurface::for_params(&params).unwrap();
    render_stamp(&params, &mut surface).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("seal.png");
    surface.save_png(&path).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (120, 120));
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
    assert_eq!(img.get_pixel(60, 60).0, [255, 0, 0, 255]);
}

#[test]
fn test_png_to_missing_directory_fails() {
    let surface = RasterSurface::new(10, 10).unwrap();
    let dir = tempdir().unwrap();
    let err = surface
        .save_png(dir.path().join("missing").join("seal.png"))
        .unwrap_err();
    assert!(matches!(err, sealkit_core::Error::Image(_)));
}
