use sealkit_core::{StampParameters, StampShape};
use sealkit_designer::{render_stamp, render_svg, RasterSurface, SvgSurface};

#[test]
fn test_svg_is_deterministic() {
    let params = StampParameters::for_shape(StampShape::Oval).with_texts("A&B 公司", "<章>");
    let a = render_svg(&params).unwrap();
    let b = render_svg(&params).unwrap();
    assert_eq!(a, b);
    assert!(a.contains(">&amp;</text>"));
    assert!(a.contains("&lt;章&gt;"));
    assert_eq!(a.matches("<text").count(), 7);
}

#[test]
fn test_svg_without_text_has_no_text_elements() {
    let params = StampParameters::default().with_texts("", "");
    let mut surface = SvgSurface::new(params.width, params.height);
    render_stamp(&params, &mut surface).unwrap();
    let doc = surface.finish();
    assert_eq!(doc.matches("<ellipse").count(), 1);
    assert_eq!(doc.matches("<polygon").count(), 1);
    assert!(!doc.contains("<text"));
}

#[test]
fn test_svg_rejects_like_composer() {
    let params = StampParameters::default().with_size(15, 300);
    assert!(render_svg(&params).unwrap_err().is_invalid_parameter());
}

#[test]
fn test_raster_border_and_star() {
    let params = StampParameters::default()
        .with_size(100, 100)
        .with_texts("", "");
    let mut surface = RasterSurface::for_params(&params).unwrap();
    render_stamp(&params, &mut surface).unwrap();

    // Border ring crosses (50, 10); star covers the center
    assert_eq!(surface.pixel(50, 10), Some([255, 0, 0, 255]));
    assert_eq!(surface.pixel(50, 50), Some([255, 0, 0, 255]));
    // Corners stay transparent
    assert_eq!(surface.pixel(0, 0).map(|p| p[3]), Some(0));
    assert_eq!(surface.pixel(99, 99).map(|p| p[3]), Some(0));
}

#[test]
fn test_raster_is_deterministic() {
    let params = StampParameters::for_shape(StampShape::Oval).with_texts("", "");
    let mut a = RasterSurface::for_params(&params).unwrap();
    let mut b = RasterSurface::for_params(&params).unwrap();
    render_stamp(&params, &mut a).unwrap();
    render_stamp(&params, &mut b).unwrap();
    assert_eq!(a.data(), b.data());
}

#[test]
fn test_raster_text_or_font_unavailable() {
    let params = StampParameters::default().with_texts("SEAL", "");
    let mut surface = RasterSurface::for_params(&params).unwrap();
    match render_stamp(&params, &mut surface) {
        // Some ink must land outside the star and border
        Ok(()) => {
            let inked = (21..80)
                .flat_map(|y| (0..300).map(move |x| (x, y)))
                .filter(|&(x, y)| surface.pixel(x, y).map_or(false, |p| p[3] > 0))
                .count();
            assert!(inked > 0);
        }
        Err(e) => {
            assert!(e.to_string().contains("SimSun"));
            assert!(surface.data().iter().all(|b| *b == 0));
        }
    }
}
