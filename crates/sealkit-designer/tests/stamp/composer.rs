use sealkit_core::{StampParameters, StampShape};
use sealkit_designer::{render_stamp, BottomText, DrawCommand, RecordingSurface, StampLayout};

#[test]
fn test_empty_texts_draw_only_border_and_star() {
    let params = StampParameters::default()
        .with_size(100, 100)
        .with_texts("", "");
    let mut surface = RecordingSurface::new();
    render_stamp(&params, &mut surface).unwrap();

    let ops = surface.commands();
    assert_eq!(ops.len(), 2);
    match &ops[0] {
        DrawCommand::StrokeEllipse { center, rx, ry, pen } => {
            assert_eq!((center.x, center.y), (50.0, 50.0));
            assert_eq!((*rx, *ry), (40.0, 40.0));
            assert_eq!(pen.width, 5.0);
        }
        other => panic!("expected border first, got {:?}", other),
    }
    match &ops[1] {
        DrawCommand::FillPolygon { points, .. } => assert_eq!(points.len(), 10),
        other => panic!("expected star second, got {:?}", other),
    }
    assert_eq!(surface.text_draw_count(), 0);
}

#[test]
fn test_default_circle_seal() {
    let params = StampParameters::default().with_texts("广州顺丰速运有限公司", "4401");
    let mut surface = RecordingSurface::new();
    render_stamp(&params, &mut surface).unwrap();

    assert_eq!(surface.text_draw_count(), 14);
    let texts = surface.resolved_texts();
    let top: String = texts[..10].iter().map(|t| t.text.as_str()).collect();
    assert_eq!(top, "广州顺丰速运有限公司");

    // Every glyph anchor sits on the text ring
    for t in &texts {
        let dx = t.anchor.x - 150.0;
        let dy = t.anchor.y - 150.0;
        assert!(((dx * dx + dy * dy).sqrt() - 110.0).abs() < 1e-6);
    }
    // A 240° legend dips just below the horizontal diameter at its ends
    assert!(texts[1..9].iter().all(|t| t.anchor.y < 150.0));
    assert!(texts[10..].iter().all(|t| t.anchor.y > 150.0));
}

#[test]
fn test_oval_seal_uses_caption() {
    let params = StampParameters::for_shape(StampShape::Oval).with_texts("ACME", "合同专用章");
    let layout = StampLayout::compute(&params).unwrap();
    assert_eq!(layout.top.len(), 4);
    assert!(matches!(layout.bottom, BottomText::Caption { .. }));

    let mut surface = RecordingSurface::new();
    layout.draw(&mut surface).unwrap();
    let texts = surface.resolved_texts();
    assert_eq!(texts.len(), 5);
    let caption = &texts[4];
    assert_eq!(caption.text, "合同专用章");
    assert_eq!(caption.rotation_degrees, 0.0);
    assert!((caption.anchor.x - 200.0).abs() < 1e-9);
    assert!((caption.anchor.y - 210.0).abs() < 1e-9);
}

#[test]
fn test_oval_top_text_on_inner_ellipse() {
    let params = StampParameters::for_shape(StampShape::Oval).with_texts("对账专用章", "");
    let mut surface = RecordingSurface::new();
    render_stamp(&params, &mut surface).unwrap();

    let (rx, ry) = (165.0, 105.0);
    for t in surface.resolved_texts() {
        let u = (t.anchor.x - 200.0) / rx;
        let v = (t.anchor.y - 140.0) / ry;
        assert!((u * u + v * v - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_renders_are_deterministic() {
    let params = StampParameters::default().with_texts("电子印章", "123");
    let mut a = RecordingSurface::new();
    let mut b = RecordingSurface::new();
    render_stamp(&params, &mut a).unwrap();
    render_stamp(&params, &mut b).unwrap();
    assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
}

#[test]
fn test_out_of_range_size_still_renders() {
    let params = StampParameters::default().with_size(1200, 60).with_texts("", "");
    let mut surface = RecordingSurface::new();
    assert!(render_stamp(&params, &mut surface).is_ok());
}
