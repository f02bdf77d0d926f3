#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use slide_deck::DeckError;
use slide_deck::charts::layout::build_chart_frame;
use slide_deck::charts::{
    ChartBackend, FrameChartBackend, newspaper_chart_spec, social_media_chart_spec,
};
use slide_deck::core::{ChartTargetId, Viewport};
use slide_deck::render::{CairoContextRenderer, CairoRenderer};

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, DeckError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_doughnut_slices_and_legend() {
    let renderer = CairoRenderer::new(800, 400).expect("renderer");
    let mut backend = FrameChartBackend::new(renderer, Viewport::new(800, 400)).expect("backend");
    backend
        .create_chart(
            &ChartTargetId::new("newspaperChart"),
            &newspaper_chart_spec().expect("spec"),
        )
        .expect("create");

    let stats = backend.renderer().last_stats();
    assert_eq!(stats.arcs_drawn, 5);
    assert_eq!(stats.rects_drawn, 5);
    assert_eq!(stats.texts_drawn, 5);

    let mut png = Vec::new();
    backend.renderer().write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let mut renderer = CairoRenderer::new(600, 320).expect("renderer");
    let frame = build_chart_frame(
        &social_media_chart_spec().expect("spec"),
        Viewport::new(600, 320),
    )
    .expect("frame");

    let surface = ImageSurface::create(Format::ARgb32, 600, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    renderer
        .render_on_cairo_context(&context, &frame)
        .expect("render on context");

    let stats = renderer.last_stats();
    assert_eq!(stats.rects_drawn, 6);
    assert_eq!(stats.lines_drawn, frame.lines.len());
}
