mod common;

use common::{assert_png_dimensions, TestAppBuilder};
use owlwing::{
    rendering::{DrawCommand, RasterRenderer},
    views::{render_panel, Study, Tab},
};
use pretty_assertions::assert_eq;

#[test]
fn test_repaint_only_on_change() {
    let mut app = TestAppBuilder::new().build();
    assert_eq!(app.frame().generation, 1);

    app.run_frame();
    app.select_tab(Tab::Airfoil);
    assert_eq!(app.frame().generation, 1);

    app.select_tab(Tab::LiftDrag);
    assert_eq!(app.frame().generation, 2);

    app.select_angle(6.0);
    assert_eq!(app.frame().generation, 2);

    app.select_angle(7.5);
    assert_eq!(app.frame().generation, 3);
}

#[test]
fn test_every_repaint_starts_with_clear() {
    let mut app = TestAppBuilder::new().build();
    for tab in Tab::ALL {
        app.select_tab(tab);
        assert_eq!(app.panel().scene.commands.first(), Some(&DrawCommand::Clear));
    }
}

#[test]
fn test_same_state_renders_identically() {
    let study = Study::default();
    let raster = RasterRenderer::new(1.0);
    for tab in Tab::ALL {
        let first = render_panel(&study, tab, 4.5);
        let second = render_panel(&study, tab, 4.5);
        assert_eq!(first, second);

        let a = raster.render(&first.scene).unwrap();
        let b = raster.render(&second.scene).unwrap();
        assert!(a.data() == b.data(), "pixels differ for {:?}", tab);
    }
}

#[test]
fn test_returning_to_a_state_restores_the_frame() {
    let mut app = TestAppBuilder::new().with_tab(Tab::Separation).build();
    app.select_angle(3.0);
    let before = (app.panel().clone(), app.frame().png.clone());

    app.select_tab(Tab::Acoustic);
    app.select_tab(Tab::Separation);
    let after = (app.panel().clone(), app.frame().png.clone());

    assert_eq!(before.0, after.0);
    assert!(before.1 == after.1);
}

#[test]
fn test_frame_scaled_by_pixel_density() {
    let app = TestAppBuilder::new()
        .with_tab(Tab::Acoustic)
        .with_pixel_density(2.0)
        .build();
    assert_png_dimensions(&app.frame().png, 1000, 900);
}

#[test]
fn test_failed_raster_keeps_panel_in_step_with_tab() {
    // Wider than any pixmap tiny-skia can allocate
    let mut app = TestAppBuilder::new().with_pixel_density(2.0e6).build();
    assert_eq!(app.panel().tab, Tab::Airfoil);
    assert!(app.frame().png.is_empty());

    app.select_tab(Tab::LiftDrag);
    assert_eq!(app.tab(), Tab::LiftDrag);
    assert_eq!(app.panel().tab, Tab::LiftDrag);
    assert_eq!(app.panel().title, "Lift-to-Drag Ratio Comparison");
    assert!(app.frame().png.is_empty());
}
