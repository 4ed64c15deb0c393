use super::*;
use crate::draw::{BLACK, BLUE, DrawCall, FREEHAND_LINE_WIDTH, GREEN, RED, RecordingContext, Shape, WHITE};
use crate::input::{Mode, MouseButton, SurfaceCommand};

fn create_test_surface() -> DrawingSurface {
    DrawingSurface::with_seed(SurfaceSettings::default(), 42)
}

fn draw_stroke(surface: &mut DrawingSurface, points: &[(i32, i32)]) {
    let (first, rest) = points.split_first().expect("stroke needs points");
    let (last, moves) = rest.split_last().expect("stroke needs a release point");
    surface.on_mouse_press(MouseButton::Left, first.0, first.1);
    for &(x, y) in moves {
        surface.on_mouse_motion(x, y);
    }
    surface.on_mouse_release(MouseButton::Left, last.0, last.1);
}

#[test]
fn test_defaults() {
    let surface = create_test_surface();
    assert_eq!(surface.mode(), Mode::Draw);
    assert_eq!(surface.current_color(), BLACK);
    assert_eq!(surface.erase_color(), WHITE);
    assert_eq!(surface.shape_size(), DEFAULT_SHAPE_SIZE);
    assert!(surface.shapes().is_empty());
    assert!(surface.in_progress().is_none());
}

#[test]
fn test_mode_setters_are_mutually_exclusive() {
    let setters: [(fn(&mut DrawingSurface), Mode); 5] = [
        (|s| s.set_color(RED), Mode::Draw),
        (DrawingSurface::enable_rainbow, Mode::Rainbow),
        (DrawingSurface::enable_eraser, Mode::Eraser),
        (DrawingSurface::enable_stamp_circle, Mode::StampCircle),
        (DrawingSurface::enable_stamp_square, Mode::StampSquare),
    ];

    // Every ordered pair, including a setter followed by itself.
    for (first, first_mode) in setters {
        for (second, second_mode) in setters {
            let mut surface = create_test_surface();
            first(&mut surface);
            assert_eq!(surface.mode(), first_mode);
            second(&mut surface);
            assert_eq!(
                surface.mode(),
                second_mode,
                "{} then {}",
                first_mode.label(),
                second_mode.label()
            );
        }
    }

    // One long chain through every transition on a single surface.
    let mut surface = create_test_surface();
    for (first, _) in setters {
        for (second, second_mode) in setters {
            first(&mut surface);
            second(&mut surface);
            assert_eq!(surface.mode(), second_mode);
        }
    }

    // Setting a color always returns to plain drawing.
    surface.set_color(BLUE);
    assert_eq!(surface.mode(), Mode::Draw);
    assert_eq!(surface.current_color(), BLUE);
}

#[test]
fn test_apply_command_dispatches_to_setters() {
    let mut surface = create_test_surface();

    surface.apply_command(SurfaceCommand::EnableStampSquare);
    assert_eq!(surface.mode(), Mode::StampSquare);

    surface.apply_command(SurfaceCommand::SetColor(GREEN));
    assert_eq!(surface.mode(), Mode::Draw);
    assert_eq!(surface.current_color(), GREEN);

    surface.apply_command(SurfaceCommand::EnableEraser);
    assert_eq!(surface.mode(), Mode::Eraser);
    // Enabling a mode keeps the pen color.
    assert_eq!(surface.current_color(), GREEN);
}

#[test]
fn test_stamp_circle_commits_on_press() {
    let mut surface = create_test_surface();
    surface.set_color(RED);
    surface.enable_stamp_circle();
    surface.take_redraw();

    surface.on_mouse_press(MouseButton::Left, 120, 80);

    assert!(surface.needs_redraw);
    assert!(surface.in_progress().is_none());
    assert_eq!(
        surface.shapes(),
        &[Shape::Circle {
            center: (120, 80),
            radius: DEFAULT_SHAPE_SIZE,
            color: RED,
        }]
    );

    // Motion and release after a stamp do nothing.
    surface.on_mouse_motion(130, 90);
    surface.on_mouse_release(MouseButton::Left, 140, 100);
    assert_eq!(surface.shapes().len(), 1);
}

#[test]
fn test_stamp_square_uses_configured_size() {
    let mut surface = DrawingSurface::with_seed(
        SurfaceSettings {
            shape_size: 12,
            ..SurfaceSettings::default()
        },
        1,
    );
    surface.enable_stamp_square();
    surface.on_mouse_press(MouseButton::Left, 5, 6);
    surface.on_mouse_press(MouseButton::Left, 7, 8);

    assert_eq!(
        surface.shapes(),
        &[
            Shape::Square {
                top_left: (5, 6),
                side: 12,
                color: BLACK,
            },
            Shape::Square {
                top_left: (7, 8),
                side: 12,
                color: BLACK,
            },
        ]
    );
}

#[test]
fn test_plain_stroke_collects_every_event_point() {
    let mut surface = create_test_surface();

    surface.on_mouse_press(MouseButton::Left, 0, 0);
    let moves = [(1, 1), (2, 2), (3, 3), (4, 4)];
    for (i, &(x, y)) in moves.iter().enumerate() {
        surface.on_mouse_motion(x, y);
        let stroke = surface.in_progress().expect("stroke in progress");
        assert_eq!(stroke.points().len(), i + 2);
    }
    assert!(surface.shapes().is_empty());

    surface.on_mouse_release(MouseButton::Left, 9, 9);

    assert!(surface.in_progress().is_none());
    assert!(matches!(surface.state(), DrawingState::Idle));
    assert_eq!(surface.shapes().len(), 1);
    let Shape::Freehand(stroke) = &surface.shapes()[0] else {
        panic!("expected a freehand stroke");
    };
    assert_eq!(
        stroke.points(),
        &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4), (9, 9)]
    );
    assert_eq!(stroke.color(), BLACK);
    assert!(!stroke.is_rainbow());
}

#[test]
fn test_green_stroke_scenario() {
    let mut surface = create_test_surface();
    surface.set_color(GREEN);
    draw_stroke(&mut surface, &[(10, 10), (20, 10), (30, 10)]);

    let Shape::Freehand(stroke) = &surface.shapes()[0] else {
        panic!("expected a freehand stroke");
    };
    assert_eq!(surface.shapes().len(), 1);
    assert_eq!(stroke.points(), &[(10, 10), (20, 10), (30, 10)]);
    assert_eq!(stroke.color(), GREEN);
    assert!(!stroke.is_rainbow());
}

#[test]
fn test_rainbow_stroke_changes_color_while_moving() {
    let mut surface = create_test_surface();
    surface.set_color(BLUE);
    surface.enable_rainbow();

    surface.on_mouse_press(MouseButton::Left, 0, 0);
    let initial = surface.in_progress().unwrap().color();
    assert_eq!(initial, BLUE);
    assert!(surface.in_progress().unwrap().is_rainbow());

    let mut colors = Vec::new();
    for x in 1..=5 {
        surface.on_mouse_motion(x, 0);
        colors.push(surface.in_progress().unwrap().color());
    }
    surface.on_mouse_release(MouseButton::Left, 6, 0);

    assert!(colors.iter().any(|c| *c != initial));
    // Release does not refresh the color.
    assert_eq!(surface.shapes()[0].color(), *colors.last().unwrap());
}

#[test]
fn test_rainbow_sequence_is_reproducible_with_seed() {
    let run = || {
        let mut surface = DrawingSurface::with_seed(SurfaceSettings::default(), 99);
        surface.enable_rainbow();
        draw_stroke(&mut surface, &[(0, 0), (1, 0), (2, 0), (3, 0)]);
        surface.shapes()[0].color()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_eraser_ignores_pen_color() {
    let mut surface = create_test_surface();
    surface.set_color(RED);
    surface.enable_eraser();
    draw_stroke(&mut surface, &[(0, 0), (5, 5), (10, 10)]);

    let Shape::Freehand(stroke) = &surface.shapes()[0] else {
        panic!("expected a freehand stroke");
    };
    assert_eq!(stroke.color(), WHITE);
    assert!(!stroke.is_rainbow());
}

#[test]
fn test_mode_change_mid_stroke_does_not_affect_stroke() {
    let mut surface = create_test_surface();
    surface.set_color(RED);

    surface.on_mouse_press(MouseButton::Left, 0, 0);
    surface.enable_rainbow();
    surface.on_mouse_motion(1, 1);
    surface.on_mouse_motion(2, 2);
    assert_eq!(surface.in_progress().unwrap().color(), RED);

    surface.set_color(GREEN);
    surface.on_mouse_release(MouseButton::Left, 3, 3);

    let Shape::Freehand(stroke) = &surface.shapes()[0] else {
        panic!("expected a freehand stroke");
    };
    assert_eq!(stroke.color(), RED);
    assert!(!stroke.is_rainbow());
}

#[test]
fn test_release_while_idle_is_noop() {
    let mut surface = create_test_surface();
    surface.take_redraw();

    surface.on_mouse_release(MouseButton::Left, 3, 3);
    surface.on_mouse_motion(4, 4);

    assert!(surface.shapes().is_empty());
    assert!(!surface.needs_redraw);
}

#[test]
fn test_non_left_buttons_are_ignored() {
    let mut surface = create_test_surface();
    surface.on_mouse_press(MouseButton::Right, 1, 1);
    surface.on_mouse_press(MouseButton::Middle, 1, 1);
    assert!(surface.in_progress().is_none());

    surface.on_mouse_press(MouseButton::Left, 1, 1);
    surface.on_mouse_release(MouseButton::Right, 2, 2);
    assert!(surface.in_progress().is_some());
    surface.on_mouse_release(MouseButton::Left, 2, 2);
    assert_eq!(surface.shapes().len(), 1);
}

#[test]
fn test_click_without_motion_commits_invisible_stroke() {
    let mut surface = create_test_surface();
    surface.on_mouse_press(MouseButton::Left, 7, 7);
    surface.on_mouse_release(MouseButton::Left, 7, 7);

    let Shape::Freehand(stroke) = &surface.shapes()[0] else {
        panic!("expected a freehand stroke");
    };
    assert_eq!(stroke.points(), &[(7, 7), (7, 7)]);
}

#[test]
fn test_second_press_commits_dangling_stroke() {
    let mut surface = create_test_surface();
    surface.on_mouse_press(MouseButton::Left, 0, 0);
    surface.on_mouse_motion(1, 0);
    surface.on_mouse_press(MouseButton::Left, 10, 10);

    assert_eq!(surface.shapes().len(), 1);
    assert_eq!(surface.in_progress().unwrap().points(), &[(10, 10)]);
}

#[test]
fn test_render_draws_committed_then_in_progress() {
    let mut surface = create_test_surface();
    surface.enable_stamp_circle();
    surface.on_mouse_press(MouseButton::Left, 50, 50);
    surface.set_color(BLUE);
    surface.on_mouse_press(MouseButton::Left, 0, 0);
    surface.on_mouse_motion(4, 0);

    let mut ctx = RecordingContext::new();
    surface.render(&mut ctx);

    assert_eq!(
        ctx.into_calls(),
        vec![
            DrawCall::FilledCircle {
                center: (50, 50),
                radius: DEFAULT_SHAPE_SIZE,
                color: BLACK,
            },
            DrawCall::Polyline {
                points: vec![(0, 0), (4, 0)],
                color: BLUE,
                width: FREEHAND_LINE_WIDTH,
            },
        ]
    );
}

#[test]
fn test_render_is_idempotent() {
    let mut surface = create_test_surface();
    surface.enable_rainbow();
    draw_stroke(&mut surface, &[(0, 0), (3, 4), (6, 8)]);
    surface.enable_stamp_square();
    surface.on_mouse_press(MouseButton::Left, 20, 20);
    surface.enable_eraser();
    surface.on_mouse_press(MouseButton::Left, 1, 1);
    surface.on_mouse_motion(2, 2);

    let mut first = RecordingContext::new();
    let mut second = RecordingContext::new();
    surface.render(&mut first);
    surface.render(&mut second);

    assert_eq!(first.calls().len(), 3);
    assert_eq!(first.into_calls(), second.into_calls());
}

#[test]
fn test_take_redraw_clears_flag() {
    let mut surface = create_test_surface();
    assert!(surface.take_redraw());
    assert!(!surface.take_redraw());

    surface.on_mouse_press(MouseButton::Left, 0, 0);
    assert!(surface.take_redraw());
    surface.on_mouse_motion(1, 1);
    assert!(surface.take_redraw());
    surface.on_mouse_release(MouseButton::Left, 2, 2);
    assert!(surface.take_redraw());

    surface.enable_stamp_circle();
    assert!(!surface.take_redraw());
    surface.on_mouse_press(MouseButton::Left, 5, 5);
    assert!(surface.take_redraw());
}
