#[cfg(test)]
mod picture_box_scenarios {
    use crate::rendering::{DisplayList, DrawCommand};
    use crate::ui::theme_system::{ThemePalette, ThemePart, ThemeRegistry, WidgetKind, WidgetState};
    use bevy_color::Color;
    use kurbo::{Affine, Rect};

    fn base_color() -> Color {
        Color::srgb(0.92, 0.91, 0.85)
    }

    fn assert_close(actual: Color, expected: [f32; 3]) {
        let srgba = actual.to_srgba();
        let got = [srgba.red, srgba.green, srgba.blue];
        for (a, e) in got.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-5, "expected {expected:?}, got {got:?}");
        }
        assert_eq!(srgba.alpha, 1.0);
    }

    fn paint_background(bounds: Rect, state: WidgetState) -> DisplayList {
        let registry = ThemeRegistry::default();
        let theme = registry.resolve(WidgetKind::PictureBox);
        let mut list = DisplayList::new();
        theme.draw_background(ThemePart::new(&mut list, bounds).with_state(state));
        list
    }

    #[test]
    fn test_normal_fill() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 40.0);
        let list = paint_background(bounds, WidgetState::Normal);

        assert_eq!(
            list.commands(),
            &[DrawCommand::FillRect {
                rect: bounds,
                color: base_color(),
                transform: Affine::IDENTITY,
            }]
        );
    }

    #[test]
    fn test_disabled_fill() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 40.0);
        let list = paint_background(bounds, WidgetState::Disabled);

        assert_eq!(list.len(), 1);
        match &list.commands()[0] {
            DrawCommand::FillRect { rect, color, .. } => {
                assert_eq!(*rect, bounds);
                assert_close(*color, [0.8, 0.785, 0.725]);
            }
            other => panic!("expected a rect fill, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_width_is_noop() {
        let list = paint_background(Rect::new(0.0, 0.0, 0.0, 40.0), WidgetState::Normal);
        assert!(list.is_empty());
    }

    #[test]
    fn test_state_color_mapping() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 40.0);
        let color_of = |state| paint_background(bounds, state).commands()[0].color();

        let normal = color_of(WidgetState::Normal);
        assert_eq!(normal, base_color());
        assert_eq!(color_of(WidgetState::ReadOnly), normal);
        assert_eq!(color_of(WidgetState::Focused), normal);
        assert_ne!(color_of(WidgetState::Disabled), normal);
    }

    #[test]
    fn test_painting_is_idempotent() {
        let registry = ThemeRegistry::default();
        let theme = registry.resolve(WidgetKind::PictureBox);
        let bounds = Rect::new(3.5, 7.25, 90.0, 33.0);
        let mut list = DisplayList::new();

        for _ in 0..2 {
            theme.draw_background(
                ThemePart::new(&mut list, bounds).with_state(WidgetState::Focused),
            );
        }

        assert_eq!(list.len(), 2);
        assert_eq!(list.commands()[0], list.commands()[1]);
    }

    #[test]
    fn test_positive_area_always_one_fill() {
        let registry = ThemeRegistry::default();
        let theme = registry.resolve(WidgetKind::PictureBox);

        for (width, height) in [(1.0, 1.0), (0.5, 300.0), (1920.0, 1080.0), (1e-3, 1e-3)] {
            for state in WidgetState::ALL {
                let bounds = Rect::from_origin_size((-10.0, 4.0), (width, height));
                let mut list = DisplayList::new();
                theme.draw_background(ThemePart::new(&mut list, bounds).with_state(state));

                assert_eq!(list.len(), 1);
                assert_eq!(list.commands()[0].bounding_box(), bounds);
            }
        }
    }

    #[test]
    fn test_shared_theme_across_threads() {
        let registry = ThemeRegistry::new(&ThemePalette::default());
        let theme = registry.resolve(WidgetKind::PictureBox);
        let bounds = Rect::new(0.0, 0.0, 100.0, 40.0);

        let lists: Vec<DisplayList> = std::thread::scope(|scope| {
            let handles: Vec<_> = WidgetState::ALL
                .into_iter()
                .map(|state| {
                    let theme = theme.clone();
                    scope.spawn(move || {
                        let mut list = DisplayList::new();
                        theme.draw_background(ThemePart::new(&mut list, bounds).with_state(state));
                        list
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for (state, list) in WidgetState::ALL.into_iter().zip(lists) {
            assert_eq!(list, paint_background(bounds, state), "state {state}");
        }
    }
}
