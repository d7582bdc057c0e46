use egui::{Id, MouseWheelUnit, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};
use life_timeline::layout::{place_event, Point};
use life_timeline::render::{self, style, DrawPrimitive, LineStyle, TimelineScene};
use life_timeline::{Event, TimelineConfig, Viewport};

use crate::ui::theme;

/// Pixel-precise (trackpad) scrolling this far counts as one wheel notch.
const POINTS_PER_NOTCH: f32 = 50.0;

/// Render the scrollable timeline canvas. Mouse-wheel notches over the canvas
/// zoom instead of scrolling; the scroll bar still scrolls.
pub fn show_timeline_canvas(
    config: &TimelineConfig,
    events: &[Event],
    viewport: &mut Viewport,
    ui: &mut Ui,
) {
    if ui.rect_contains_pointer(ui.max_rect()) {
        let carry_id = Id::new("timeline-wheel-carry");
        let mut carry = ui.data(|d| d.get_temp::<f32>(carry_id)).unwrap_or(0.0);
        let notches = ui.input(|i| wheel_notches(&i.events, &mut carry));
        ui.data_mut(|d| d.insert_temp(carry_id, carry));
        for _ in 0..notches.unsigned_abs() {
            if notches > 0 {
                viewport.zoom_in(config);
            } else {
                viewport.zoom_out(config);
            }
        }
        ui.input_mut(|i| {
            i.smooth_scroll_delta = Vec2::ZERO;
            i.raw_scroll_delta = Vec2::ZERO;
        });
    }

    let visible_height = ui.available_height();
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            viewport.resize(ui.available_width(), visible_height);
            let scene = render::render(config, viewport, events);

            let (response, painter) = ui.allocate_painter(
                Vec2::new(scene.content_width, scene.content_height.max(visible_height)),
                Sense::hover(),
            );
            painter.rect_filled(response.rect, 0.0, theme::color(style::BACKGROUND));

            let offset = response.rect.min.to_vec2();
            let visible = painter.clip_rect();
            for primitive in &scene.primitives {
                paint(&painter, offset, visible, primitive);
            }

            if let Some(pointer) = response.hover_pos() {
                show_event_tooltip(config, events, &scene, pointer - offset, ui);
            }
        });
}

/// Net wheel notches this frame: up is positive. Line and page events are one
/// notch each; point deltas build up in `carry` until they reach a notch.
fn wheel_notches(events: &[egui::Event], carry: &mut f32) -> i32 {
    let mut notches = 0;
    for event in events {
        let egui::Event::MouseWheel { unit, delta, .. } = event else {
            continue;
        };
        match unit {
            MouseWheelUnit::Line | MouseWheelUnit::Page => {
                if delta.y > 0.0 {
                    notches += 1;
                } else if delta.y < 0.0 {
                    notches -= 1;
                }
            }
            MouseWheelUnit::Point => {
                *carry += delta.y / POINTS_PER_NOTCH;
                let whole = carry.trunc();
                notches += whole as i32;
                *carry -= whole;
            }
        }
    }
    notches
}

fn pos(p: Point, offset: Vec2) -> Pos2 {
    Pos2::new(p.x, p.y) + offset
}

fn paint(painter: &egui::Painter, offset: Vec2, visible: Rect, primitive: &DrawPrimitive) {
    match primitive {
        DrawPrimitive::Line { from, to, style } => {
            let (a, b) = (pos(*from, offset), pos(*to, offset));
            if a.y.max(b.y) < visible.top() || a.y.min(b.y) > visible.bottom() {
                return;
            }
            paint_line(painter, a, b, visible, style);
        }
        DrawPrimitive::Rect {
            min,
            max,
            fill,
            outline,
        } => {
            painter.rect(
                Rect::from_min_max(pos(*min, offset), pos(*max, offset)),
                0.0,
                theme::color(*fill),
                Stroke::new(1.0, theme::color(*outline)),
            );
        }
        DrawPrimitive::Circle {
            center,
            radius,
            fill,
            outline,
        } => {
            painter.circle(
                pos(*center, offset),
                *radius,
                theme::color(*fill),
                Stroke::new(style::EVENT_OUTLINE_WIDTH, theme::color(*outline)),
            );
        }
        DrawPrimitive::Text {
            at,
            anchor,
            text,
            color,
            role,
        } => {
            painter.text(
                pos(*at, offset),
                theme::align(*anchor),
                text,
                theme::font(*role),
                theme::color(*color),
            );
        }
    }
}

fn paint_line(painter: &egui::Painter, a: Pos2, b: Pos2, visible: Rect, style: &LineStyle) {
    let stroke = Stroke::new(style.width, theme::color(style.color));
    let Some(dash) = style.dash else {
        painter.line_segment([a, b], stroke);
        return;
    };

    // Scale markers run the full content height; only dash the visible span,
    // starting on a whole period so the pattern does not crawl while scrolling.
    let (a, b) = if a.x == b.x && a.y < b.y {
        let period = dash.on + dash.off;
        let skipped = ((visible.top() - a.y).max(0.0) / period).floor() * period;
        (
            Pos2::new(a.x, a.y + skipped),
            Pos2::new(b.x, b.y.min(visible.bottom() + period)),
        )
    } else {
        (a, b)
    };
    painter.extend(Shape::dashed_line(&[a, b], stroke, dash.on, dash.off));
}

fn show_event_tooltip(
    config: &TimelineConfig,
    events: &[Event],
    scene: &TimelineScene,
    pointer: Pos2,
    ui: &Ui,
) {
    let hovered = events.iter().find(|event| {
        let p = place_event(event, &scene.layout, scene.layout.row_length_px, config.scale_length_cm);
        Pos2::new(p.x, p.y).distance(pointer) <= theme::EVENT_HOVER_RADIUS
    });
    let Some(event) = hovered else {
        return;
    };

    egui::show_tooltip_at_pointer(
        ui.ctx(),
        ui.layer_id(),
        egui::Id::new(("event-tip", event.date, event.label.as_str())),
        |ui| {
            if !event.label.is_empty() {
                ui.strong(&event.label);
            }
            ui.label(event.date.format("%d/%m/%Y").to_string());
            ui.label(format!("Age {:.2} (row {})", event.age, event.row));
        },
    );
}
