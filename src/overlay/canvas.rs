// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing attached toasts and recognizing swipes on them.

use super::surface::OverlaySurface;
use super::Message;
use crate::config::defaults::CORNER_RADIUS;
use crate::domain::ViewId;
use crate::toast::content::{ICON_GAP, ICON_SIZE, PADDING};
use crate::toast::{Presentation, ToastIcon, ToastView};
use iced::widget::canvas::{self, Frame, Path, Text};
use iced::widget::Action;
use iced::{mouse, touch, Color, Point, Rectangle, Renderer, Size, Theme};

/// Draws every toast of a surface at its presentation values.
pub struct ToastLayer<'a> {
    surface: &'a OverlaySurface,
}

impl<'a> ToastLayer<'a> {
    pub fn new(surface: &'a OverlaySurface) -> Self {
        Self { surface }
    }

    fn press(&self, state: &mut Option<(ViewId, Point)>, position: Point) -> Option<Action<Message>> {
        // Presses outside every toast fall through to the widgets below.
        let view = self.surface.view_at(position)?;
        *state = Some((view, position));
        Some(Action::capture())
    }

    fn release(&self, state: &mut Option<(ViewId, Point)>, position: Point) -> Option<Action<Message>> {
        let (view, from) = state.take()?;
        Some(Action::publish(Message::Swipe { view, from, to: position }).and_capture())
    }
}

impl canvas::Program<Message> for ToastLayer<'_> {
    /// The pressed toast and where the press started.
    type State = Option<(ViewId, Point)>;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                self.press(state, position)
            }
            iced::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                self.press(state, relative(*position, bounds))
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                // Without a cursor position there is no end point to classify.
                let Some(position) = cursor.position() else {
                    *state = None;
                    return None;
                };
                self.release(state, relative(position, bounds))
            }
            iced::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
                self.release(state, relative(*position, bounds))
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        for view in self.surface.views() {
            draw_toast(&mut frame, &view);
        }
        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match cursor.position_in(bounds) {
            Some(position) if self.surface.view_at(position).is_some() => {
                mouse::Interaction::Pointer
            }
            _ => mouse::Interaction::default(),
        }
    }
}

fn relative(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn draw_toast(frame: &mut Frame, view: &ToastView) {
    let Presentation { alpha, frame: rect } = view.presentation();
    if alpha <= 0.0 || rect.width <= 0.0 || rect.height <= 0.0 {
        return;
    }
    let content = view.content();

    let background = Path::rounded_rectangle(rect.position(), rect.size(), CORNER_RADIUS.into());
    frame.fill(&background, faded(content.background, alpha));

    let icon_bounds = Rectangle::new(
        Point::new(rect.x + PADDING, rect.y + (rect.height - ICON_SIZE) / 2.0),
        Size::new(ICON_SIZE, ICON_SIZE),
    );
    match &content.icon {
        ToastIcon::Svg(handle) => {
            frame.draw_svg(
                icon_bounds,
                iced::advanced::svg::Svg::new(handle.clone()).opacity(alpha),
            );
        }
        ToastIcon::Image(handle) => {
            frame.draw_image(
                icon_bounds,
                iced::advanced::image::Image::new(handle.clone()).opacity(alpha),
            );
        }
    }

    let lines = content.wrapped_lines(rect.width);
    let line_height = content.line_height();
    let text_x = icon_bounds.x + ICON_SIZE + ICON_GAP;
    let mut y = rect.y + (rect.height - lines.len() as f32 * line_height) / 2.0;
    for line in lines {
        frame.fill_text(Text {
            content: line,
            position: Point::new(text_x, y),
            color: faded(content.title_color, alpha),
            size: content.font.size.into(),
            font: content.font.font,
            ..Text::default()
        });
        y += line_height;
    }
}
