// SPDX-License-Identifier: MPL-2.0
//! Toast content and the request builder used to show a toast.
//!
//! Everything here is immutable once a toast is created.

use crate::domain::ToastPosition;
use iced::widget::{image, svg};
use iced::{Color, Font};
use std::sync::OnceLock;
use std::time::Duration;

use crate::config::defaults::DEFAULT_FONT_SIZE;

/// Default toast background (a light gray at two thirds white).
pub const LIGHT_GRAY: Color = Color::from_rgb(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);

/// Default message color.
pub const TITLE_BLACK: Color = Color::BLACK;

/// Side length of the icon.
pub const ICON_SIZE: f32 = 24.0;

/// Inner padding between the toast border and its content.
pub const PADDING: f32 = 12.0;

/// Gap between the icon and the message.
pub const ICON_GAP: f32 = 8.0;

/// Icon drawn at the leading edge of a toast.
#[derive(Debug, Clone)]
pub enum ToastIcon {
    Svg(svg::Handle),
    Image(image::Handle),
}

impl ToastIcon {
    /// Returns the bundled bell icon.
    pub fn bundled() -> Self {
        static HANDLE: OnceLock<svg::Handle> = OnceLock::new();
        static DATA: &[u8] = include_bytes!("../../assets/icons/toast.svg");
        let handle = HANDLE.get_or_init(|| svg::Handle::from_memory(DATA));
        ToastIcon::Svg(handle.clone())
    }
}

impl Default for ToastIcon {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Message font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastFont {
    pub font: Font,
    pub size: f32,
}

impl Default for ToastFont {
    fn default() -> Self {
        Self {
            font: Font::DEFAULT,
            size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Immutable visual content of a toast.
#[derive(Debug, Clone)]
pub struct ToastContent {
    pub message: String,
    pub icon: ToastIcon,
    pub position: ToastPosition,
    pub background: Color,
    pub title_color: Color,
    pub font: ToastFont,
}

impl ToastContent {
    /// Width available to the message once icon and padding are taken out.
    #[must_use]
    pub fn text_width(&self, toast_width: f32) -> f32 {
        (toast_width - ICON_SIZE - ICON_GAP - 2.0 * PADDING).max(1.0)
    }

    /// Greedy word wrap of the message at `toast_width`.
    ///
    /// Glyph advance is approximated at 0.55 em since no text shaper is
    /// available at layout time. Words longer than a line are split.
    #[must_use]
    pub fn wrapped_lines(&self, toast_width: f32) -> Vec<String> {
        let advance = self.font.size * 0.55;
        let per_line = ((self.text_width(toast_width) / advance).floor() as usize).max(1);

        let mut lines = Vec::new();
        for paragraph in self.message.lines() {
            let mut line = String::new();
            for word in paragraph.split_whitespace() {
                let mut word: Vec<char> = word.chars().collect();
                while word.len() > per_line {
                    if !line.is_empty() {
                        lines.push(std::mem::take(&mut line));
                    }
                    let rest = word.split_off(per_line);
                    lines.push(word.into_iter().collect());
                    word = rest;
                }
                let used = line.chars().count();
                if used > 0 && used + 1 + word.len() > per_line {
                    lines.push(std::mem::take(&mut line));
                }
                if !line.is_empty() {
                    line.push(' ');
                }
                line.extend(word);
            }
            lines.push(line);
        }
        if lines.is_empty() {
            lines.push(String::new());
        }
        lines
    }

    /// Line height of the message text.
    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.font.size * 1.3
    }

    /// Height needed to lay the message out at `toast_width`.
    #[must_use]
    pub fn estimated_height(&self, toast_width: f32) -> f32 {
        let lines = self.wrapped_lines(toast_width).len() as f32;
        lines * self.line_height() + 2.0 * PADDING
    }
}

/// Parameters for a single `show` call.
///
/// Unset decay and position fall back to the controller's configuration;
/// everything else has a fixed default.
///
/// # Example
///
/// ```
/// use iced_toast::domain::ToastPosition;
/// use iced_toast::toast::ToastRequest;
/// use std::time::Duration;
///
/// let request = ToastRequest::new("Saved")
///     .position(ToastPosition::Bottom)
///     .decay_in(Duration::from_secs(2));
/// assert_eq!(request.message(), "Saved");
/// ```
#[derive(Debug, Clone)]
pub struct ToastRequest {
    message: String,
    icon: ToastIcon,
    decay: Option<Duration>,
    position: Option<ToastPosition>,
    background: Color,
    title_color: Color,
    font: ToastFont,
}

impl ToastRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            icon: ToastIcon::default(),
            decay: None,
            position: None,
            background: LIGHT_GRAY,
            title_color: TITLE_BLACK,
            font: ToastFont::default(),
        }
    }

    #[must_use]
    pub fn icon(mut self, icon: ToastIcon) -> Self {
        self.icon = icon;
        self
    }

    #[must_use]
    pub fn decay_in(mut self, decay: Duration) -> Self {
        self.decay = Some(decay);
        self
    }

    #[must_use]
    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    #[must_use]
    pub fn title_color(mut self, color: Color) -> Self {
        self.title_color = color;
        self
    }

    #[must_use]
    pub fn font(mut self, font: ToastFont) -> Self {
        self.font = font;
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn requested_decay(&self) -> Option<Duration> {
        self.decay
    }

    pub(crate) fn into_content(self, default_position: ToastPosition) -> ToastContent {
        ToastContent {
            message: self.message,
            icon: self.icon,
            position: self.position.unwrap_or(default_position),
            background: self.background,
            title_color: self.title_color,
            font: self.font,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_match_documented_values() {
        let content = ToastRequest::new("hello").into_content(ToastPosition::Top);
        assert_eq!(content.position, ToastPosition::Top);
        assert_eq!(content.background, LIGHT_GRAY);
        assert_eq!(content.title_color, Color::BLACK);
        assert_eq!(content.font.size, DEFAULT_FONT_SIZE);
        assert!(matches!(content.icon, ToastIcon::Svg(_)));
    }

    #[test]
    fn explicit_position_overrides_default() {
        let content = ToastRequest::new("hello")
            .position(ToastPosition::Bottom)
            .into_content(ToastPosition::Top);
        assert_eq!(content.position, ToastPosition::Bottom);
    }

    #[test]
    fn long_messages_wrap_to_more_lines() {
        let short = ToastRequest::new("Saved").into_content(ToastPosition::Top);
        let long = ToastRequest::new("x".repeat(400)).into_content(ToastPosition::Top);
        assert!(long.estimated_height(300.0) > short.estimated_height(300.0));
    }

    #[test]
    fn wrapping_breaks_on_words() {
        let content = ToastRequest::new("alpha beta gamma").into_content(ToastPosition::Top);
        // 24 + 8 + 24 leaves 40 px of text, about four glyphs at 15 px.
        let lines = content.wrapped_lines(96.0);
        assert_eq!(lines, vec!["alph", "a", "beta", "gamm", "a"]);
    }

    #[test]
    fn wrapping_keeps_explicit_newlines() {
        let content = ToastRequest::new("one\ntwo").into_content(ToastPosition::Top);
        assert_eq!(content.wrapped_lines(400.0), vec!["one", "two"]);
    }

    #[test]
    fn empty_message_has_one_line() {
        let content = ToastRequest::new("").into_content(ToastPosition::Top);
        assert_eq!(content.wrapped_lines(400.0), vec![String::new()]);
    }

    #[test]
    fn single_line_fits_minimum_height() {
        let content = ToastRequest::new("Saved").into_content(ToastPosition::Top);
        assert!(content.estimated_height(300.0) <= crate::config::defaults::MIN_HEIGHT);
    }
}
