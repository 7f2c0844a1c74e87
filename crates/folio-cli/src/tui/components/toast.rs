//! Toasts
//!
//! Short-lived notices in the top-right corner: language or theme switched,
//! listing refresh failed, contact delivery unavailable. The bottom border
//! drains as the notice runs out.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use folio_core::constants::ui::{TOAST_DURATION, TOAST_STACK};

use crate::tui::themes::Theme;
use crate::tui::utils::truncate_ellipsis;

/// Columns a toast may take, borders included
const WIDTH_RANGE: (u16, u16) = (20, 48);

/// Rows below the top of the screen, clear of the header
const TOP_OFFSET: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    fn color(self, theme: &Theme) -> Color {
        match self {
            ToastKind::Success => theme.success_color,
            ToastKind::Info => theme.accent_color,
            ToastKind::Error => theme.error_color,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Info => "•",
            ToastKind::Error => "✗",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Columns needed for icon, message and borders
    fn width(&self) -> u16 {
        let text = self.message.width() + self.kind.icon().width() + 5;
        (u16::try_from(text).unwrap_or(u16::MAX)).clamp(WIDTH_RANGE.0, WIDTH_RANGE.1)
    }
}

#[derive(Debug)]
struct Shown {
    toast: Toast,
    shown_at: Instant,
}

impl Shown {
    /// Lifetime left, 1.0 when fresh
    fn remaining(&self, now: Instant, lifetime: Duration) -> f32 {
        let elapsed = now.saturating_duration_since(self.shown_at).as_secs_f32();
        (1.0 - elapsed / lifetime.as_secs_f32().max(f32::EPSILON)).max(0.0)
    }
}

#[derive(Debug)]
pub struct ToastQueue {
    shown: Vec<Shown>,
    lifetime: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::with_lifetime(TOAST_DURATION)
    }

    pub fn with_lifetime(lifetime: Duration) -> Self {
        Self {
            shown: Vec::new(),
            lifetime,
        }
    }

    /// Show a toast; repeating a visible one restarts its clock
    pub fn push(&mut self, toast: Toast, now: Instant) {
        self.shown.retain(|s| s.toast != toast);
        if self.shown.len() >= TOAST_STACK {
            self.shown.remove(0);
        }
        self.shown.push(Shown {
            toast,
            shown_at: now,
        });
    }

    /// Drop expired toasts; returns whether any went away
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.shown.len();
        let lifetime = self.lifetime;
        self.shown
            .retain(|s| now.saturating_duration_since(s.shown_at) < lifetime);
        self.shown.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }

    /// Newest first, with the lifetime each has left
    pub fn visible(&self, now: Instant) -> impl Iterator<Item = (&Toast, f32)> {
        self.shown
            .iter()
            .rev()
            .map(move |s| (&s.toast, s.remaining(now, self.lifetime)))
    }
}

/// Stack toasts down the right edge under the header
pub fn render_toasts(
    buf: &mut Buffer,
    area: Rect,
    queue: &ToastQueue,
    theme: &Theme,
    now: Instant,
) {
    let mut y = area.y + TOP_OFFSET;
    for (toast, remaining) in queue.visible(now) {
        let width = toast.width().min(area.width.saturating_sub(2));
        if width < WIDTH_RANGE.0 || y + 3 > area.bottom() {
            break;
        }
        let rect = Rect::new(area.right() - width - 2, y, width, 3);
        render_toast(buf, rect, toast, remaining, theme);
        y += 4;
    }
}

fn render_toast(buf: &mut Buffer, area: Rect, toast: &Toast, remaining: f32, theme: &Theme) {
    let color = toast.kind.color(theme);
    let inner_width = usize::from(area.width.saturating_sub(2));
    let drained = inner_width - (inner_width as f32 * remaining).round() as usize;
    let countdown = Line::from(vec![
        Span::styled("━".repeat(inner_width - drained), Style::default().fg(color)),
        Span::styled("─".repeat(drained), Style::default().fg(theme.dim_color)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .title_bottom(countdown)
        .style(Style::default().bg(theme.bg_color));

    let message = truncate_ellipsis(&toast.message, inner_width.saturating_sub(4));
    let body = Line::from(vec![
        Span::raw(" "),
        Span::styled(toast.kind.icon(), Style::default().fg(color)),
        Span::raw(" "),
        Span::styled(message, Style::default().fg(theme.text_color)),
    ]);

    Clear.render(area, buf);
    Paragraph::new(body).block(block).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::THEME_REGISTRY;

    #[test]
    fn test_queue_caps_and_refreshes_repeats() {
        let now = Instant::now();
        let mut queue = ToastQueue::new();
        queue.push(Toast::info("a"), now);
        queue.push(Toast::success("b"), now);
        queue.push(Toast::info("a"), now);
        queue.push(Toast::error("c"), now);
        queue.push(Toast::info("d"), now);

        let messages: Vec<&str> = queue
            .visible(now)
            .map(|(t, _)| t.message.as_str())
            .collect();
        assert_eq!(messages, vec!["d", "c", "a"]);
    }

    #[test]
    fn test_tick_expires_by_lifetime() {
        let start = Instant::now();
        let mut queue = ToastQueue::with_lifetime(Duration::from_secs(2));
        queue.push(Toast::info("old"), start);
        queue.push(Toast::info("fresh"), start + Duration::from_secs(1));

        let (_, remaining) = queue.visible(start + Duration::from_secs(1)).last().unwrap();
        assert!((remaining - 0.5).abs() < 1e-3);

        assert!(queue.tick(start + Duration::from_secs(2)));
        assert_eq!(queue.visible(start).count(), 1);
        assert!(!queue.tick(start + Duration::from_secs(2)));
        assert!(queue.tick(start + Duration::from_secs(3)));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_render_draws_message_at_right_edge() {
        let now = Instant::now();
        let theme = THEME_REGISTRY.get_or_default("folio");
        let mut queue = ToastQueue::new();
        queue.push(Toast::success("Sent"), now);

        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        render_toasts(&mut buf, area, &queue, theme, now);

        let row: String = (0..area.width)
            .map(|x| buf[(x, TOP_OFFSET + 1)].symbol().to_string())
            .collect();
        assert!(row.contains("✓ Sent"));
        assert_eq!(buf[(area.width - 3, TOP_OFFSET)].symbol(), "╮");
    }

    #[test]
    fn test_render_skips_narrow_screens() {
        let now = Instant::now();
        let mut queue = ToastQueue::new();
        queue.push(Toast::info("hidden"), now);

        let area = Rect::new(0, 0, 10, 12);
        let mut buf = Buffer::empty(area);
        render_toasts(&mut buf, area, &queue, THEME_REGISTRY.get_or_default("folio"), now);
        assert!(buf.content().iter().all(|c| c.symbol() == " "));
    }
}
