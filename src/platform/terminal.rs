//! Terminal backend built on ratatui + crossterm
//!
//! The world is drawn on a braille canvas whose bounds are the world size,
//! so one world unit maps to a fraction of a terminal cell. Screen y grows
//! downward while the canvas y grows upward, so every point is flipped.

use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{SetTitle, supports_keyboard_enhancement};
use ratatui::layout::{Margin, Rect};
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Block, Paragraph};
use ratatui::{DefaultTerminal, Frame};

use super::{InputEvent, Key, Platform};
use crate::error::AsteroidsError;
use crate::renderer::{DrawList, Stroke};
use crate::sim::motion::WorldBounds;

/// Map a terminal key to a game key
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') => Some(Key::Right),
        KeyCode::Up | KeyCode::Char('w') => Some(Key::Thrust),
        KeyCode::Char(' ') => Some(Key::Fire),
        KeyCode::Char('q') | KeyCode::Esc => Some(Key::Quit),
        _ => None,
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Synthesizes key releases from press/repeat timestamps
#[derive(Debug)]
pub struct HoldTracker {
    hold_ms: u64,
    held: Vec<(Key, u64)>,
}

impl HoldTracker {
    /// Keys release `hold_ms` after their last press or repeat
    pub fn new(hold_ms: u64) -> Self {
        Self {
            hold_ms,
            held: Vec::new(),
        }
    }

    pub fn touch(&mut self, key: Key, now_ms: u64) {
        match self.held.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = now_ms,
            None => self.held.push((key, now_ms)),
        }
    }

    /// Emit `KeyUp` for every key not seen within the hold window
    pub fn expire(&mut self, now_ms: u64, events: &mut Vec<InputEvent>) {
        self.held.retain(|&(key, seen)| {
            let live = now_ms.saturating_sub(seen) < self.hold_ms;
            if !live {
                events.push(InputEvent::KeyUp(key));
            }
            live
        });
    }
}

pub struct TerminalPlatform {
    terminal: DefaultTerminal,
    started: Instant,
    bounds: WorldBounds,
    title: String,
    reports_release: bool,
    holds: HoldTracker,
}

impl TerminalPlatform {
    /// Enter raw mode on the alternate screen and size the canvas to `bounds`.
    ///
    /// `release_hold_ms` is only used when the terminal cannot report key
    /// releases.
    pub fn open(
        title: &str,
        bounds: WorldBounds,
        release_hold_ms: u64,
    ) -> Result<Self, AsteroidsError> {
        let terminal = ratatui::try_init()?;
        // From here on Drop restores the terminal, including on early return
        let mut platform = Self {
            terminal,
            started: Instant::now(),
            bounds,
            title: title.to_string(),
            reports_release: false,
            holds: HoldTracker::new(release_hold_ms),
        };

        execute!(stdout(), SetTitle(title))?;
        if matches!(supports_keyboard_enhancement(), Ok(true)) {
            execute!(
                stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            platform.reports_release = true;
            log::info!("Terminal reports key releases");
        } else {
            log::warn!(
                "Terminal cannot report key releases; keys release {}ms after the last repeat",
                release_hold_ms
            );
        }

        Ok(platform)
    }

    fn translate(&mut self, event: Event) -> Option<InputEvent> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind != KeyEventKind::Release && is_interrupt(&key) {
            return Some(InputEvent::Quit);
        }
        let mapped = map_key(key.code)?;

        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if !self.reports_release {
                    let now = self.monotonic_ms();
                    self.holds.touch(mapped, now);
                }
                Some(InputEvent::KeyDown(mapped))
            }
            KeyEventKind::Release => Some(InputEvent::KeyUp(mapped)),
        }
    }
}

impl Platform for TerminalPlatform {
    fn poll_events(
        &mut self,
        timeout: Duration,
        events: &mut Vec<InputEvent>,
    ) -> Result<(), AsteroidsError> {
        let mut wait = timeout;
        while event::poll(wait)? {
            wait = Duration::ZERO;
            if let Some(ev) = self.translate(event::read()?) {
                events.push(ev);
            }
        }

        if !self.reports_release {
            let now = self.monotonic_ms();
            self.holds.expire(now, events);
        }
        Ok(())
    }

    fn monotonic_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn present(&mut self, frame: &DrawList) -> Result<(), AsteroidsError> {
        let bounds = self.bounds;
        let title = self.title.as_str();
        self.terminal.draw(|f| render(f, frame, bounds, title))?;
        Ok(())
    }
}

impl Drop for TerminalPlatform {
    fn drop(&mut self) {
        if self.reports_release {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        }
        ratatui::restore();
    }
}

fn stroke_color(stroke: Stroke) -> Color {
    match stroke {
        Stroke::Ship => Color::White,
        Stroke::Asteroid => Color::Gray,
        Stroke::Photon => Color::Yellow,
        Stroke::Bounds => Color::DarkGray,
    }
}

fn render(f: &mut Frame, list: &DrawList, bounds: WorldBounds, title: &str) {
    let area = f.area();
    let height = bounds.height as f64;

    let canvas = Canvas::default()
        .block(Block::bordered().title(title))
        .marker(Marker::Braille)
        .x_bounds([0.0, bounds.width as f64])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for line_loop in &list.loops {
                let color = stroke_color(line_loop.stroke);
                for seg in line_loop.points.windows(2) {
                    ctx.draw(&CanvasLine::new(
                        seg[0].x as f64,
                        height - seg[0].y as f64,
                        seg[1].x as f64,
                        height - seg[1].y as f64,
                        color,
                    ));
                }
            }
        });
    f.render_widget(canvas, area);

    if list.texts.is_empty() {
        return;
    }

    // Telemetry is stacked top-down in y order inside the border
    let mut texts: Vec<_> = list.texts.iter().collect();
    texts.sort_by(|a, b| a.y.total_cmp(&b.y));
    let width = texts.iter().map(|t| t.text.len()).max().unwrap_or(0) as u16;
    let lines: Vec<Line> = texts.iter().map(|t| Line::from(t.text.as_str())).collect();

    let inner = area.inner(Margin::new(1, 1));
    let rect = Rect {
        x: inner.x,
        y: inner.y,
        width: width.min(inner.width),
        height: (lines.len() as u16).min(inner.height),
    };
    f.render_widget(Paragraph::new(lines), rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(KeyCode::Left), Some(Key::Left));
        assert_eq!(map_key(KeyCode::Right), Some(Key::Right));
        assert_eq!(map_key(KeyCode::Up), Some(Key::Thrust));
        assert_eq!(map_key(KeyCode::Char(' ')), Some(Key::Fire));
        assert_eq!(map_key(KeyCode::Char('q')), Some(Key::Quit));
        assert_eq!(map_key(KeyCode::Esc), Some(Key::Quit));
        assert_eq!(map_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_interrupt_detection() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(is_interrupt(&ctrl_c));
        assert!(!is_interrupt(&plain_c));
    }

    #[test]
    fn test_hold_tracker_releases_stale_keys() {
        let mut holds = HoldTracker::new(250);
        let mut events = Vec::new();

        holds.touch(Key::Thrust, 0);
        holds.touch(Key::Left, 100);
        holds.expire(200, &mut events);
        assert!(events.is_empty());

        // Repeat keeps thrust alive
        holds.touch(Key::Thrust, 240);
        holds.expire(300, &mut events);
        assert!(events.is_empty());

        holds.expire(400, &mut events);
        assert_eq!(events, [InputEvent::KeyUp(Key::Left)]);

        events.clear();
        holds.expire(490, &mut events);
        assert_eq!(events, [InputEvent::KeyUp(Key::Thrust)]);

        events.clear();
        holds.expire(1000, &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_default_hold_outlasts_repeat_delay() {
        let hold_ms = Settings::default().input.release_hold_ms;
        let mut holds = HoldTracker::new(hold_ms);
        let mut events = Vec::new();

        // First repeat typically arrives 500-660ms after the press
        holds.touch(Key::Thrust, 0);
        holds.expire(660, &mut events);
        assert!(events.is_empty());

        holds.touch(Key::Thrust, 660);
        holds.expire(660 + hold_ms, &mut events);
        assert_eq!(events, [InputEvent::KeyUp(Key::Thrust)]);
    }
}
