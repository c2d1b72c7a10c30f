//! Terminal host for a [`RelativeTimeCard`].
//!
//! The host supplies what the card expects from its environment: a timer table
//! ([`IntervalScheduler`]), an event loop that sleeps until the next timer or
//! disclosure deadline, and hover/focus gestures translated from mouse and keyboard
//! input.

use std::time::Duration;

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::Rect;

use super::events::{Action, poll_event};
use super::layout::{CardLayout, contains};
use super::rendering::{RenderState, render_ui};
use crate::card::{IntervalScheduler, RelativeTimeCard};
use crate::clock::Clock;
use crate::models::Instant;

/// Longest the loop blocks on input, so resizes and clock drift are picked up
const MAX_POLL_MS: u64 = 250;

pub struct App<C: Clock> {
    card: RelativeTimeCard,
    scheduler: IntervalScheduler<C>,
    trigger_area: Rect,
    should_quit: bool,
    needs_redraw: bool,
}

impl<C: Clock> App<C> {
    pub fn new(card: RelativeTimeCard, clock: C) -> Self {
        Self {
            card,
            scheduler: IntervalScheduler::new(clock),
            trigger_area: Rect::default(),
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub fn card(&self) -> &RelativeTimeCard {
        &self.card
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let now = self.scheduler.now();
        self.card.mount(&mut self.scheduler, now);

        let result = self.event_loop(terminal);

        self.card.unmount(&mut self.scheduler);
        result
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.tick();

            if self.needs_redraw {
                self.draw(terminal)?;
            }

            let action = poll_event(self.poll_timeout())?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Fire due timers and apply elapsed disclosure transitions
    fn tick(&mut self) {
        let now = self.scheduler.now();
        for id in self.scheduler.due() {
            if self.card.on_timer(id, now) {
                self.needs_redraw = true;
            }
        }

        if let Some(open) = self.card.disclosure_mut().poll(now) {
            tracing::debug!(open, "disclosure changed");
            self.needs_redraw = true;
        }
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let trigger = self.card.trigger_label();
        let views = self.card.timezone_views();
        let disclosure = self.card.disclosure();
        let state = RenderState {
            trigger: &trigger,
            label: self.card.label(),
            views: &views,
            open: disclosure.is_open(),
            focused: disclosure.is_focused(),
            hovered: disclosure.is_hovered(),
        };

        let mut trigger_area = self.trigger_area;
        terminal.draw(|f| {
            let layout = CardLayout::new(f.area());
            trigger_area = layout.trigger_area;
            render_ui(f, &layout, &state);
        })?;

        self.trigger_area = trigger_area;
        self.needs_redraw = false;
        Ok(())
    }

    /// Time until the nearest timer or disclosure deadline, capped at [`MAX_POLL_MS`]
    fn poll_timeout(&self) -> Duration {
        let now = self.scheduler.now();
        let cap = Duration::from_millis(MAX_POLL_MS);

        [self.scheduler.next_deadline(), self.card.disclosure().next_deadline()]
            .into_iter()
            .flatten()
            .map(|deadline| until(now, deadline))
            .min()
            .map_or(cap, |wait| wait.min(cap))
    }

    fn handle_action(&mut self, action: Action) {
        let now = self.scheduler.now();
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleFocus => {
                let disclosure = self.card.disclosure_mut();
                if disclosure.is_focused() {
                    disclosure.blur(now);
                } else {
                    disclosure.focus(now);
                }
                self.needs_redraw = true;
            }
            Action::TogglePin => {
                let disclosure = self.card.disclosure_mut();
                let open = !disclosure.is_open();
                if let Some(open) = disclosure.set_open(open) {
                    tracing::debug!(open, "disclosure pinned");
                    self.needs_redraw = true;
                }
            }
            Action::PointerMove(column, row) => {
                let inside = contains(self.trigger_area, column, row);
                let disclosure = self.card.disclosure_mut();
                if inside != disclosure.is_hovered() {
                    if inside {
                        disclosure.pointer_enter(now);
                    } else {
                        disclosure.pointer_leave(now);
                    }
                    self.needs_redraw = true;
                }
            }
            Action::Resize => self.needs_redraw = true,
            Action::None => {}
        }
    }
}

fn until(now: Instant, deadline: Instant) -> Duration {
    Duration::from_millis(u64::try_from(deadline.since(now)).unwrap_or(0))
}
