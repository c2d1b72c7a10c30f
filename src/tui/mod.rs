// TUI module: live relative time card in the terminal
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;

use crate::card::RelativeTimeCard;
use crate::clock::SystemClock;
use crate::models::{CardOptions, Instant};

/// Run the interactive card for `instant` until the user quits
pub fn run_watch(instant: Instant, options: CardOptions) -> Result<()> {
    let mut manager = TerminalManager::new()?;

    let card = RelativeTimeCard::new(instant, options);
    let mut app = App::new(card, SystemClock);

    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}
