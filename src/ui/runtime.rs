use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::view::draw;
use crate::ui::view_model::GreetingViewModel;

/// Run the UI event loop until the user quits.
///
/// The loop owns the terminal; fetches run as spawned tasks so drawing
/// never blocks on the effect.
pub async fn run(view_model: Arc<GreetingViewModel>, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new(tick_rate);
    let mut state_rx = view_model.subscribe();

    loop {
        let state = state_rx.borrow_and_update().clone();
        terminal.draw(|frame| draw(frame, &state))?;

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => {
                    if is_quit(&key) {
                        break;
                    }
                    if is_fetch(&key) {
                        // One key action, one trigger.
                        let vm = Arc::clone(&view_model);
                        tokio::spawn(async move { vm.trigger_fetch().await });
                    }
                }
                Some(AppEvent::Tick) | Some(AppEvent::Resize) => {}
                None => break,
            },
            _ = state_rx.changed() => {}
        }
    }

    drop(guard);
    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn is_fetch(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press && matches!(key.code, KeyCode::Char('f') | KeyCode::Enter)
}
