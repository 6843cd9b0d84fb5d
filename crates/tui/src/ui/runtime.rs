//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a single event loop that handles input and periodic ticks.
//! - Route events to the main view and execute returned `Effect`s.
//! - Render only after something happened.
//!
//! A dedicated input thread blocks on `crossterm::event::read()` and
//! forwards events over a channel (mouse moves throttled to one per
//! 16 ms), which keeps resize delivery reliable across terminals.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*};
use samix_data::DataStore;
use samix_types::{Effect, Msg};
use samix_util::UserPreferences;
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};

use crate::app::App;
use crate::ui::main_component::MainView;

/// Spawn a dedicated thread that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    std::thread::spawn(move || {
        let throttle = Duration::from_millis(16);
        let mut last_mouse_move = Instant::now();
        loop {
            match event::read() {
                Ok(event) => {
                    let is_mouse_move = matches!(&event, Event::Mouse(m) if m.kind == MouseEventKind::Moved);
                    if is_mouse_move {
                        if last_mouse_move.elapsed() < throttle {
                            continue;
                        }
                        last_mouse_move = Instant::now();
                    }
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    tracing::warn!("Failed to read terminal event: {error}");
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Handle raw crossterm input events and update `App`/components.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Executes reported effects. Navigation is fire-and-forget: the route
/// changes, the sidebar pin syncs, and the content view is swapped.
fn process_effects(app: &mut App, main_view: &mut MainView, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::Navigate(path) => {
                app.navigate(&path);
                main_view.sync_content(app);
            }
        }
    }
}

/// Entry point for the TUI runtime: sets up the terminal, spawns the
/// input thread, runs the event loop, and performs cleanup on exit.
pub async fn run_app(store: DataStore, prefs: UserPreferences) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut app = App::new(store, prefs);
    let mut main_view = MainView::new(&app);
    let mut terminal = setup_terminal()?;

    // seed the viewport class before the first frame
    let mut last_size = crossterm::terminal::size().ok();
    if let Some((width, height)) = last_size {
        app.update(&Msg::Resize(width, height));
    }

    let mut ticker = time::interval(Duration::from_millis(5000));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(&mut terminal, &mut app, &mut main_view)?;

    loop {
        let mut needs_render = false;
        let mut effects: Vec<Effect> = Vec::new();

        tokio::select! {
            maybe_event = input_receiver.recv() => {
                match maybe_event {
                    Some(event) => {
                        if let Event::Key(key_event) = &event
                            && key_event.code == KeyCode::Char('c')
                            && key_event.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            break;
                        }
                        effects.extend(handle_input_event(&mut app, &mut main_view, event));
                        needs_render = true;
                    }
                    // input channel closed; shut down cleanly
                    None => break,
                }
            }

            _ = ticker.tick() => {
                effects.extend(main_view.handle_message(&mut app, Msg::Tick));
                needs_render = !effects.is_empty();
            }

            _ = signal::ctrl_c() => { break; }
        }

        // Fallback: detect terminal size changes even if no explicit
        // Resize event was received.
        if let Ok((width, height)) = crossterm::terminal::size()
            && last_size != Some((width, height))
        {
            last_size = Some((width, height));
            effects.extend(main_view.handle_message(&mut app, Msg::Resize(width, height)));
            needs_render = true;
        }

        process_effects(&mut app, &mut main_view, effects);

        if needs_render {
            render(&mut terminal, &mut app, &mut main_view)?;
        }
    }

    cleanup_terminal(&mut terminal)?;
    Ok(())
}
