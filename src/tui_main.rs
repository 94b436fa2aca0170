use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyModifiers, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc};
use tokio::sync::Mutex;

use chess_cards::{
    api::PlayerSource,
    cards::CardController,
    config::Settings,
    tui::{ui, App, Event as TuiEvent, EventHandler},
};

pub async fn run_tui(settings: Settings, source: Arc<dyn PlayerSource>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = Arc::new(Mutex::new(App::new(&settings)));
    let events = EventHandler::new(settings.animation.tick_rate_ms);

    // One task per card; each writes into the shared app as lookups land.
    for (index, spec) in settings.cards.iter().cloned().enumerate() {
        let controller = CardController::new(index, spec, &settings.card);
        let source = Arc::clone(&source);
        let app = Arc::clone(&app);
        tokio::spawn(async move {
            controller.run(source.as_ref(), app.as_ref()).await;
        });
    }

    terminal.clear()?;

    let res = run_app(&mut terminal, app, events).await;

    // Always restore terminal state, even if there was an error
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: Arc<Mutex<App>>,
    mut events: EventHandler,
) -> Result<()> {
    loop {
        {
            let app = app.lock().await;
            if app.should_quit {
                return Ok(());
            }
            terminal.draw(|f| ui::draw(f, &app))?;
        }

        let Some(event) = events.next().await else {
            return Ok(());
        };
        let mut app = app.lock().await;

        match event {
            TuiEvent::Tick(elapsed) => app.tick(elapsed),
            TuiEvent::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    app.toggle_cards();
                }
                KeyCode::Char('f') => {
                    app.flip_selected();
                }
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.select_next(),
                KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.select_previous(),
                _ => {}
            },
            TuiEvent::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    let size = terminal.size()?;
                    let areas = ui::layout_areas(size, &app);
                    if let Some(index) = ui::card_at(&areas, mouse.column, mouse.row) {
                        app.flip(index);
                    } else if areas.button.intersects(ratatui::layout::Rect::new(mouse.column, mouse.row, 1, 1)) {
                        app.toggle_cards();
                    }
                }
            }
            TuiEvent::Resize(_, _) => {
                // Terminal was resized, redraw will happen automatically
            }
        }
    }
}
