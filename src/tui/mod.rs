//! Terminal front end for the alert host

use anyhow::Result;
use modal_alert::app::{Event, Handler};
use modal_alert::App;
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};
use std::io;
use std::time::Instant;
use tracing::info;

/// Present the alert and run until it is dismissed or the user quits
pub fn run(mut app: App, tick_rate_ms: u64) -> Result<App> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = Handler::new(tick_rate_ms);
    let result = run_loop(&mut terminal, &mut app, &event_handler);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result.map(|()| app)
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &Handler,
) -> Result<()> {
    app.present()?;
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| draw(frame, app))?;

        let event = event_handler.next()?;
        let now = Instant::now();
        app.tick(now.duration_since(last_frame));
        last_frame = now;

        match event {
            Event::Key(key) => app.handle_key(key.code, key.modifiers)?,
            Event::Mouse(mouse) => app.handle_mouse(mouse)?,
            Event::Tick | Event::Resize(_, _) => {}
        }

        if app.should_quit {
            info!(chosen = app.chosen_title(), "Leaving");
            break;
        }
    }

    Ok(())
}

/// Area the alert covers; the last row holds the key hints
fn alert_area(area: Rect) -> (Rect, Rect) {
    let [body, hints] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    (body, hints)
}

/// Lay out for the frame if its size changed, then draw
pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let (body, hints) = alert_area(frame.area());
    if body != app.area() {
        app.resize(body);
    }

    frame.render_widget(
        Paragraph::new(app.keys.hint_line()).style(Style::default().fg(Color::DarkGray)),
        hints,
    );
    frame.render_widget(app.widget(), body);
}
