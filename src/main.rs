pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod goal;
pub mod logging;
pub mod render;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use app::{App, Focus};
use config::Config;
use error::AppError;
use goal::Goal;

fn main() -> Result<(), AppError> {
    let config = Config::load()?;
    logging::init(&config)?;
    config.log_summary();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::from_config(&config);
    info!(recipes = catalog::RECIPES.len(), "session started");
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    finish(result)
}

/// Logs how the session ended and hands any failure back to `main`.
fn finish(result: Result<(), AppError>) -> Result<(), AppError> {
    match &result {
        Ok(()) => info!("session ended"),
        Err(e) => error!(error = %e, "session aborted"),
    }
    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), AppError> {
    loop {
        terminal.draw(|f| render::render(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if handle_key(app, key.code, key.modifiers) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.click(mouse.column, mouse.row);
            }
            _ => {}
        }
    }
}

/// Applies one key press. Returns true when the session should end.
fn handle_key(app: &mut App, code: KeyCode, mods: KeyModifiers) -> bool {
    // Global: Ctrl+C always quits
    if code == KeyCode::Char('c') && mods.contains(KeyModifiers::CONTROL) {
        return true;
    }

    // The detail overlay is modal
    if app.detail_open() {
        handle_detail_keys(app, code);
        return false;
    }

    match code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return false;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return false;
        }
        _ => {}
    }

    match app.focus {
        Focus::Search => handle_search_keys(app, code, mods),
        Focus::Calories => handle_calorie_keys(app, code),
        Focus::Recipes => return handle_recipe_keys(app, code),
        Focus::Goals => return handle_goal_keys(app, code),
    }
    false
}

// ── Focus::Search ──────────────────────────────────────────────────────────────

fn handle_search_keys(app: &mut App, code: KeyCode, mods: KeyModifiers) {
    match code {
        KeyCode::Backspace => app.query_backspace(),
        KeyCode::Enter | KeyCode::Down | KeyCode::Esc => app.focus = Focus::Recipes,
        KeyCode::Char(c) if !mods.contains(KeyModifiers::CONTROL) => app.query_insert_char(c),
        _ => {}
    }
}

// ── Focus::Calories ────────────────────────────────────────────────────────────

fn handle_calorie_keys(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Backspace => app.calorie_backspace(),
        KeyCode::Enter | KeyCode::Down | KeyCode::Esc => app.focus = Focus::Recipes,
        KeyCode::Char(c) => app.calorie_insert_char(c),
        _ => {}
    }
}

// ── Focus::Recipes ─────────────────────────────────────────────────────────────

fn handle_recipe_keys(app: &mut App, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('q') => return true,
        KeyCode::Up | KeyCode::Char('k') => app.grid_move(0, -1),
        KeyCode::Down | KeyCode::Char('j') => app.grid_move(0, 1),
        KeyCode::Left | KeyCode::Char('h') => app.grid_move(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => app.grid_move(1, 0),
        KeyCode::Enter | KeyCode::Char(' ') => app.open_under_cursor(),
        KeyCode::Char('/') => app.focus = Focus::Search,
        _ => {}
    }
    false
}

// ── Focus::Goals ───────────────────────────────────────────────────────────────

fn handle_goal_keys(app: &mut App, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('q') => return true,
        KeyCode::Left | KeyCode::Char('h') => app.goal_cursor_left(),
        KeyCode::Right | KeyCode::Char('l') => app.goal_cursor_right(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_goal_cursor(),
        KeyCode::Char('1') => app.set_goal(Goal::ALL[0]),
        KeyCode::Char('2') => app.set_goal(Goal::ALL[1]),
        _ => {}
    }
    false
}

// ── Detail overlay ─────────────────────────────────────────────────────────────

fn handle_detail_keys(app: &mut App, code: KeyCode) {
    if matches!(
        code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q')
    ) {
        app.clear_selection();
    }
}
