use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, ClickTarget, Focus};
use crate::catalog::{RECIPES, Recipe};
use crate::filter::CalorieLimit;
use crate::goal::Goal;

// ── Colors ─────────────────────────────────────────────────────────────────

const BLUE: Color = Color::Rgb(122, 162, 247);
const GREEN: Color = Color::Rgb(158, 206, 106);
const DARK_GREEN: Color = Color::Rgb(41, 66, 43);
const ORANGE: Color = Color::Rgb(255, 158, 100);
const YELLOW: Color = Color::Rgb(224, 175, 104);
const DIM: Color = Color::Rgb(86, 95, 137);
const RED: Color = Color::Rgb(247, 118, 142);
const DARK_BLUE: Color = Color::Rgb(192, 202, 245);

// ── Layout constants ────────────────────────────────────────────────────────

const CARD_H: u16 = 6;
const GOALS_H: u16 = 7;
const DETAIL_W: u16 = 60;

/// Column count for the recipe grid at a given terminal width.
pub fn grid_columns(width: u16) -> usize {
    match width {
        0..80 => 1,
        80..120 => 2,
        _ => 3,
    }
}

// ── Main render entry point ─────────────────────────────────────────────────

pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    app.hit_areas.clear();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(CARD_H),
            Constraint::Length(GOALS_H),
            Constraint::Length(3),
        ])
        .split(size);

    render_header(f, chunks[0]);
    render_inputs(f, app, chunks[1]);
    render_recipe_grid(f, app, chunks[2]);
    render_goals(f, app, chunks[3]);
    render_footer(f, app, chunks[4]);

    if let Some(recipe) = app.selected {
        render_detail_overlay(f, app, recipe);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let title = Span::styled(
        "🥗 Здоровые рецепты",
        Style::default().fg(GREEN).add_modifier(Modifier::BOLD),
    );
    f.render_widget(Paragraph::new(Line::from(title)), area);
}

// ── Filter inputs ─────────────────────────────────────────────────────────────

fn render_inputs(f: &mut Frame, app: &mut App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_input_field(
        f,
        cols[0],
        "Поиск",
        &app.query,
        "Поиск рецепта...",
        app.focus == Focus::Search,
        false,
    );
    render_input_field(
        f,
        cols[1],
        "Калории",
        &app.calorie_input,
        "Макс. калорий",
        app.focus == Focus::Calories,
        app.max_calories == CalorieLimit::Invalid,
    );

    app.hit_areas.push((cols[0], ClickTarget::Search));
    app.hit_areas.push((cols[1], ClickTarget::Calories));
}

fn render_input_field(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    active: bool,
    invalid: bool,
) {
    let border_color = if invalid {
        RED
    } else if active {
        ORANGE
    } else {
        BLUE
    };
    let title = if invalid { format!("{title} (не число)") } else { title.to_string() };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(title, Style::default().fg(border_color)));

    let mut spans = if value.is_empty() {
        vec![Span::styled(placeholder.to_string(), Style::default().fg(DIM))]
    } else {
        vec![Span::styled(value.to_string(), Style::default().fg(DARK_BLUE))]
    };
    if active {
        spans.push(Span::styled("_", Style::default().fg(ORANGE)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

// ── Recipe grid ───────────────────────────────────────────────────────────────

fn render_recipe_grid(f: &mut Frame, app: &mut App, area: Rect) {
    let recipes = app.filtered();
    let cols = grid_columns(area.width);
    app.grid_columns = cols;

    if recipes.is_empty() {
        let p = Paragraph::new(Line::styled("Ничего не найдено", Style::default().fg(DIM)));
        f.render_widget(p, area);
        return;
    }

    let rows_visible = ((area.height / CARD_H) as usize).max(1);
    let cursor_row = app.grid_cursor / cols;
    if cursor_row < app.grid_scroll {
        app.grid_scroll = cursor_row;
    }
    if cursor_row >= app.grid_scroll + rows_visible {
        app.grid_scroll = cursor_row + 1 - rows_visible;
    }
    // A taller or wider screen may now fit rows that were scrolled away
    let total_rows = recipes.len().div_ceil(cols);
    app.grid_scroll = app.grid_scroll.min(total_rows.saturating_sub(rows_visible));

    let card_w = area.width / cols as u16;
    let grid_active = app.focus == Focus::Recipes;

    for (idx, recipe) in recipes.iter().enumerate() {
        let row = idx / cols;
        if row < app.grid_scroll || row >= app.grid_scroll + rows_visible {
            continue;
        }
        let x = area.x + (idx % cols) as u16 * card_w;
        let y = area.y + (row - app.grid_scroll) as u16 * CARD_H;
        let h = CARD_H.min(area.bottom().saturating_sub(y));
        if h == 0 {
            continue;
        }
        let rect = Rect::new(x, y, card_w, h);
        render_card(f, recipe, rect, grid_active && idx == app.grid_cursor);
        app.hit_areas.push((rect, ClickTarget::Card(idx)));
    }
}

fn render_card(f: &mut Frame, recipe: &Recipe, area: Rect, highlighted: bool) {
    let border_color = if highlighted { ORANGE } else { BLUE };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let mut chips: Vec<Span> = Vec::new();
    for tag in recipe.tags {
        chips.push(Span::styled(format!(" {tag} "), Style::default().fg(GREEN).bg(DARK_GREEN)));
        chips.push(Span::raw(" "));
    }

    let action_style = if highlighted {
        Style::default().fg(Color::Black).bg(ORANGE).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ORANGE)
    };

    let lines = vec![
        Line::styled(recipe.title, Style::default().fg(DARK_BLUE).add_modifier(Modifier::BOLD)),
        Line::styled(format!("Калорийность: {} ккал", recipe.calories), Style::default().fg(DIM)),
        Line::from(chips),
        Line::from(Span::styled(" Посмотреть рецепт ", action_style)),
    ];

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

// ── Goals ─────────────────────────────────────────────────────────────────────

fn render_goals(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(
            "🎯 Цель питания",
            Style::default().fg(YELLOW).add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    let mut spans: Vec<Span> = Vec::new();
    let mut x = chunks[1].x;
    for (i, goal) in Goal::ALL.iter().enumerate() {
        let label = goal.preset().label;
        let span = if *goal == app.goal {
            Span::styled(
                format!(" {label} "),
                Style::default().fg(Color::Black).bg(GREEN).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!("[{label}]"), Style::default().fg(DARK_BLUE))
        };
        let span = if app.focus == Focus::Goals && i == app.goal_cursor {
            span.patch_style(Style::default().add_modifier(Modifier::UNDERLINED))
        } else {
            span
        };
        let w = span.width() as u16;
        app.hit_areas.push((Rect::new(x, chunks[1].y, w, 1), ClickTarget::Goal(*goal)));
        x = x.saturating_add(w + 2);
        spans.push(span);
        spans.push(Span::raw("  "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);

    let preset = app.goal_preset();
    let border_color = if app.focus == Focus::Goals { ORANGE } else { BLUE };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(preset.label, Style::default().fg(border_color)));
    let bold = Style::default().fg(DARK_BLUE).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(vec![Span::raw("Белки: "), Span::styled(format!("{} г", preset.protein), bold)]),
        Line::from(vec![Span::raw("Жиры: "), Span::styled(format!("{} г", preset.fat), bold)]),
        Line::from(vec![Span::raw("Углеводы: "), Span::styled(format!("{} г", preset.carbs), bold)]),
    ];
    let panel = Rect { width: chunks[2].width.min(40), ..chunks[2] };
    f.render_widget(Paragraph::new(Text::from(lines)).block(block), panel);
}

// ── Footer ────────────────────────────────────────────────────────────────────

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GREEN));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let help = if app.detail_open() {
        "Esc/Enter Закрыть".to_string()
    } else {
        match app.focus {
            Focus::Search | Focus::Calories => "Tab Фокус  Ввод текста  Enter К рецептам  Ctrl+C Выход".to_string(),
            Focus::Recipes => "Tab Фокус  ←→↑↓/hjkl Выбор  Enter Открыть  q Выход".to_string(),
            Focus::Goals => "Tab Фокус  ←→ Выбор  Enter Применить  1/2 Цель  q Выход".to_string(),
        }
    };

    let mut spans = vec![
        Span::styled(help, Style::default().fg(YELLOW)),
        Span::styled(
            format!("  │  Найдено: {} из {}", app.filtered().len(), RECIPES.len()),
            Style::default().fg(DIM),
        ),
    ];
    if app.max_calories == CalorieLimit::Invalid {
        spans.push(Span::styled("  │  Калорийность должна быть числом", Style::default().fg(RED)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

// ── Detail overlay ────────────────────────────────────────────────────────────

fn render_detail_overlay(f: &mut Frame, app: &mut App, recipe: &Recipe) {
    let screen = f.area();
    f.buffer_mut().set_style(screen, Style::default().fg(DIM));

    let height = 9 + recipe.ingredients.len() as u16;
    let area = overlay_rect(screen, DETAIL_W, height);
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ORANGE))
        .title(Span::styled(recipe.title, Style::default().fg(ORANGE).add_modifier(Modifier::BOLD)));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let bold = Style::default().fg(DARK_BLUE).add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = vec![
        Line::styled(recipe.title, Style::default().fg(DARK_BLUE).add_modifier(Modifier::BOLD)),
        Line::styled(format!("Калории: {} ккал", recipe.calories), Style::default().fg(DARK_BLUE)),
        Line::from(vec![
            Span::styled("Польза: ", bold),
            Span::styled(recipe.benefits, Style::default().fg(DARK_BLUE)),
        ]),
        Line::styled("Ингредиенты:", bold),
    ];
    for item in recipe.ingredients {
        lines.push(Line::styled(format!("  • {item}"), Style::default().fg(DARK_BLUE)));
    }

    f.render_widget(Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false }), chunks[0]);

    let close = Paragraph::new(Line::from(Span::styled(
        "[ Закрыть ]",
        Style::default().fg(ORANGE).add_modifier(Modifier::BOLD),
    )))
    .centered();
    f.render_widget(close, chunks[1]);
    app.hit_areas.push((chunks[1], ClickTarget::CloseDetail));
}

fn overlay_rect(screen: Rect, min_w: u16, min_h: u16) -> Rect {
    let w = min_w.min(screen.width.saturating_sub(4));
    let h = min_h.min(screen.height.saturating_sub(4));
    Rect {
        x: screen.x + (screen.width - w) / 2,
        y: screen.y + (screen.height - h) / 2,
        width: w,
        height: h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn column_breakpoints() {
        assert_eq!(grid_columns(60), 1);
        assert_eq!(grid_columns(80), 2);
        assert_eq!(grid_columns(119), 2);
        assert_eq!(grid_columns(160), 3);
    }

    #[test]
    fn full_screen_shows_catalog_and_goal() {
        let mut app = App::new();
        let screen = draw(&mut app, 160, 50);
        assert!(screen.contains("Здоровые рецепты"));
        assert!(screen.contains("Поиск рецепта..."));
        for r in RECIPES {
            assert!(screen.contains(r.title), "missing {}", r.title);
        }
        assert!(screen.contains("Калорийность: 520 ккал"));
        assert!(screen.contains("Посмотреть рецепт"));
        assert!(screen.contains("Белки: 110 г"));
        assert!(screen.contains("Углеводы: 200 г"));
        assert!(screen.contains("Набор массы"));
        assert_eq!(app.grid_columns, 3);
    }

    #[test]
    fn goal_panel_follows_active_goal() {
        let mut app = App::new();
        app.set_goal(Goal::Mass);
        let screen = draw(&mut app, 160, 50);
        assert!(screen.contains("Белки: 150 г"));
        assert!(screen.contains("Жиры: 80 г"));
        assert!(screen.contains("Углеводы: 300 г"));
    }

    #[test]
    fn empty_result_message() {
        let mut app = App::new();
        app.query = "zzz".to_string();
        let screen = draw(&mut app, 100, 40);
        assert!(screen.contains("Ничего не найдено"));
        assert!(!app.hit_areas.iter().any(|(_, t)| matches!(t, ClickTarget::Card(_))));
    }

    #[test]
    fn detail_overlay_shows_recipe() {
        let mut app = App::new();
        app.select(find(3).unwrap());
        let screen = draw(&mut app, 120, 50);
        assert!(screen.contains("Калории: 520 ккал"));
        assert!(screen.contains("Источник омега-3"));
        assert!(screen.contains("брокколи"));
        assert!(screen.contains("Закрыть"));

        let close = app
            .hit_areas
            .iter()
            .find(|(_, t)| *t == ClickTarget::CloseDetail)
            .map(|(r, _)| *r)
            .unwrap();
        app.click(close.x, close.y);
        assert!(!app.detail_open());
        let screen = draw(&mut app, 120, 50);
        assert!(!screen.contains("Калории: 520 ккал"));
    }

    #[test]
    fn clicking_a_rendered_card_opens_it() {
        let mut app = App::new();
        draw(&mut app, 160, 50);
        let rect = app
            .hit_areas
            .iter()
            .find(|(_, t)| *t == ClickTarget::Card(4))
            .map(|(r, _)| *r)
            .unwrap();
        app.click(rect.x + 1, rect.y + 1);
        assert_eq!(app.selected.map(|r| r.id), Some(5));
    }

    #[test]
    fn clicking_goal_button() {
        let mut app = App::new();
        draw(&mut app, 160, 50);
        let rect = app
            .hit_areas
            .iter()
            .find(|(_, t)| *t == ClickTarget::Goal(Goal::Mass))
            .map(|(r, _)| *r)
            .unwrap();
        app.click(rect.x, rect.y);
        assert_eq!(app.goal, Goal::Mass);
    }

    #[test]
    fn narrow_terminal_scrolls_to_cursor() {
        let mut app = App::new();
        app.focus = Focus::Recipes;
        draw(&mut app, 60, 30);
        assert_eq!(app.grid_columns, 1);
        for _ in 0..7 {
            app.grid_move(0, 1);
        }
        let screen = draw(&mut app, 60, 30);
        assert!(app.grid_scroll > 0);
        assert!(screen.contains("Запечённые яблоки с корицей"));
        assert!(!screen.contains("Овсянка с ягодами"));
    }

    #[test]
    fn growing_the_screen_unscrolls_the_grid() {
        let mut app = App::new();
        app.focus = Focus::Recipes;
        draw(&mut app, 60, 30);
        for _ in 0..7 {
            app.grid_move(0, 1);
        }
        draw(&mut app, 60, 30);
        assert!(app.grid_scroll > 0);

        let screen = draw(&mut app, 160, 60);
        assert_eq!(app.grid_scroll, 0);
        assert!(screen.contains("Овсянка с ягодами"));
        assert!(screen.contains("Запечённые яблоки с корицей"));
    }

    #[test]
    fn invalid_calories_hint_survives_other_keys() {
        let mut app = App::new();
        app.calorie_input.clear();
        app.calorie_insert_char('e');
        app.focus = app.focus.next();
        let screen = draw(&mut app, 160, 40);
        assert!(screen.contains("Калорийность должна быть числом"));

        app.calorie_backspace();
        let screen = draw(&mut app, 160, 40);
        assert!(!screen.contains("Калорийность должна быть числом"));
    }

    #[test]
    fn invalid_calories_flagged() {
        let mut app = App::new();
        app.calorie_input.clear();
        app.calorie_insert_char('e');
        let screen = draw(&mut app, 120, 40);
        assert!(screen.contains("не число"));
        assert!(screen.contains("Ничего не найдено"));
    }
}
