use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::catalog::{RECIPES, Recipe};
use crate::config::Config;
use crate::filter::{CalorieLimit, filter_recipes, parse_calorie_limit};
use crate::goal::{Goal, GoalPreset};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Focus {
    Search,
    Calories,
    Recipes,
    Goals,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Search, Focus::Calories, Focus::Recipes, Focus::Goals];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Focus {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Focus {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Something clickable, recorded by the renderer for mouse hit-testing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClickTarget {
    Search,
    Calories,
    /// Index into the current filtered list.
    Card(usize),
    Goal(Goal),
    CloseDetail,
}

pub struct App {
    pub focus: Focus,

    // Filter state
    pub query: String,
    pub calorie_input: String,
    pub max_calories: CalorieLimit,

    // Selection drives the detail overlay
    pub selected: Option<&'static Recipe>,

    pub goal: Goal,
    pub goal_cursor: usize,

    // Grid navigation, columns are set by the renderer each frame
    pub grid_cursor: usize,
    pub grid_columns: usize,
    pub grid_scroll: usize,

    pub hit_areas: Vec<(Rect, ClickTarget)>,
}

impl App {
    pub fn new() -> Self {
        App {
            focus: Focus::Search,
            query: String::new(),
            calorie_input: "600".to_string(),
            max_calories: CalorieLimit::default(),
            selected: None,
            goal: Goal::default(),
            goal_cursor: Goal::default().index(),
            grid_cursor: 0,
            grid_columns: 1,
            grid_scroll: 0,
            hit_areas: vec![],
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut app = App::new();
        app.calorie_input = config.max_calories.clone();
        app.max_calories = parse_calorie_limit(&app.calorie_input);
        app.goal = config.goal;
        app.goal_cursor = config.goal.index();
        app
    }

    pub fn filtered(&self) -> Vec<&'static Recipe> {
        filter_recipes(RECIPES, &self.query, self.max_calories)
    }

    // ── Selection ──────────────────────────────────────────────────────────

    pub fn select(&mut self, recipe: &'static Recipe) {
        info!(id = recipe.id, title = recipe.title, "recipe opened");
        self.selected = Some(recipe);
    }

    pub fn clear_selection(&mut self) {
        if let Some(r) = self.selected.take() {
            info!(id = r.id, "recipe closed");
        }
    }

    pub fn detail_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn recipe_under_cursor(&self) -> Option<&'static Recipe> {
        self.filtered().get(self.grid_cursor).copied()
    }

    pub fn open_under_cursor(&mut self) {
        if let Some(r) = self.recipe_under_cursor() {
            self.select(r);
        }
    }

    // ── Goal ───────────────────────────────────────────────────────────────

    pub fn set_goal(&mut self, goal: Goal) {
        if self.goal != goal {
            info!(goal = goal.key(), "goal changed");
        }
        self.goal = goal;
        self.goal_cursor = goal.index();
    }

    pub fn goal_preset(&self) -> GoalPreset {
        self.goal.preset()
    }

    pub fn goal_cursor_left(&mut self) {
        self.goal_cursor = self.goal_cursor.saturating_sub(1);
    }

    pub fn goal_cursor_right(&mut self) {
        if self.goal_cursor + 1 < Goal::ALL.len() {
            self.goal_cursor += 1;
        }
    }

    pub fn activate_goal_cursor(&mut self) {
        self.set_goal(Goal::ALL[self.goal_cursor]);
    }

    // ── Filter inputs ──────────────────────────────────────────────────────

    pub fn query_insert_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        self.query.push(ch);
        self.on_filter_changed();
    }

    pub fn query_backspace(&mut self) {
        if self.query.pop().is_some() {
            self.on_filter_changed();
        }
    }

    pub fn calorie_insert_char(&mut self, ch: char) {
        if matches!(ch, '0'..='9' | '.' | '-' | '+' | 'e' | 'E' | ' ') {
            self.calorie_input.push(ch);
            self.on_calories_changed();
        }
    }

    pub fn calorie_backspace(&mut self) {
        if self.calorie_input.pop().is_some() {
            self.on_calories_changed();
        }
    }

    fn on_calories_changed(&mut self) {
        self.max_calories = parse_calorie_limit(&self.calorie_input);
        self.on_filter_changed();
    }

    fn on_filter_changed(&mut self) {
        let count = self.filtered().len();
        debug!(query = %self.query, limit = ?self.max_calories, matches = count, "filter updated");
        self.grid_cursor = self.grid_cursor.min(count.saturating_sub(1));
        self.grid_scroll = 0;
    }

    // ── Grid navigation ────────────────────────────────────────────────────

    pub fn grid_move(&mut self, dx: isize, dy: isize) {
        let count = self.filtered().len();
        if count == 0 {
            self.grid_cursor = 0;
            return;
        }
        let cols = self.grid_columns.max(1) as isize;
        let target = self.grid_cursor as isize + dx + dy * cols;
        if dx != 0 {
            // Horizontal moves stay within the row
            let row = self.grid_cursor as isize / cols;
            if target < row * cols || target >= (row + 1) * cols {
                return;
            }
        }
        if target >= 0 && (target as usize) < count {
            self.grid_cursor = target as usize;
        }
    }

    // ── Mouse ──────────────────────────────────────────────────────────────

    pub fn target_at(&self, x: u16, y: u16) -> Option<ClickTarget> {
        self.hit_areas
            .iter()
            .rev()
            .find(|(r, _)| x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height)
            .map(|(_, t)| *t)
    }

    pub fn click(&mut self, x: u16, y: u16) {
        let Some(target) = self.target_at(x, y) else {
            return;
        };
        if self.detail_open() {
            // The overlay is modal
            if target == ClickTarget::CloseDetail {
                self.clear_selection();
            }
            return;
        }
        match target {
            ClickTarget::Search => self.focus = Focus::Search,
            ClickTarget::Calories => self.focus = Focus::Calories,
            ClickTarget::Card(idx) => {
                self.focus = Focus::Recipes;
                self.grid_cursor = idx;
                self.open_under_cursor();
            }
            ClickTarget::Goal(goal) => {
                self.focus = Focus::Goals;
                self.set_goal(goal);
            }
            ClickTarget::CloseDetail => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
