use regex::Regex;
use std::sync::OnceLock;

use crate::catalog::Recipe;

static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Upper calorie bound produced by coercing the numeric input field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalorieLimit {
    /// Recipes with at most this many calories pass.
    Max(i64),
    /// The field is empty: nothing is excluded by calories.
    Unbounded,
    /// The field holds text that is not a number: nothing passes.
    Invalid,
}

impl CalorieLimit {
    pub fn admits(self, calories: u32) -> bool {
        match self {
            CalorieLimit::Max(max) => i64::from(calories) <= max,
            CalorieLimit::Unbounded => true,
            CalorieLimit::Invalid => false,
        }
    }
}

impl Default for CalorieLimit {
    fn default() -> Self {
        CalorieLimit::Max(600)
    }
}

/// Coerces the calorie field text. Fractions are floored since calories are whole numbers.
pub fn parse_calorie_limit(input: &str) -> CalorieLimit {
    let s = input.trim();
    if s.is_empty() {
        return CalorieLimit::Unbounded;
    }

    let re = NUMBER_REGEX.get_or_init(|| {
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").unwrap()
    });
    if !re.is_match(s) {
        return CalorieLimit::Invalid;
    }

    match s.parse::<f64>() {
        // `as` saturates, so "1e400" becomes i64::MAX
        Ok(val) => CalorieLimit::Max(val.floor() as i64),
        Err(_) => CalorieLimit::Invalid,
    }
}

pub fn matches(recipe: &Recipe, query_lower: &str, limit: CalorieLimit) -> bool {
    recipe.title.to_lowercase().contains(query_lower) && limit.admits(recipe.calories)
}

/// Order-preserving subset of `catalog` whose titles contain `query`
/// (case-insensitively) and whose calories pass `limit`.
pub fn filter_recipes<'a>(catalog: &'a [Recipe], query: &str, limit: CalorieLimit) -> Vec<&'a Recipe> {
    let query_lower = query.to_lowercase();
    catalog
        .iter()
        .filter(|r| matches(r, &query_lower, limit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RECIPES;

    fn ids(list: &[&Recipe]) -> Vec<u32> {
        list.iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_query_unbounded_returns_full_catalog() {
        let all = filter_recipes(RECIPES, "", CalorieLimit::Unbounded);
        assert_eq!(all.len(), RECIPES.len());
        assert!(all.iter().zip(RECIPES).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn salmon_query() {
        let found = filter_recipes(RECIPES, "лосось", CalorieLimit::Max(600));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Запечённый лосось с овощами");
    }

    #[test]
    fn threshold_200_keeps_only_baked_apples() {
        let found = filter_recipes(RECIPES, "", CalorieLimit::Max(200));
        assert_eq!(ids(&found), vec![8]);
        assert_eq!(found[0].calories, 180);
    }

    #[test]
    fn query_is_case_insensitive() {
        let found = filter_recipes(RECIPES, "ОВСЯНКА", CalorieLimit::Max(600));
        assert_eq!(ids(&found), vec![1]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let found = filter_recipes(RECIPES, "", CalorieLimit::Max(320));
        assert_eq!(ids(&found), vec![1, 4, 5, 6, 8]);
    }

    #[test]
    fn query_and_threshold_combine() {
        let found = filter_recipes(RECIPES, "запечён", CalorieLimit::Max(600));
        assert_eq!(ids(&found), vec![3, 8]);
        let found = filter_recipes(RECIPES, "запечён", CalorieLimit::Max(500));
        assert_eq!(ids(&found), vec![8]);
    }

    #[test]
    fn negative_or_invalid_limit_matches_nothing() {
        assert!(filter_recipes(RECIPES, "", CalorieLimit::Max(-1)).is_empty());
        assert!(filter_recipes(RECIPES, "", CalorieLimit::Invalid).is_empty());
    }

    #[test]
    fn result_is_always_ordered_subsequence() {
        let queries = ["", "с", "О", "суп", "zzz", "запечён"];
        let limits = [
            CalorieLimit::Max(-5),
            CalorieLimit::Max(0),
            CalorieLimit::Max(250),
            CalorieLimit::Max(600),
            CalorieLimit::Unbounded,
            CalorieLimit::Invalid,
        ];
        for q in queries {
            for limit in limits {
                let found = ids(&filter_recipes(RECIPES, q, limit));
                assert!(found.windows(2).all(|w| w[0] < w[1]), "{q:?} {limit:?}");
                let expected: Vec<u32> = RECIPES
                    .iter()
                    .filter(|r| r.title.to_lowercase().contains(&q.to_lowercase()) && limit.admits(r.calories))
                    .map(|r| r.id)
                    .collect();
                assert_eq!(found, expected);
            }
        }
    }

    #[test]
    fn coercion_policy() {
        assert_eq!(parse_calorie_limit("600"), CalorieLimit::Max(600));
        assert_eq!(parse_calorie_limit("  250 "), CalorieLimit::Max(250));
        assert_eq!(parse_calorie_limit("+40"), CalorieLimit::Max(40));
        assert_eq!(parse_calorie_limit("-10"), CalorieLimit::Max(-10));
        assert_eq!(parse_calorie_limit("450.9"), CalorieLimit::Max(450));
        assert_eq!(parse_calorie_limit("-0.5"), CalorieLimit::Max(-1));
        assert_eq!(parse_calorie_limit("1e3"), CalorieLimit::Max(1000));
        assert_eq!(parse_calorie_limit(".5"), CalorieLimit::Max(0));
        assert_eq!(parse_calorie_limit("1e400"), CalorieLimit::Max(i64::MAX));
        assert_eq!(parse_calorie_limit(""), CalorieLimit::Unbounded);
        assert_eq!(parse_calorie_limit("   "), CalorieLimit::Unbounded);
        assert_eq!(parse_calorie_limit("abc"), CalorieLimit::Invalid);
        assert_eq!(parse_calorie_limit("1-2"), CalorieLimit::Invalid);
        assert_eq!(parse_calorie_limit("inf"), CalorieLimit::Invalid);
        assert_eq!(parse_calorie_limit("."), CalorieLimit::Invalid);
    }
}
