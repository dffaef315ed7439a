#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoalPreset {
    pub label: &'static str,
    pub protein: u32,
    pub fat: u32,
    pub carbs: u32,
}

/// Macronutrient goal. Each variant maps to exactly one preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Goal {
    Mass,
    #[default]
    Pp,
}

impl Goal {
    /// Button order on screen.
    pub const ALL: [Goal; 2] = [Goal::Mass, Goal::Pp];

    pub const fn preset(self) -> GoalPreset {
        match self {
            Goal::Mass => GoalPreset { label: "Набор массы", protein: 150, fat: 80, carbs: 300 },
            Goal::Pp => GoalPreset { label: "ПП", protein: 110, fat: 60, carbs: 200 },
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Goal::Mass => "mass",
            Goal::Pp => "pp",
        }
    }

    pub fn from_key(key: &str) -> Option<Goal> {
        Goal::ALL.into_iter().find(|g| g.key() == key)
    }

    pub fn index(self) -> usize {
        match self {
            Goal::Mass => 0,
            Goal::Pp => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pp() {
        let p = Goal::default().preset();
        assert_eq!((p.protein, p.fat, p.carbs), (110, 60, 200));
        assert_eq!(p.label, "ПП");
    }

    #[test]
    fn mass_preset() {
        let p = Goal::Mass.preset();
        assert_eq!((p.protein, p.fat, p.carbs), (150, 80, 300));
        assert_eq!(p.label, "Набор массы");
    }

    #[test]
    fn keys_round_trip() {
        for g in Goal::ALL {
            assert_eq!(Goal::from_key(g.key()), Some(g));
            assert_eq!(Goal::ALL[g.index()], g);
        }
        assert_eq!(Goal::from_key("keto"), None);
        assert_eq!(Goal::from_key("PP"), None);
    }
}
