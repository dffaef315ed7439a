#[derive(Debug, PartialEq, Eq)]
pub struct Recipe {
    pub id: u32,
    pub title: &'static str,
    pub calories: u32,
    pub tags: &'static [&'static str],
    pub ingredients: &'static [&'static str],
    pub benefits: &'static str,
}

pub static RECIPES: &[Recipe] = &[
    Recipe {
        id: 1,
        title: "Овсянка с ягодами",
        calories: 320,
        tags: &["завтрак", "вегетарианское"],
        ingredients: &["овсяные хлопья", "ягоды", "миндальное молоко"],
        benefits: "Улучшает пищеварение, даёт длительное чувство сытости",
    },
    Recipe {
        id: 2,
        title: "Салат с киноа и авокадо",
        calories: 450,
        tags: &["обед", "веганское"],
        ingredients: &["киноа", "авокадо", "огурец", "оливковое масло"],
        benefits: "Богат растительным белком и полезными жирами",
    },
    Recipe {
        id: 3,
        title: "Запечённый лосось с овощами",
        calories: 520,
        tags: &["ужин", "белок"],
        ingredients: &["лосось", "брокколи", "морковь"],
        benefits: "Источник омега-3 и качественного белка",
    },
    Recipe {
        id: 4,
        title: "Смузи шпинат-банан",
        calories: 210,
        tags: &["перекус", "детокс"],
        ingredients: &["шпинат", "банан", "яблоко"],
        benefits: "Поддерживает иммунитет и уровень энергии",
    },
    Recipe {
        id: 5,
        title: "Греческий йогурт с орехами и мёдом",
        calories: 280,
        tags: &["перекус", "белок"],
        ingredients: &["греческий йогурт", "грецкие орехи", "мёд"],
        benefits: "Укрепляет мышцы и улучшает микрофлору кишечника",
    },
    Recipe {
        id: 6,
        title: "Омлет с овощами на пару",
        calories: 300,
        tags: &["завтрак", "низкоуглеводное"],
        ingredients: &["яйца", "болгарский перец", "кабачок"],
        benefits: "Поддерживает обмен веществ и здоровье мышц",
    },
    Recipe {
        id: 7,
        title: "Чечевичный суп",
        calories: 350,
        tags: &["обед", "вегетарианское"],
        ingredients: &["чечевица", "лук", "морковь", "специи"],
        benefits: "Снижает уровень холестерина и насыщает",
    },
    Recipe {
        id: 8,
        title: "Запечённые яблоки с корицей",
        calories: 180,
        tags: &["десерт", "без сахара"],
        ingredients: &["яблоки", "корица"],
        benefits: "Полезный десерт для пищеварения",
    },
];

pub fn find(id: u32) -> Option<&'static Recipe> {
    RECIPES.iter().find(|r| r.id == id)
}
