// ABOUTME: Diet-specific meal option catalog and allergy keyword rules
// ABOUTME: Static, versioned seed data consumed by the meal plan synthesizer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal option catalog.
//!
//! Each diet has four categories of options annotated with per-serving
//! protein/carb/fat grams. Options are listed in presentation order: the
//! synthesizer keeps the first few that survive the allergy filter.

use fitplan_core::models::{DietaryPreference, MealOption};
use serde::{Deserialize, Serialize};

/// Catalog category a meal slot draws options from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Between-meal snack
    Snack,
}

/// A catalog food option
#[derive(Debug, Clone, Copy)]
pub struct FoodOption {
    /// Display name, also matched against allergy keywords
    pub name: &'static str,
    /// Protein (grams)
    pub protein_g: u32,
    /// Carbohydrates (grams)
    pub carbs_g: u32,
    /// Fat (grams)
    pub fat_g: u32,
}

impl FoodOption {
    /// Owned copy for a plan
    #[must_use]
    pub fn to_meal_option(&self) -> MealOption {
        MealOption {
            name: self.name.to_owned(),
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
        }
    }
}

const fn food(name: &'static str, protein_g: u32, carbs_g: u32, fat_g: u32) -> FoodOption {
    FoodOption {
        name,
        protein_g,
        carbs_g,
        fat_g,
    }
}

/// All options for one diet
#[derive(Debug)]
pub struct DietMenu {
    /// Breakfast options
    pub breakfast: &'static [FoodOption],
    /// Lunch options
    pub lunch: &'static [FoodOption],
    /// Dinner options
    pub dinner: &'static [FoodOption],
    /// Snack options
    pub snack: &'static [FoodOption],
}

impl DietMenu {
    /// Options for a category
    #[must_use]
    pub const fn options(&self, category: MealCategory) -> &'static [FoodOption] {
        match category {
            MealCategory::Breakfast => self.breakfast,
            MealCategory::Lunch => self.lunch,
            MealCategory::Dinner => self.dinner,
            MealCategory::Snack => self.snack,
        }
    }
}

/// Allergy label and the name fragments that mark an option as unsafe
///
/// Plain substring matching on the option name: "eggplant" trips the egg rule
/// and "soy milk" trips the dairy rule. This is a menu filter, not an allergen
/// database.
pub const ALLERGY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "nuts",
        &[
            "nut", "almond", "peanut", "cashew", "walnut", "pecan", "pistachio", "macadamia",
        ],
    ),
    (
        "dairy",
        &[
            "milk", "cheese", "yogurt", "cottage", "cream", "whey", "feta", "parmesan", "ricotta",
            "paneer",
        ],
    ),
    ("eggs", &["egg", "omelet", "frittata", "shakshuka"]),
];

/// Menu for a diet
#[must_use]
pub const fn menu_for(diet: DietaryPreference) -> &'static DietMenu {
    match diet {
        DietaryPreference::Omnivore => &OMNIVORE,
        DietaryPreference::Vegetarian => &VEGETARIAN,
        DietaryPreference::Vegan => &VEGAN,
        DietaryPreference::Pescatarian => &PESCATARIAN,
        DietaryPreference::Keto => &KETO,
        DietaryPreference::Paleo => &PALEO,
        DietaryPreference::Mediterranean => &MEDITERRANEAN,
    }
}

// ============================================================================
// Diet menus
// ============================================================================

static OMNIVORE: DietMenu = DietMenu {
    breakfast: &[
        food("Greek yogurt parfait with berries and granola", 20, 40, 6),
        food("Scrambled eggs with whole-grain toast", 24, 30, 16),
        food("Oatmeal with almond butter and banana", 12, 55, 14),
        food("Turkey and spinach breakfast wrap", 26, 32, 10),
        food("Cottage cheese with pineapple", 24, 20, 4),
        food("Protein smoothie with oats and berries", 28, 42, 6),
    ],
    lunch: &[
        food("Grilled chicken quinoa bowl", 40, 50, 12),
        food("Chicken Caesar salad with parmesan cheese", 36, 14, 20),
        food("Turkey and avocado whole-wheat wrap", 32, 40, 16),
        food("Tuna salad with mixed greens", 30, 12, 14),
        food("Beef and vegetable stir-fry with brown rice", 35, 55, 14),
    ],
    dinner: &[
        food("Baked salmon with sweet potato and broccoli", 38, 45, 18),
        food("Lean beef chili with beans", 36, 40, 12),
        food("Herb-roasted chicken with rice and green beans", 40, 50, 10),
        food("Turkey meatballs with whole-wheat pasta", 34, 60, 14),
        food("Shrimp tacos with cabbage slaw", 30, 42, 12),
    ],
    snack: &[
        food("Greek yogurt with honey", 15, 20, 3),
        food("Apple slices with peanut butter", 7, 25, 16),
        food("Hard-boiled eggs", 12, 1, 10),
        food("Beef jerky and baby carrots", 15, 12, 3),
        food("Hummus with veggie sticks", 6, 18, 9),
        food("Mixed nuts", 6, 8, 16),
    ],
};

static VEGETARIAN: DietMenu = DietMenu {
    breakfast: &[
        food("Vegetable omelet with whole-grain toast", 22, 28, 16),
        food("Greek yogurt with granola and berries", 20, 45, 8),
        food("Peanut butter banana oatmeal", 14, 58, 14),
        food("Cottage cheese pancakes", 24, 35, 8),
        food("Tofu scramble with peppers and toast", 22, 30, 12),
    ],
    lunch: &[
        food("Lentil and quinoa salad with feta", 24, 55, 14),
        food("Chickpea and spinach curry with rice", 18, 65, 12),
        food("Black bean burrito bowl", 20, 70, 12),
        food("Caprese sandwich on whole-grain bread", 22, 45, 18),
        food("Tempeh Buddha bowl", 28, 50, 16),
    ],
    dinner: &[
        food("Vegetable lasagna with ricotta", 26, 50, 18),
        food("Paneer tikka with brown rice", 28, 52, 20),
        food("Black bean veggie burgers with sweet potato", 22, 60, 12),
        food("Tofu stir-fry with soba noodles", 26, 58, 12),
        food("Eggplant parmesan with side salad", 20, 40, 20),
    ],
    snack: &[
        food("Greek yogurt with walnuts", 16, 12, 12),
        food("Hard-boiled eggs with cherry tomatoes", 12, 5, 10),
        food("Hummus and whole-grain crackers", 7, 25, 9),
        food("Edamame with sea salt", 12, 10, 5),
        food("Trail mix with almonds", 6, 20, 14),
    ],
};

static VEGAN: DietMenu = DietMenu {
    breakfast: &[
        food("Tofu scramble with spinach and toast", 22, 30, 12),
        food("Overnight oats with chia and soy milk", 16, 52, 12),
        food("Peanut butter and banana toast", 12, 48, 16),
        food("Pea protein smoothie with berries", 26, 40, 6),
        food("Chickpea flour pancakes", 15, 40, 8),
    ],
    lunch: &[
        food("Lentil soup with whole-grain bread", 22, 60, 6),
        food("Chickpea salad wrap", 18, 55, 12),
        food("Quinoa black bean bowl", 20, 68, 10),
        food("Tempeh and vegetable stir-fry", 28, 45, 16),
        food("Falafel with tabbouleh", 16, 55, 18),
    ],
    dinner: &[
        food("Tofu and broccoli teriyaki with brown rice", 26, 62, 12),
        food("Lentil bolognese with whole-wheat pasta", 26, 75, 8),
        food("Seitan fajitas with peppers", 36, 40, 10),
        food("Red lentil dal with basmati rice", 22, 70, 8),
        food("Stuffed bell peppers with quinoa and beans", 18, 60, 8),
    ],
    snack: &[
        food("Roasted chickpeas", 10, 30, 5),
        food("Almonds and dried apricots", 6, 22, 14),
        food("Edamame", 12, 10, 5),
        food("Apple with peanut butter", 7, 25, 16),
        food("Soy yogurt with berries", 8, 20, 4),
    ],
};

static PESCATARIAN: DietMenu = DietMenu {
    breakfast: &[
        food("Smoked salmon bagel with cream cheese", 24, 45, 14),
        food("Greek yogurt with berries and honey", 20, 40, 4),
        food("Egg white omelet with spinach", 22, 6, 4),
        food("Oatmeal with walnuts and blueberries", 10, 50, 14),
        food("Avocado toast with poached egg", 14, 32, 18),
    ],
    lunch: &[
        food("Tuna Nicoise salad", 32, 20, 16),
        food("Shrimp quinoa bowl", 30, 48, 10),
        food("Salmon poke bowl", 32, 55, 14),
        food("Sardines on whole-grain toast with lentil soup", 28, 45, 12),
        food("Grilled fish tacos", 28, 40, 12),
    ],
    dinner: &[
        food("Baked cod with roasted potatoes and asparagus", 36, 40, 8),
        food("Garlic shrimp with whole-wheat pasta", 32, 60, 12),
        food("Grilled salmon with quinoa and greens", 38, 40, 20),
        food("Seared tuna steak with sweet potato", 40, 42, 8),
        food("Mussels in tomato broth with crusty bread", 30, 45, 10),
    ],
    snack: &[
        food("Cottage cheese with cucumber", 14, 6, 4),
        food("Tuna on rice cakes", 16, 18, 2),
        food("Mixed nuts", 6, 8, 16),
        food("Hummus with carrots", 6, 18, 9),
        food("Hard-boiled egg", 6, 1, 5),
    ],
};

static KETO: DietMenu = DietMenu {
    breakfast: &[
        food("Bacon and eggs with avocado", 24, 4, 38),
        food("Cheese and spinach omelet", 26, 3, 30),
        food("Chia pudding with coconut milk", 8, 10, 28),
        food("Smoked salmon and cream cheese roll-ups", 20, 2, 22),
        food("Sausage and pepper skillet", 22, 5, 30),
    ],
    lunch: &[
        food("Cobb salad with blue cheese dressing", 34, 8, 40),
        food("Bunless bacon burger with side salad", 36, 6, 42),
        food("Zucchini noodles with pesto chicken", 32, 8, 30),
        food("Tuna-stuffed avocado", 28, 8, 30),
        food("Chicken thigh lettuce wraps", 30, 5, 24),
    ],
    dinner: &[
        food("Ribeye steak with garlic butter broccoli", 46, 8, 48),
        food("Salmon with creamed spinach", 38, 6, 36),
        food("Pork chops with cauliflower mash", 40, 8, 30),
        food("Chicken Alfredo with zucchini noodles", 38, 9, 34),
        food("Lamb kebabs with tzatziki", 36, 6, 32),
    ],
    snack: &[
        food("Celery with almond butter", 4, 4, 16),
        food("String cheese", 7, 1, 6),
        food("Pork rinds with guacamole", 9, 4, 18),
        food("Macadamia nuts", 2, 4, 21),
        food("Deviled eggs", 12, 1, 16),
    ],
};

static PALEO: DietMenu = DietMenu {
    breakfast: &[
        food("Sweet potato hash with eggs", 18, 30, 14),
        food("Banana almond flour pancakes", 10, 30, 16),
        food("Turkey sausage with sauteed greens", 22, 6, 14),
        food("Berry and coconut smoothie bowl", 6, 35, 14),
        food("Smoked salmon with avocado and tomato", 20, 8, 20),
    ],
    lunch: &[
        food("Grilled chicken salad with olive oil dressing", 38, 12, 18),
        food("Beef and vegetable soup", 30, 20, 10),
        food("Turkey lettuce wraps with avocado", 28, 10, 18),
        food("Shrimp and mango salad", 26, 28, 8),
        food("Chicken and sweet potato bowl", 36, 40, 10),
    ],
    dinner: &[
        food("Grass-fed steak with roasted root vegetables", 42, 35, 22),
        food("Baked salmon with asparagus", 36, 8, 20),
        food("Roast chicken with butternut squash", 40, 30, 14),
        food("Bison burger with sweet potato wedges", 38, 36, 18),
        food("Pork tenderloin with apples and Brussels sprouts", 36, 28, 10),
    ],
    snack: &[
        food("Apple with almond butter", 4, 25, 16),
        food("Beef jerky", 13, 6, 2),
        food("Hard-boiled eggs", 12, 1, 10),
        food("Mixed berries with coconut flakes", 2, 20, 8),
        food("Walnuts", 4, 4, 18),
    ],
};

static MEDITERRANEAN: DietMenu = DietMenu {
    breakfast: &[
        food("Greek yogurt with honey and walnuts", 20, 30, 14),
        food("Shakshuka with whole-grain pita", 20, 35, 14),
        food("Whole-grain toast with avocado and tomato", 8, 35, 14),
        food("Oatmeal with figs and almonds", 10, 55, 12),
        food("Spinach and feta omelet", 22, 4, 20),
    ],
    lunch: &[
        food("Greek salad with grilled chicken", 36, 14, 22),
        food("Lentil soup with whole-grain bread", 20, 55, 6),
        food("Falafel pita with tahini", 18, 55, 18),
        food("Tuna and white bean salad", 32, 35, 12),
        food("Quinoa tabbouleh with chickpeas", 16, 52, 12),
    ],
    dinner: &[
        food("Grilled fish with lemon and roasted vegetables", 36, 25, 18),
        food("Chicken souvlaki with brown rice", 38, 50, 12),
        food("Whole-wheat pasta with shrimp and cherry tomatoes", 30, 60, 12),
        food("Baked cod with chickpeas and spinach", 34, 35, 10),
        food("Stuffed eggplant with lamb and rice", 28, 40, 18),
    ],
    snack: &[
        food("Hummus with cucumber slices", 6, 14, 9),
        food("Olives and feta cheese", 6, 3, 16),
        food("Handful of almonds", 6, 6, 14),
        food("Fresh fruit with Greek yogurt", 12, 25, 3),
        food("Whole-grain crackers with sardines", 14, 18, 8),
    ],
};
