/// A dish from the static meal tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealTemplate {
    pub dish: &'static str,
    pub ingredients: &'static [&'static str],
    pub steps: &'static [&'static str],
}

pub const VEGETARIAN: &[MealTemplate] = &[
    MealTemplate {
        dish: "Vegetable Oats Upma",
        ingredients: &[
            "rolled oats",
            "onion",
            "carrot",
            "green peas",
            "mustard seeds",
            "curry leaves",
        ],
        steps: &[
            "Dry roast the oats until lightly golden.",
            "Temper mustard seeds and curry leaves, then saute onion, carrot and peas.",
            "Add oats and hot water, cover and cook for 3 minutes.",
        ],
    },
    MealTemplate {
        dish: "Moong Dal Khichdi",
        ingredients: &[
            "brown rice",
            "split moong dal",
            "turmeric",
            "cumin",
            "ginger",
            "spinach",
        ],
        steps: &[
            "Rinse rice and dal together.",
            "Pressure cook with turmeric, ginger and four cups of water.",
            "Temper cumin in a teaspoon of oil and stir in wilted spinach.",
        ],
    },
    MealTemplate {
        dish: "Paneer Bhurji with Multigrain Roti",
        ingredients: &[
            "low-fat paneer",
            "tomato",
            "capsicum",
            "onion",
            "multigrain flour",
        ],
        steps: &[
            "Crumble the paneer.",
            "Saute onion, tomato and capsicum, then fold in the paneer.",
            "Serve with freshly made multigrain roti.",
        ],
    },
    MealTemplate {
        dish: "Chana Salad Bowl",
        ingredients: &[
            "boiled chickpeas",
            "cucumber",
            "tomato",
            "lemon",
            "coriander",
            "roasted cumin",
        ],
        steps: &[
            "Dice the vegetables.",
            "Toss with chickpeas, lemon juice and roasted cumin.",
            "Garnish with coriander and serve chilled.",
        ],
    },
    MealTemplate {
        dish: "Vegetable Dalia",
        ingredients: &["broken wheat", "beans", "carrot", "peas", "ginger"],
        steps: &[
            "Roast the broken wheat for two minutes.",
            "Add chopped vegetables, ginger and water.",
            "Pressure cook for two whistles.",
        ],
    },
    MealTemplate {
        dish: "Palak Tofu with Millet Roti",
        ingredients: &[
            "spinach",
            "firm tofu",
            "garlic",
            "green chilli",
            "jowar flour",
        ],
        steps: &[
            "Blanch and puree the spinach.",
            "Simmer the puree with garlic and chilli, then add tofu cubes.",
            "Serve with jowar roti.",
        ],
    },
    MealTemplate {
        dish: "Mixed Vegetable Sambar with Idli",
        ingredients: &[
            "toor dal",
            "drumstick",
            "pumpkin",
            "tamarind",
            "sambar powder",
            "idli batter",
        ],
        steps: &[
            "Cook the dal until soft.",
            "Boil vegetables with tamarind and sambar powder, then add the dal.",
            "Steam idlis and serve with the sambar.",
        ],
    },
];

pub const NON_VEGETARIAN: &[MealTemplate] = &[
    MealTemplate {
        dish: "Grilled Chicken Salad",
        ingredients: &[
            "chicken breast",
            "lettuce",
            "cucumber",
            "cherry tomato",
            "olive oil",
            "lemon",
        ],
        steps: &[
            "Marinate chicken with lemon, pepper and a pinch of salt.",
            "Grill for 6 to 7 minutes per side and slice.",
            "Toss with the vegetables and a teaspoon of olive oil.",
        ],
    },
    MealTemplate {
        dish: "Egg White Omelette with Toast",
        ingredients: &[
            "egg whites",
            "onion",
            "tomato",
            "spinach",
            "whole wheat bread",
        ],
        steps: &[
            "Whisk egg whites with chopped vegetables.",
            "Cook on a non-stick pan over low heat.",
            "Serve with one slice of whole wheat toast.",
        ],
    },
    MealTemplate {
        dish: "Steamed Fish with Brown Rice",
        ingredients: &[
            "rohu or basa fillet",
            "ginger",
            "garlic",
            "lemon",
            "brown rice",
        ],
        steps: &[
            "Rub the fillet with ginger, garlic and lemon.",
            "Steam for 10 to 12 minutes.",
            "Serve over cooked brown rice.",
        ],
    },
    MealTemplate {
        dish: "Chicken and Vegetable Stew",
        ingredients: &[
            "chicken pieces",
            "carrot",
            "beans",
            "potato",
            "black pepper",
            "light coconut milk",
        ],
        steps: &[
            "Simmer chicken with whole spices until tender.",
            "Add vegetables and cook until soft.",
            "Finish with a splash of light coconut milk.",
        ],
    },
    MealTemplate {
        dish: "Egg Bhurji with Multigrain Roti",
        ingredients: &[
            "eggs",
            "onion",
            "tomato",
            "green chilli",
            "multigrain flour",
        ],
        steps: &[
            "Saute onion, tomato and chilli.",
            "Scramble in the eggs until just set.",
            "Serve with multigrain roti.",
        ],
    },
    MealTemplate {
        dish: "Tandoori Fish with Sauteed Greens",
        ingredients: &[
            "fish fillet",
            "hung curd",
            "tandoori spice",
            "spinach",
            "beans",
        ],
        steps: &[
            "Marinate fish in hung curd and spices for 30 minutes.",
            "Bake or air-fry until charred at the edges.",
            "Serve with quickly sauteed greens.",
        ],
    },
    MealTemplate {
        dish: "Chicken Millet Pulao",
        ingredients: &[
            "boneless chicken",
            "foxtail millet",
            "onion",
            "mint",
            "whole spices",
        ],
        steps: &[
            "Soak the millet for 20 minutes.",
            "Brown the chicken with onion and whole spices.",
            "Add millet, mint and water, then cook covered until done.",
        ],
    },
];
