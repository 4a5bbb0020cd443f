pub mod tables;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::FoodPreference;
use tables::{MealTemplate, NON_VEGETARIAN, VEGETARIAN};

pub const WEEKS: usize = 4;
pub const DAYS_PER_WEEK: usize = 7;
pub const PLAN_DAYS: usize = WEEKS * DAYS_PER_WEEK;

/// How a (week, day) slot maps onto a meal table index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayIndexing {
    /// Running day number: `week * 7 + day`.
    #[default]
    Flat,
    /// `day + week`: each week starts one dish later.
    WeekOffset,
}

impl DayIndexing {
    pub fn index(&self, week: usize, day: usize) -> usize {
        match self {
            DayIndexing::Flat => week * DAYS_PER_WEEK + day,
            DayIndexing::WeekOffset => day + week,
        }
    }

    pub fn from_str_loose(s: &str) -> Option<DayIndexing> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "flat" => Some(DayIndexing::Flat),
            "week-offset" | "offset" => Some(DayIndexing::WeekOffset),
            _ => None,
        }
    }
}

/// A meal as it appears in an exported plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub dish: String,
    pub ingredients: Vec<String>,
    pub preparation: Vec<String>,
}

impl From<&MealTemplate> for Meal {
    fn from(t: &MealTemplate) -> Self {
        Meal {
            dish: t.dish.to_string(),
            ingredients: t.ingredients.iter().map(|s| s.to_string()).collect(),
            preparation: t.steps.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Week label → day label → meal, e.g. `plan["Week 1"]["Day 3"]`.
pub type MealPlan = BTreeMap<String, BTreeMap<String, Meal>>;

pub fn table(preference: FoodPreference) -> &'static [MealTemplate] {
    match preference {
        FoodPreference::Vegetarian => VEGETARIAN,
        FoodPreference::NonVegetarian => NON_VEGETARIAN,
    }
}

/// Look up the dish for any day index; the index wraps around the table.
pub fn meal_for(preference: FoodPreference, index: usize) -> &'static MealTemplate {
    let meals = table(preference);
    &meals[index % meals.len()]
}

pub fn week_label(week: usize) -> String {
    format!("Week {}", week + 1)
}

pub fn day_label(day: usize) -> String {
    format!("Day {}", day + 1)
}

/// Build the four-week plan for a food preference.
pub fn build_plan(preference: FoodPreference, indexing: DayIndexing) -> MealPlan {
    let mut plan = MealPlan::new();
    for week in 0..WEEKS {
        let days = plan.entry(week_label(week)).or_default();
        for day in 0..DAYS_PER_WEEK {
            let meal = meal_for(preference, indexing.index(week, day));
            days.insert(day_label(day), Meal::from(meal));
        }
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_periodic() {
        for pref in [FoodPreference::Vegetarian, FoodPreference::NonVegetarian] {
            let len = table(pref).len();
            for d in 0..(PLAN_DAYS * 3) {
                assert_eq!(meal_for(pref, d), meal_for(pref, d % len));
            }
        }
    }

    #[test]
    fn test_large_index_does_not_panic() {
        let meal = meal_for(FoodPreference::Vegetarian, usize::MAX);
        assert!(!meal.dish.is_empty());
    }

    #[test]
    fn test_plan_shape() {
        let plan = build_plan(FoodPreference::NonVegetarian, DayIndexing::Flat);
        assert_eq!(plan.len(), WEEKS);
        assert!(plan.values().all(|days| days.len() == DAYS_PER_WEEK));
        assert_eq!(plan["Week 1"]["Day 1"].dish, NON_VEGETARIAN[0].dish);
    }

    #[test]
    fn test_flat_indexing_runs_through_weeks() {
        let plan = build_plan(FoodPreference::Vegetarian, DayIndexing::Flat);
        let expected = meal_for(FoodPreference::Vegetarian, 7 + 2);
        assert_eq!(plan["Week 2"]["Day 3"].dish, expected.dish);
    }

    #[test]
    fn test_week_offset_indexing() {
        assert_eq!(DayIndexing::WeekOffset.index(3, 6), 9);
        assert_eq!(DayIndexing::Flat.index(3, 6), 27);
        let plan = build_plan(FoodPreference::Vegetarian, DayIndexing::WeekOffset);
        assert_eq!(
            plan["Week 2"]["Day 1"].dish,
            meal_for(FoodPreference::Vegetarian, 1).dish
        );
    }

    #[test]
    fn test_indexing_from_str() {
        assert_eq!(DayIndexing::from_str_loose("flat"), Some(DayIndexing::Flat));
        assert_eq!(
            DayIndexing::from_str_loose("Week_Offset"),
            Some(DayIndexing::WeekOffset)
        );
        assert_eq!(DayIndexing::from_str_loose("random"), None);
    }
}
