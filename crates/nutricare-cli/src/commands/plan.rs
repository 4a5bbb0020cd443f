use nutricare_core::error::NutriCareError;
use nutricare_core::meals::{self, Meal};

use crate::commands::{parse_indexing, parse_preference};
use crate::output;

pub fn run(
    preference: &str,
    day: Option<usize>,
    indexing: &str,
    output_format: &str,
) -> Result<(), NutriCareError> {
    let preference = parse_preference(preference)?;

    // A single day ignores indexing: the index is taken as-is.
    if let Some(index) = day {
        let meal = Meal::from(meals::meal_for(preference, index));
        match output_format {
            "json" => output::json::print(&meal)?,
            _ => output::table::print_meal(&format!("Day index {index}"), &meal),
        }
        return Ok(());
    }

    let plan = meals::build_plan(preference, parse_indexing(indexing)?);
    match output_format {
        "json" => output::json::print(&plan)?,
        _ => {
            println!("Meal plan ({preference})\n");
            output::table::print_plan(&plan);
        }
    }
    Ok(())
}
