use nutricare_core::error::NutriCareError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), NutriCareError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
