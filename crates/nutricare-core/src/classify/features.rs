use rust_decimal::Decimal;

use crate::error::NutriCareError;
use crate::model::StructuredRecord;

/// The classifier's input columns, in the order the model expects them.
pub const FEATURES: [&str; 5] = ["age", "glucose", "cholesterol", "blood_pressure", "bmi"];

/// A single-row input for the classifier: exactly [`FEATURES`], in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector {
    values: [Decimal; 5],
}

impl FeatureVector {
    pub fn new(values: [Decimal; 5]) -> Self {
        FeatureVector { values }
    }

    /// Pick the five features out of a structured record. Extra fields are
    /// ignored; a missing one is an error, never a default.
    pub fn from_record(record: &StructuredRecord) -> Result<Self, NutriCareError> {
        let mut values = [Decimal::ZERO; 5];
        for (slot, feature) in values.iter_mut().zip(FEATURES) {
            *slot = *record
                .get(feature)
                .ok_or_else(|| NutriCareError::MissingFeature {
                    feature: feature.to_string(),
                })?;
        }
        Ok(FeatureVector { values })
    }

    pub fn get(&self, feature: &str) -> Option<Decimal> {
        self.iter()
            .find(|(name, _)| *name == feature)
            .map(|(_, value)| value)
    }

    /// Feature names paired with their values, in model order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Decimal)> + '_ {
        FEATURES.into_iter().zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(pairs: &[(&str, Decimal)]) -> StructuredRecord {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_from_record_orders_features() {
        let rec = record(&[
            ("bmi", dec!(24.1)),
            ("age", dec!(45)),
            ("heart_rate", dec!(72)),
            ("blood_pressure", dec!(128)),
            ("glucose", dec!(99)),
            ("cholesterol", dec!(190)),
        ]);
        let fv = FeatureVector::from_record(&rec).unwrap();
        let ordered: Vec<_> = fv.iter().collect();
        assert_eq!(
            ordered,
            vec![
                ("age", dec!(45)),
                ("glucose", dec!(99)),
                ("cholesterol", dec!(190)),
                ("blood_pressure", dec!(128)),
                ("bmi", dec!(24.1)),
            ]
        );
        assert_eq!(fv.get("bmi"), Some(dec!(24.1)));
        assert_eq!(fv.get("heart_rate"), None);
    }

    #[test]
    fn test_missing_bmi_is_reported() {
        let rec = record(&[
            ("age", dec!(45)),
            ("glucose", dec!(99)),
            ("cholesterol", dec!(190)),
            ("blood_pressure", dec!(128)),
        ]);
        match FeatureVector::from_record(&rec) {
            Err(NutriCareError::MissingFeature { feature }) => assert_eq!(feature, "bmi"),
            other => panic!("expected MissingFeature, got {other:?}"),
        }
    }
}
