use serde::Deserialize;
use serde_json::Value;

/// Whole-yen amount as found in a document dump.
///
/// Missing, null, non-numeric and non-finite values coerce to 0. Fractional
/// values are truncated toward zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AmountModel(pub i64);

impl AmountModel {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => AmountModel(0),
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => AmountModel(i),
                (None, Some(f)) if f.is_finite() => {
                    if f.fract() != 0.0 {
                        tracing::warn!(amount = f, "fractional amount truncated to whole yen");
                    }
                    // Saturates for values outside the i64 range, which the
                    // validator then reports as over the limit.
                    AmountModel(f.trunc() as i64)
                }
                _ => AmountModel(0),
            },
            other => {
                tracing::warn!(amount = %other, "non-numeric amount treated as 0");
                AmountModel(0)
            }
        }
    }
}

impl<'de> Deserialize<'de> for AmountModel {
    fn deserialize<D>(deserializer: D) -> Result<AmountModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(AmountModel::from_value(&value))
    }
}

impl From<AmountModel> for i64 {
    fn from(amount: AmountModel) -> i64 {
        amount.0
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_coercion() {
        assert_eq!(AmountModel::from_value(&json!(9800)), AmountModel(9800));
        assert_eq!(AmountModel::from_value(&json!(-3)), AmountModel(-3));
        assert_eq!(AmountModel::from_value(&json!(12.9)), AmountModel(12));
        assert_eq!(AmountModel::from_value(&json!(null)), AmountModel(0));
        assert_eq!(AmountModel::from_value(&json!("9800")), AmountModel(0));
        assert_eq!(AmountModel::from_value(&json!(1e30)), AmountModel(i64::MAX));
    }
}
