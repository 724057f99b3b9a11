use crate::error::{ChartError, ChartResult};

pub fn ensure_finite(value: f64, field_name: &str) -> ChartResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::InvalidData(format!(
            "{field_name} must be finite, got {value}"
        )))
    }
}

pub fn ensure_all_finite(values: &[f64], field_name: &str) -> ChartResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ChartError::InvalidData(format!(
            "{field_name}[{index}] must be finite, got {}",
            values[index]
        ))),
        None => Ok(()),
    }
}
