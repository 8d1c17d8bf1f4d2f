// Utilidades para valores monetarios y campos numéricos del formulario

use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// The checkout form sends amounts either as JSON numbers or as strings like "1.00".
pub fn parse_amount(value: &Value) -> Result<Decimal, PaymentError> {
    let raw = numeric_text(value).ok_or_else(|| invalid("transaction_amount", value))?;
    let amount = Decimal::from_str(raw.trim())
        .or_else(|_| Decimal::from_scientific(raw.trim()))
        .map_err(|_| invalid("transaction_amount", value))?;

    if amount <= Decimal::ZERO {
        return Err(PaymentError::InvalidField {
            field: "transaction_amount",
            reason: format!("el monto debe ser mayor que cero ({})", amount),
        });
    }
    Ok(amount)
}

pub fn parse_installments(value: &Value) -> Result<u32, PaymentError> {
    let raw = numeric_text(value).ok_or_else(|| invalid("installments", value))?;
    let installments: u32 = raw
        .trim()
        .parse()
        .map_err(|_| invalid("installments", value))?;

    if installments == 0 {
        return Err(PaymentError::InvalidField {
            field: "installments",
            reason: "debe ser al menos 1".to_string(),
        });
    }
    Ok(installments)
}

fn numeric_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

fn invalid(field: &'static str, value: &Value) -> PaymentError {
    PaymentError::InvalidField {
        field,
        reason: format!("no es un número válido ({})", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(&json!("1.00")).unwrap(), Decimal::new(100, 2));
        assert_eq!(parse_amount(&json!(25.5)).unwrap(), Decimal::new(255, 1));
        assert_eq!(parse_amount(&json!(10)).unwrap(), Decimal::from(10));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(parse_amount(&json!("uno")).is_err());
        assert!(parse_amount(&json!(null)).is_err());
        assert!(parse_amount(&json!("0")).is_err());
        assert!(parse_amount(&json!(-3)).is_err());
    }

    #[test]
    fn test_parse_installments() {
        assert_eq!(parse_installments(&json!(1)).unwrap(), 1);
        assert_eq!(parse_installments(&json!("12")).unwrap(), 12);
        assert!(parse_installments(&json!(0)).is_err());
        assert!(parse_installments(&json!(1.5)).is_err());
        assert!(parse_installments(&json!("tres")).is_err());
    }
}
