// Mensajes para los códigos status_detail del procesador

const STATUS_DETAIL_MESSAGES: &[(&str, &str)] = &[
    ("cc_rejected_insufficient_amount", "Fondos insuficientes."),
    ("cc_rejected_bad_filled_security_code", "Código de seguridad (CVV) inválido."),
    ("cc_rejected_bad_filled_date", "Fecha de vencimiento inválida."),
    ("cc_rejected_bad_filled_card_number", "Número de tarjeta inválido."),
    ("cc_rejected_bad_filled_other", "Revisa los datos de la tarjeta."),
    ("cc_rejected_call_for_authorize", "Debes autorizar el pago con tu banco."),
    ("cc_rejected_card_disabled", "Tarjeta deshabilitada. Contacta a tu banco para activarla."),
    ("cc_rejected_card_error", "No se pudo procesar el pago con esta tarjeta."),
    ("cc_rejected_duplicated_payment", "Pago duplicado. Ya realizaste un pago por ese valor."),
    ("cc_rejected_high_risk", "Pago rechazado por prevención de fraude."),
    ("cc_rejected_insufficient_data", "Faltan datos obligatorios del pagador."),
    ("cc_rejected_invalid_installments", "La tarjeta no admite el número de cuotas elegido."),
    ("cc_rejected_max_attempts", "Superaste el límite de intentos permitidos."),
    ("cc_rejected_blacklist", "La tarjeta no puede ser utilizada."),
    ("cc_rejected_other_reason", "El emisor rechazó el pago."),
    ("pending_contingency", "El pago está siendo procesado."),
    ("pending_review_manual", "El pago está en revisión."),
];

pub const UNKNOWN_STATUS_DETAIL: &str = "Unknown";

pub fn lookup(status_detail: &str) -> Option<&'static str> {
    STATUS_DETAIL_MESSAGES
        .iter()
        .find(|(code, _)| *code == status_detail)
        .map(|(_, message)| *message)
}

pub fn fallback(status_detail: &str) -> String {
    format!("Tarjeta rechazada: {}", status_detail)
}

pub fn decline_message(status_detail: Option<&str>) -> String {
    let detail = status_detail.unwrap_or(UNKNOWN_STATUS_DETAIL);
    lookup(detail)
        .map(str::to_string)
        .unwrap_or_else(|| fallback(detail))
}
