use crate::modules::club_orders::use_cases::place_order::decision::DecideError;

/// Outcome message shown on the form after a submission redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Ordered,
    EmptyOrder,
    MissingBuyer,
    InvalidForm,
    CaptchaFailed,
}

impl Notice {
    pub fn from_query(raw: &str) -> Option<Notice> {
        match raw {
            "ordered" => Some(Notice::Ordered),
            "empty_order" => Some(Notice::EmptyOrder),
            "missing_buyer" => Some(Notice::MissingBuyer),
            "invalid_form" => Some(Notice::InvalidForm),
            "captcha_failed" => Some(Notice::CaptchaFailed),
            _ => None,
        }
    }

    pub fn query_value(&self) -> &'static str {
        match self {
            Notice::Ordered => "ordered",
            Notice::EmptyOrder => "empty_order",
            Notice::MissingBuyer => "missing_buyer",
            Notice::InvalidForm => "invalid_form",
            Notice::CaptchaFailed => "captcha_failed",
        }
    }

    pub fn redirect_target(&self) -> String {
        format!("/?notice={}", self.query_value())
    }

    pub fn level(&self) -> &'static str {
        match self {
            Notice::Ordered => "success",
            Notice::CaptchaFailed => "danger",
            Notice::EmptyOrder | Notice::MissingBuyer | Notice::InvalidForm => "warning",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notice::Ordered => "Danke – deine Bestellung wurde aufgenommen!",
            Notice::EmptyOrder => "Bitte mindestens einen Artikel auswählen.",
            Notice::MissingBuyer => "Bitte gib deinen Namen an.",
            Notice::InvalidForm => "Die Angaben sind unvollständig oder ungültig – bitte prüfen.",
            Notice::CaptchaFailed => "CAPTCHA fehlgeschlagen – bitte erneut versuchen.",
        }
    }
}

impl From<&DecideError> for Notice {
    fn from(reason: &DecideError) -> Self {
        match reason {
            DecideError::EmptyOrder => Notice::EmptyOrder,
            DecideError::MissingBuyer => Notice::MissingBuyer,
            DecideError::ZeroQuantity { .. } => Notice::InvalidForm,
        }
    }
}
