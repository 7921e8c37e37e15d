mod detail;
mod list;

pub use detail::load_detail;
pub use list::load_list;

use crate::place::Place;
use enum_assoc::Assoc;

/// What the list page shows, decided from a single collection fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Cards(Vec<Place>),
    Empty,
    InvalidResponse,
    HttpError(u16),
    Failed,
}

/// What the detail page shows for the requested id.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    MissingId,
    HttpError { status: u16, id: String },
    Loaded(Place),
    Failed,
}

#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub const fn css_class(&self) -> &'static str)]
pub enum AlertKind {
    #[assoc(css_class = "danger")]
    Danger,
    #[assoc(css_class = "warning")]
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Danger,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Warning,
            message: message.into(),
        }
    }
}

impl ListView {
    /// Secondary message for the page alert surface, if this outcome has one.
    pub fn alert(&self) -> Option<Alert> {
        match self {
            ListView::HttpError(status) => Some(Alert::danger(format!(
                "Erro HTTP ao buscar /lugares: {status}"
            ))),
            ListView::InvalidResponse => Some(Alert::warning(
                "Resposta inválida do servidor: /lugares não retornou uma lista.",
            )),
            ListView::Failed => Some(Alert::danger("Erro ao buscar os lugares (ver log do servidor).")),
            _ => None,
        }
    }
}
