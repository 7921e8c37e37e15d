//! Markup for the page fragments. Everything coming from a record passes
//! through [`escape`] before it reaches the output.

use crate::place::{Attraction, Place};
use crate::view::{Alert, DetailView, ListView};

pub const DETAIL_PAGE: &str = "detalhes.html";
pub const EDIT_PAGE: &str = "cadastro_lugar.html";
const UNTITLED: &str = "Sem título";

pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn title_or_untitled(name: &str) -> String {
    if name.is_empty() {
        UNTITLED.to_string()
    } else {
        escape(name)
    }
}

fn page_link(page: &str, id: &str) -> String {
    format!("{page}?id={}", urlencoding::encode(id))
}

pub fn alert(alert: &Alert) -> String {
    format!(
        r#"<div class="alert alert-{}">{}</div>"#,
        alert.kind.css_class(),
        escape(&alert.message)
    )
}

pub fn list_fragment(view: &ListView) -> String {
    match view {
        ListView::Cards(places) => places.iter().map(place_card).collect(),
        ListView::Empty => "<p>Nenhum lugar cadastrado.</p>".to_string(),
        ListView::InvalidResponse => {
            r#"<p class="text-warning">Resposta inválida do servidor. Verifique db.json.</p>"#
                .to_string()
        }
        ListView::HttpError(status) => format!(
            r#"<p class="text-danger">Erro ao carregar lugares (status {status}). Veja o log do servidor.</p>"#
        ),
        ListView::Failed => {
            r#"<p class="text-danger">Erro ao carregar lugares. Veja o log do servidor.</p>"#
                .to_string()
        }
    }
}

fn place_card(place: &Place) -> String {
    format!(
        r#"
<div class="col-md-4 mb-4">
  <div class="card h-100 shadow-sm">
    <img src="{image}" class="card-img-top" alt="{alt}">
    <div class="card-body d-flex flex-column">
      <h5 class="card-title">{title}</h5>
      <p class="card-text">{description}</p>
      <div class="mt-auto d-flex gap-2">
        <a href="{detail}" class="btn btn-primary btn-sm">Ver detalhes</a>
        <a href="{edit}" class="btn btn-outline-secondary btn-sm">Editar</a>
      </div>
    </div>
  </div>
</div>"#,
        image = escape(&place.image),
        alt = escape(&place.name),
        title = title_or_untitled(&place.name),
        description = escape(&place.description),
        detail = escape(&page_link(DETAIL_PAGE, &place.id)),
        edit = escape(&page_link(EDIT_PAGE, &place.id)),
    )
}

pub fn detail_fragment(view: &DetailView) -> String {
    match view {
        DetailView::MissingId => {
            r#"<div class="alert alert-warning">ID não informado na query string.</div>"#
                .to_string()
        }
        DetailView::HttpError { status, id } => format!(
            r#"<div class="alert alert-danger">Erro {status} ao buscar item {}</div>"#,
            escape(id)
        ),
        DetailView::Loaded(place) => place_detail(place),
        DetailView::Failed => {
            r#"<div class="alert alert-danger">Erro ao carregar detalhes. Veja o log do servidor.</div>"#
                .to_string()
        }
    }
}

fn place_detail(place: &Place) -> String {
    let mut info = format!(
        r#"<li class="list-group-item"><strong>ID:</strong> {}</li>"#,
        escape(&place.id)
    );
    if let Some(country) = &place.country {
        info.push_str(&format!(
            r#"<li class="list-group-item"><strong>País:</strong> {}</li>"#,
            escape(country)
        ));
    }
    if let Some(date) = &place.date {
        info.push_str(&format!(
            r#"<li class="list-group-item"><strong>Data:</strong> {}</li>"#,
            escape(date)
        ));
    }

    let mut html = format!(
        r#"
<div class="row">
  <div class="col-lg-7">
    <img src="{image}" class="img-fluid rounded mb-3" alt="{alt}">
    <h2>{title}</h2>
    <p>{content}</p>
  </div>
  <div class="col-lg-5">
    <h5>Informações</h5>
    <ul class="list-group">
      {info}
    </ul>
  </div>
</div>
"#,
        image = escape(&place.image),
        alt = escape(&place.name),
        title = title_or_untitled(&place.name),
        content = escape(&place.description),
    );

    if !place.attractions.is_empty() {
        let cards: String = place.attractions.iter().map(attraction_card).collect();
        html.push_str(&format!(
            r#"<h4 class="mt-4">Atrações</h4><div class="row">{cards}</div>"#
        ));
    }

    html
}

fn attraction_card(attraction: &Attraction) -> String {
    format!(
        r#"
<div class="col-md-4 mb-3">
  <div class="card">
    <img src="{image}" class="card-img-top" alt="{name}">
    <div class="card-body">
      <h6 class="card-title">{name}</h6>
      <p class="card-text">{description}</p>
    </div>
  </div>
</div>"#,
        image = escape(&attraction.image),
        name = escape(&attraction.name),
        description = escape(&attraction.description),
    )
}
