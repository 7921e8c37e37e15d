use crate::api::PlacesClient;
use crate::html;
use crate::page::{HostPage, ALERT_PLACEHOLDER_ID};
use crate::view::{load_detail, load_list, Alert, AlertKind};
use enum_assoc::Assoc;
use lazy_static::lazy_static;
use log::{debug, error, info, warn};
use regex::Regex;

#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub const fn name(&self) -> &'static str)]
#[func(pub const fn container_ids(&self) -> &'static [&'static str])]
#[func(pub const fn trigger_ids(&self) -> &'static [&'static str])]
pub enum View {
    #[assoc(name = "list")]
    #[assoc(container_ids = &["cards-container", "cards_container", "lugares-container", "cardsContainer"])]
    #[assoc(trigger_ids = &["cards-container", "lugares-container", "cardsContainer"])]
    List,
    #[assoc(name = "detail")]
    #[assoc(container_ids = &["detalheMain", "detalhes-container", "detalhes"])]
    #[assoc(trigger_ids = &["detalheMain", "detalhes-container", "detalhes"])]
    Detail,
}

lazy_static! {
    static ref ROUTES: Vec<(View, Regex)> = vec![
        (View::List, Regex::new(r"index\.html|/$|/public").expect("valid list route")),
        (View::Detail, Regex::new(r"detalhes?\.html").expect("valid detail route")),
    ];
}

/// Views whose path pattern matches `path`, compared case-insensitively.
/// Every row is checked, so one path can select several views.
pub fn views_for(path: &str) -> Vec<View> {
    let path = path.to_lowercase();
    ROUTES
        .iter()
        .filter(|(_, pattern)| pattern.is_match(&path))
        .map(|(view, _)| *view)
        .collect()
}

/// Runs every view selected by `path` against `page`, once.
///
/// A view only runs when the page carries one of its trigger containers.
pub async fn render_page(
    page: &mut HostPage,
    path: &str,
    id: Option<&str>,
    client: &dyn PlacesClient,
) {
    for view in views_for(path) {
        if page.first_present(view.trigger_ids()).is_none() {
            warn!("{path} matches the {} view but has no container for it", view.name());
            continue;
        }
        render_view(page, view, id, client).await;
    }
}

pub async fn render_view(
    page: &mut HostPage,
    view: View,
    id: Option<&str>,
    client: &dyn PlacesClient,
) {
    let Some(container) = page.first_present(view.container_ids()) else {
        error!(
            "no container found for the {} view, looked for {:?}",
            view.name(),
            view.container_ids()
        );
        return;
    };

    let (fragment, alert) = match view {
        View::List => {
            let outcome = load_list(client).await;
            (html::list_fragment(&outcome), outcome.alert())
        }
        View::Detail => {
            let outcome = load_detail(client, id).await;
            (html::detail_fragment(&outcome), None)
        }
    };

    page.replace_inner(container, &fragment);

    if let Some(alert) = alert {
        show_alert(page, &alert);
    }
}

pub fn show_alert(page: &mut HostPage, alert: &Alert) {
    match alert.kind {
        AlertKind::Danger => error!("{}", alert.message),
        AlertKind::Warning => info!("{}", alert.message),
    }

    if !page.replace_inner(ALERT_PLACEHOLDER_ID, &html::alert(alert)) {
        debug!("page has no #{ALERT_PLACEHOLDER_ID}, alert only logged");
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::api::stub::StubClient;
    use rocket::async_test;

    const INDEX: &str = r#"<html><body>
<div id="alertPlaceholder"></div>
<div id="cards-container" class="row"><p>Carregando...</p></div>
</body></html>"#;

    const DETAIL: &str = r#"<html><body>
<div id="detalheMain"></div>
</body></html>"#;

    #[test]
    fn route_table() {
        assert_eq!(views_for("/"), [View::List]);
        assert_eq!(views_for("/index.html"), [View::List]);
        assert_eq!(views_for("/INDEX.HTML"), [View::List]);
        assert_eq!(views_for("/public/sobre.html"), [View::List]);
        assert_eq!(views_for("/detalhes.html"), [View::Detail]);
        assert_eq!(views_for("/Detalhe.html"), [View::Detail]);
        assert_eq!(views_for("/public/detalhes.html"), [View::List, View::Detail]);
        assert!(views_for("/cadastro_lugar.html").is_empty());
    }

    #[async_test]
    async fn list_page_gets_cards() {
        let client = StubClient::respond(200, r#"[{"id":1,"nome":"Lençóis"}]"#);
        let mut page = HostPage::new(INDEX);

        render_page(&mut page, "/index.html", None, &client).await;

        let html = page.into_html();
        assert!(html.contains("Lençóis"));
        assert!(!html.contains("Carregando"));
        assert!(html.contains(r#"<div id="alertPlaceholder"></div>"#));
    }

    #[async_test]
    async fn empty_list_says_nothing_registered() {
        let client = StubClient::respond(200, "[]");
        let mut page = HostPage::new(INDEX);

        render_page(&mut page, "/", None, &client).await;

        let html = page.into_html();
        assert!(html.contains("Nenhum lugar cadastrado."));
        assert!(!html.contains("text-danger"));
    }

    #[async_test]
    async fn server_error_shows_status_inline_and_in_alert() {
        let client = StubClient::respond(500, "");
        let mut page = HostPage::new(INDEX);

        render_page(&mut page, "/index.html", None, &client).await;

        let html = page.into_html();
        assert!(html.contains("(status 500)"));
        assert!(html.contains(
            r#"<div id="alertPlaceholder"><div class="alert alert-danger">Erro HTTP ao buscar /lugares: 500</div></div>"#
        ));
    }

    #[async_test]
    async fn invalid_response_shows_a_warning_alert() {
        let client = StubClient::respond(200, r#"{"lugares":[]}"#);
        let mut page = HostPage::new(INDEX);

        render_page(&mut page, "/index.html", None, &client).await;

        let html = page.into_html();
        assert!(html.contains(r#"<p class="text-warning">Resposta inválida do servidor."#));
        assert!(html.contains(r#"<div id="alertPlaceholder"><div class="alert alert-warning">"#));
        assert!(!html.contains("alert-danger"));
    }

    #[async_test]
    async fn page_without_alert_placeholder_still_renders() {
        let client = StubClient::respond(503, "");
        let mut page = HostPage::new(r#"<div id="cardsContainer"></div>"#);

        render_page(&mut page, "/", None, &client).await;

        assert!(page.as_str().contains("(status 503)"));
    }

    #[async_test]
    async fn list_container_without_trigger_id_is_skipped_by_dispatch() {
        let client = StubClient::respond(200, "[]");
        let mut page = HostPage::new(r#"<div id="cards_container"></div>"#);

        render_page(&mut page, "/", None, &client).await;

        assert_eq!(client.calls(), 0);
        assert_eq!(page.as_str(), r#"<div id="cards_container"></div>"#);

        render_view(&mut page, View::List, None, &client).await;

        assert_eq!(client.calls(), 1);
        assert!(page.as_str().contains("Nenhum lugar cadastrado."));
    }

    #[async_test]
    async fn malformed_containers_are_not_recognised() {
        let client = StubClient::respond(200, "[]");
        let pages = [
            r#"<html><body><div id="cards-container"/></body></html>"#,
            r#"<html><body><div id="cards-container"><p>Carregando...</div></body></html>"#,
        ];

        for source in pages {
            let mut page = HostPage::new(source);
            assert!(!page.contains("cards-container"), "{source}");

            render_page(&mut page, "/", None, &client).await;

            assert_eq!(page.as_str(), source);
        }
        assert_eq!(client.calls(), 0);
    }

    #[async_test]
    async fn multibyte_text_before_the_container_is_kept() {
        let client = StubClient::respond(200, r#"[{"id":1,"nome":"Ilha Grande"}]"#);
        let mut page = HostPage::new(
            r#"<html><head><title>Ação — Lugares</title></head><body>
<div id="cards-container"><p>Carregando...</p></div>
</body></html>"#,
        );

        render_page(&mut page, "/", None, &client).await;

        let html = page.into_html();
        assert!(html.starts_with("<html><head><title>Ação — Lugares</title></head>"));
        assert!(html.contains("Ilha Grande"));
        assert!(!html.contains("Carregando"));
        assert!(html.ends_with("</div>\n</body></html>"));
    }

    #[async_test]
    async fn page_without_container_makes_no_request() {
        let client = StubClient::respond(200, "[]");
        let mut page = HostPage::new("<html><body><p>nada</p></body></html>");

        render_page(&mut page, "/index.html", None, &client).await;
        render_view(&mut page, View::Detail, Some("1"), &client).await;

        assert_eq!(client.calls(), 0);
        assert_eq!(page.as_str(), "<html><body><p>nada</p></body></html>");
    }

    #[async_test]
    async fn detail_page_without_id_warns() {
        let client = StubClient::respond(200, "{}");
        let mut page = HostPage::new(DETAIL);

        render_page(&mut page, "/detalhes.html", None, &client).await;

        assert_eq!(client.calls(), 0);
        assert!(page.as_str().contains("ID não informado"));
    }

    #[async_test]
    async fn detail_page_shows_place() {
        let client = StubClient::respond(200, r#"{ "nome": "X", "imagem": "y.jpg" }"#);
        let mut page = HostPage::new(DETAIL);

        render_page(&mut page, "/detalhes.html", Some("3"), &client).await;

        let html = page.into_html();
        assert!(html.contains("<h2>X</h2>"));
        assert!(html.contains(r#"src="assets/img/y.jpg""#));
        assert!(!html.contains("Atrações"));
    }
}
