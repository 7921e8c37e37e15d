use crate::api::WebClient;
use crate::dispatch::render_page;
use crate::page::HostPage;
use crate::settings::Settings;
use crate::state::ServerState;
use log::{debug, error, info};
use rocket::fairing::AdHoc;
use rocket::fs::NamedFile;
use rocket::http::uri::Origin;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::{get, routes, Build, Responder, Rocket, State};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Responder)]
pub enum PageResponse {
    Html(RawHtml<String>),
    Asset(NamedFile),
}

/// Serves `public_dir`: HTML pages go through the view dispatcher first,
/// every other file is sent untouched.
#[get("/<path..>?<id>")]
async fn serve(
    state: &State<ServerState>,
    uri: &Origin<'_>,
    path: PathBuf,
    id: Option<String>,
) -> Result<PageResponse, Status> {
    let file = resolve_file(&state.public_dir, &path).await;

    if !is_html(&file) {
        return NamedFile::open(&file)
            .await
            .map(PageResponse::Asset)
            .map_err(|_| Status::NotFound);
    }

    let source = tokio::fs::read_to_string(&file).await.map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            Status::NotFound
        } else {
            error!("could not read host page {}: {err}", file.display());
            Status::InternalServerError
        }
    })?;

    debug!("rendering {} for {}", file.display(), uri.path());

    let mut host = HostPage::new(source);
    render_page(&mut host, uri.path().as_str(), id.as_deref(), state.client.as_ref()).await;

    Ok(PageResponse::Html(RawHtml(host.into_html())))
}

/// Maps a request path to a file. A leading `public` segment is dropped and
/// directories resolve to their `index.html`.
async fn resolve_file(public_dir: &Path, path: &Path) -> PathBuf {
    let relative = path.strip_prefix("public").unwrap_or(path);
    let mut file = public_dir.join(relative);

    if tokio::fs::metadata(&file)
        .await
        .is_ok_and(|meta| meta.is_dir())
    {
        file.push("index.html");
    }
    file
}

fn is_html(file: &Path) -> bool {
    file.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

/// Rocket instance reading [`Settings`] from its figment and talking to the real endpoint.
pub fn rocket() -> Rocket<Build> {
    rocket::build()
        .mount("/", routes![serve])
        .attach(AdHoc::try_on_ignite("Places client", |rocket| async move {
            let settings: Settings = match rocket.figment().extract() {
                Ok(settings) => settings,
                Err(err) => {
                    error!("invalid configuration: {err}");
                    return Err(rocket);
                }
            };

            match WebClient::new(&settings.api_url) {
                Ok(client) => {
                    info!(
                        "serving {} with places from {}",
                        settings.public_dir.display(),
                        settings.api_url
                    );
                    Ok(rocket.manage(ServerState::new(Arc::new(client), settings.public_dir)))
                }
                Err(err) => {
                    error!("invalid api_url {}: {err}", settings.api_url);
                    Err(rocket)
                }
            }
        }))
}

/// Rocket instance over an already built state.
pub fn rocket_with(state: ServerState) -> Rocket<Build> {
    rocket::build().mount("/", routes![serve]).manage(state)
}
