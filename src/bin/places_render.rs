use clap::Parser;
use log::info;
use places_web::api::{WebClient, DEFAULT_API_URL};
use places_web::dispatch::render_page;
use places_web::page::HostPage;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Renders a host page against the places endpoint and prints the result.
#[derive(Parser, Debug)]
#[command(name = "places-render", version)]
struct Args {
    /// Host page, e.g. public/index.html
    #[arg(long)]
    page: PathBuf,

    /// Request path used to pick the views. Defaults to `/<page file name>`.
    #[arg(long)]
    path: Option<String>,

    /// Place id for the detail view
    #[arg(long)]
    id: Option<String>,

    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        })
        .init();

    let path = args.path.unwrap_or_else(|| {
        let name = args
            .page
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("/{name}")
    });

    let client = WebClient::new(&args.api_url).map_err(|err| err.to_string())?;
    let source = tokio::fs::read_to_string(&args.page).await?;

    info!("rendering {} as {path}", args.page.display());

    let mut page = HostPage::new(source);
    render_page(&mut page, &path, args.id.as_deref(), &client).await;

    println!("{}", page.into_html());
    Ok(())
}
