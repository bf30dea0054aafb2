use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use ntex::util::Bytes;
use ntex::web;
use ntex::web::HttpRequest;
use ntex_files::NamedFile;
use spdlog::{info, warn};

use crate::cms::client::{ContentClient, Lookup};
use crate::config::Config;
use crate::content::normalizer::Normalizer;
use crate::mail::contact::relay;
use crate::mail::smtp_mailer::SmtpMailer;
use crate::mail::MailTransport;
use crate::query_string::ListQuery;
use crate::view::templates::Templates;
use crate::view::{PostPage, RenderedPage, SiteRenderer};

/// Everything a request needs. Built once, never mutated.
pub struct AppState {
    client: ContentClient,
    normalizer: Normalizer,
    renderer: SiteRenderer,
    mailer: Arc<dyn MailTransport>,
    public_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(config: &Config, templates: Templates, mailer: Arc<dyn MailTransport>) -> Self {
        let client = ContentClient::new(&config.content);
        let normalizer = Normalizer::new(client.origin());
        AppState {
            client,
            normalizer,
            renderer: SiteRenderer::new(templates, config),
            mailer,
            public_dir: config.paths.public_dir.clone(),
        }
    }
}

type State = web::types::State<Arc<AppState>>;

fn html(page: RenderedPage) -> web::HttpResponse {
    web::HttpResponse::build(page.status)
        .content_type("text/html; charset=utf-8")
        .body(page.html)
}

// Begin: Redirect region --------
#[web::get("/blog/{slug}/")]
async fn article_with_slash(path: web::types::Path<String>) -> web::HttpResponse {
    web::HttpResponse::TemporaryRedirect()
        .header("Location", format!("/blog/{}", path.into_inner()))
        .content_type("text/html; charset=utf-8")
        .finish()
}
// End: Redirect region --------

#[web::get("/")]
async fn index(req: HttpRequest, state: State) -> web::HttpResponse {
    let page = ListQuery::parse(req.uri().query()).page();
    let records = state.client.fetch_all().await;
    let posts = state.normalizer.normalize_all(&records);
    info!("Listing {} of {} posts received", posts.len(), records.len());

    html(state.renderer.listing(&posts, page))
}

#[web::get("/blog/{slug}")]
async fn article(slug: web::types::Path<String>, state: State) -> web::HttpResponse {
    let slug = slug.into_inner();

    let page = match state.client.lookup(&slug).await {
        Lookup::Found(record) => match state.normalizer.normalize(&record) {
            Ok(post) => PostPage::Found(post),
            Err(e) => {
                warn!("Post found for slug {} cannot be rendered: {}", slug, e);
                PostPage::NotFound
            }
        },
        Lookup::NotFound => PostPage::NotFound,
        Lookup::Unavailable => PostPage::Unavailable,
    };

    html(state.renderer.article(&page))
}

#[web::get("/about")]
async fn about(state: State) -> web::HttpResponse {
    html(state.renderer.about())
}

#[web::get("/contact")]
async fn contact(state: State) -> web::HttpResponse {
    html(state.renderer.contact())
}

#[web::post("/api/contact")]
async fn contact_submit(body: Bytes, state: State) -> web::HttpResponse {
    let (status, reply) = relay(&body, state.mailer.as_ref()).await;
    web::HttpResponse::build(status).json(&reply)
}

#[web::get("/public/{file_name}")]
async fn public_files(path: web::types::Path<String>, state: State) -> Result<NamedFile, web::Error> {
    if path.contains("..") {
        return Err(web::error::ErrorForbidden("Access forbidden").into());
    }

    let Some(ref public_dir) = state.public_dir else {
        return Err(web::error::ErrorNotFound("Not found").into());
    };

    Ok(NamedFile::open(public_dir.join(path.into_inner()))?)
}

async fn not_found(state: State) -> web::HttpResponse {
    html(state.renderer.not_found())
}

pub async fn server_run(config: Config) -> io::Result<()> {
    let templates = Templates::load(config.paths.template_dir.as_deref())?;
    let mailer = Arc::new(SmtpMailer::new(&config.mail));
    let app_state = Arc::new(AppState::new(&config, templates, mailer));

    info!("Reading posts from {}", config.content.origin);
    let bind_addr = config.server.address.clone();
    let bind_port = config.server.port;

    web::HttpServer::new(move || {
        web::App::new()
            .state(app_state.clone())
            .service(index)
            .service(article)
            .service(article_with_slash)
            .service(about)
            .service(contact)
            .service(contact_submit)
            .service(public_files)
            .default_service(web::route().to(not_found))
    })
        .bind((bind_addr, bind_port))?
        .run()
        .await
}
