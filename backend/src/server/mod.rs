//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::domain::ports::FixtureLoginService;
use backend::domain::{CatalogueImportService, ReactionService, WishlistService};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::{accounts, catalogue, reactions, upload, wishlist};
use backend::outbound::persistence::{
    DieselCatalogueQuery, DieselCourseImportRepository, DieselInterestsRepository,
    DieselReactionRepository,
};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the HTTP port bundle from configuration.
///
/// Database-backed adapters are wired when a pool is available; otherwise
/// the fixture ports serve requests so the binary still runs locally.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => HttpState {
            // Identity remains the external collaborator's concern.
            login: Arc::new(FixtureLoginService),
            catalogue: Arc::new(DieselCatalogueQuery::new(pool.clone())),
            catalogue_import: Arc::new(CatalogueImportService::new(
                Arc::new(DieselCourseImportRepository::new(pool.clone())),
                Arc::new(DefaultClock),
            )),
            reactions: Arc::new(ReactionService::new(Arc::new(
                DieselReactionRepository::new(pool.clone()),
            ))),
            wishlist: Arc::new(WishlistService::new(Arc::new(
                DieselInterestsRepository::new(pool.clone()),
            ))),
        },
        None => HttpState::fixture(),
    }
}

#[derive(Clone)]
struct AppDependencies {
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(same_site)
        .build();

    let routes = web::scope("")
        .wrap(session)
        .service(accounts::login)
        .service(accounts::logout)
        .service(catalogue::list_courses)
        .service(reactions::like_course)
        .service(reactions::dislike_course)
        .service(reactions::check_course_like)
        .service(reactions::course_like_count)
        .service(wishlist::user_wishlist)
        .service(upload::upload_catalogue)
        .service(upload::upload_success);

    let mut app = App::new().app_data(http_state).wrap(Trace).service(routes);

    #[cfg(debug_assertions)]
    {
        app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app
}

/// Start the HTTP server described by `config`.
pub fn run(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
        ..
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    Ok(server)
}
