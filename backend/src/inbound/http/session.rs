//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations. The authenticated identity is always passed
//! explicitly through this wrapper, never read from ambient state.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated user's id in the session cookie.
    pub fn persist_user(&self, user_id: &UserId) -> Result<(), Error> {
        self.0
            .insert(USER_ID_KEY, user_id.to_string())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Drop all session state, ending the login.
    pub fn clear(&self) {
        self.0.purge();
    }

    /// Fetch the current user id from the session, if present.
    pub fn user_id(&self) -> Result<Option<UserId>, Error> {
        let id = self
            .0
            .get::<String>(USER_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        match id {
            Some(raw) => match UserId::new(raw) {
                Ok(id) => Ok(Some(id)),
                Err(error) => {
                    tracing::warn!("invalid user id in session cookie: {error}");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    /// Require an authenticated user id or return `401 Unauthorized`.
    pub fn require_user_id(&self) -> Result<UserId, Error> {
        self.user_id()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    //! Round-trip coverage for the session wrapper.
    use actix_session::SessionMiddleware;
    use actix_session::storage::CookieSessionStore;
    use actix_web::cookie::Key;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    use super::*;

    fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
        SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
            .cookie_name("session".into())
            .cookie_secure(false)
            .build()
    }

    #[actix_web::test]
    async fn round_trips_user_id() {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route(
                    "/set",
                    web::get().to(|session: SessionContext| async move {
                        let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6")
                            .expect("fixture id");
                        session.persist_user(&id)?;
                        Ok::<_, Error>(HttpResponse::Ok())
                    }),
                )
                .route(
                    "/get",
                    web::get().to(|session: SessionContext| async move {
                        let id = session.require_user_id()?;
                        Ok::<_, Error>(HttpResponse::Ok().body(id.to_string()))
                    }),
                ),
        )
        .await;

        let set_res =
            test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        assert_eq!(set_res.status(), StatusCode::OK);
        let cookie = set_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set")
            .into_owned();

        let get_res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/get")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(get_res.status(), StatusCode::OK);
        let body = test::read_body(get_res).await;
        assert_eq!(body, "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    }

    #[actix_web::test]
    async fn missing_session_is_unauthorised() {
        let app = test::init_service(
            App::new().wrap(test_session_middleware()).route(
                "/get",
                web::get().to(|session: SessionContext| async move {
                    let id = session.require_user_id()?;
                    Ok::<_, Error>(HttpResponse::Ok().body(id.to_string()))
                }),
            ),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/get").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
