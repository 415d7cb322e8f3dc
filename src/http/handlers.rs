//! Method and path dispatch.
//!
//! Every parsed request ends in exactly one of four outcomes:
//! - GET/HEAD on a known path: 200 with the page (HEAD drops the body later)
//! - GET/HEAD on anything else: 404 echoing the path
//! - POST: 200 echoing the decoded form body
//! - any other method: 405 with an Allow header

use crate::http::form;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::pages;
use crate::store::ContentStore;

const INDEX_FILE: &str = "index.html";

/// Owns the routing table and whatever the routes need to answer.
pub struct Handler {
    store: ContentStore,
    port: u16,
}

impl Handler {
    pub fn new(store: ContentStore, port: u16) -> Self {
        Self { store, port }
    }

    /// Turns one request into one response. Never fails; protocol problems
    /// upstream of dispatch are handled before this is called.
    pub async fn dispatch(&self, request: &Request) -> Response {
        match &request.method {
            // HEAD runs the full GET path so its headers, Content-Length
            // included, match what GET would send. The writer drops the body.
            Method::GET | Method::HEAD => self.get(&request.path).await,
            Method::POST => self.post(request),
            Method::Unsupported(_) => method_not_allowed(),
        }
    }

    async fn get(&self, path: &str) -> Response {
        match path {
            "/" | "/index.html" => self.index().await,
            "/info" => self.info(),
            other => not_found(other),
        }
    }

    async fn index(&self) -> Response {
        match self.store.load(INDEX_FILE).await {
            Some(file) => ResponseBuilder::new(StatusCode::Ok)
                .header("Last-Modified", httpdate::fmt_http_date(file.modified))
                .body(file.bytes)
                .build(),
            None => ResponseBuilder::new(StatusCode::Ok)
                .body(pages::fallback_index_page().as_bytes().to_vec())
                .build(),
        }
    }

    fn info(&self) -> Response {
        ResponseBuilder::new(StatusCode::Ok)
            .body(pages::info_page(self.port).into_bytes())
            .build()
    }

    fn post(&self, request: &Request) -> Response {
        let raw_body = String::from_utf8_lossy(&request.body);
        let params = form::parse_form(&raw_body);
        ResponseBuilder::new(StatusCode::Ok)
            .body(pages::post_echo_page(&raw_body, &params).into_bytes())
            .build()
    }
}

fn not_found(path: &str) -> Response {
    ResponseBuilder::new(StatusCode::NotFound)
        .body(pages::not_found_page(path).into_bytes())
        .build()
}

fn method_not_allowed() -> Response {
    ResponseBuilder::new(StatusCode::MethodNotAllowed)
        .header("Allow", Method::ALLOWED)
        .body(pages::method_not_allowed_page().into_bytes())
        .build()
}

/// 400 response for requests the parser refused.
pub fn bad_request(reason: &str) -> Response {
    ResponseBuilder::new(StatusCode::BadRequest)
        .body(pages::bad_request_page(reason).into_bytes())
        .build()
}
