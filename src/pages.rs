//! Built-in HTML pages and the escaping they rely on.
//!
//! Everything client-controlled that lands in a page body goes through
//! [`escape_html`] first.

use std::time::SystemTime;

use crate::http::form::FormParams;
use crate::http::request::Method;
use crate::http::response::SERVER_NAME;

/// Escapes the five characters that matter inside HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

/// Served for `/` and `/index.html` when the content root has no index.html.
pub fn fallback_index_page() -> &'static str {
    "<!DOCTYPE html>\n\
     <html>\n\
     <head><meta charset=\"UTF-8\"><title>Welcome</title></head>\n\
     <body>\n\
     <h1>Welcome</h1>\n\
     <p>No index.html was found in the content root, so this built-in page is served instead.</p>\n\
     <div>Routes: GET / &middot; GET /info &middot; HEAD /info &middot; POST /submit</div>\n\
     </body>\n\
     </html>\n"
}

/// Small status page answering `GET /info`.
pub fn info_page(port: u16) -> String {
    let now = httpdate::fmt_http_date(SystemTime::now());
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"UTF-8\"><title>Server Info</title></head>\n\
         <body>\n\
         <h1>Server Info</h1>\n\
         <p>Server: {SERVER_NAME}</p>\n\
         <p>Time: {now}</p>\n\
         <p>Server is running on port {port}</p>\n\
         </body>\n\
         </html>\n"
    )
}

/// Echo page for `POST /submit`.
///
/// Shows the raw body, then every decoded parameter, then a count. Raw body
/// and decoded values are escaped; the decoded pairs carry whatever bytes the
/// client percent-encoded, so they get the same treatment.
pub fn post_echo_page(raw_body: &str, params: &FormParams) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n");
    page.push_str("<head><meta charset=\"UTF-8\"><title>POST Request Received</title></head>\n");
    page.push_str("<body>\n<h1>POST Request Received</h1>\n");
    page.push_str(&format!("<p>Raw body: {}</p>\n", escape_html(raw_body)));

    if !params.is_empty() {
        page.push_str("<h2>Parsed Parameters:</h2>\n");
        for (key, value) in params {
            page.push_str(&format!(
                "<p><span>{}</span> = {}</p>\n",
                escape_html(key),
                escape_html(value)
            ));
        }
    }

    page.push_str(&format!(
        "<p>Total parameters received: {}</p>\n",
        params.len()
    ));
    page.push_str("</body>\n</html>\n");
    page
}

/// 404 page echoing the requested path and listing what the server serves.
pub fn not_found_page(path: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"UTF-8\"><title>404 Not Found</title></head>\n\
         <body>\n\
         <h1>404 Not Found</h1>\n\
         <p>No content at <span>{}</span></p>\n\
         <p>Available paths:</p>\n\
         <ul>\n\
         <li>GET /</li>\n\
         <li>GET /info</li>\n\
         <li>HEAD /info</li>\n\
         <li>POST /submit</li>\n\
         </ul>\n\
         </body>\n\
         </html>\n",
        escape_html(path)
    )
}

pub fn bad_request_page(reason: &str) -> String {
    format!(
        "<html><body><h1>400 Bad Request</h1><p>{}</p></body></html>\n",
        escape_html(reason)
    )
}

pub fn method_not_allowed_page() -> String {
    format!(
        "<html><body><h1>405 Method Not Allowed</h1><p>Allowed: {}</p></body></html>\n",
        Method::ALLOWED
    )
}
