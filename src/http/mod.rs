//! HTTP protocol implementation.
//!
//! This module implements a single-exchange HTTP/1.x engine: every accepted
//! connection carries exactly one request and receives exactly one response,
//! after which the socket is closed. Keep-alive, pipelining and chunked
//! transfer are deliberately unsupported.
//!
//! # Architecture
//!
//! - **`connection`**: owns one accepted socket end-to-end (read, parse,
//!   dispatch, write, close)
//! - **`parser`**: reads the request line, headers and optional body off the
//!   socket and produces a structured request
//! - **`request`**: request representation and the method state machine
//! - **`response`**: response representation with ordered headers, plus the
//!   builder that stamps the standard header set
//! - **`handlers`**: the method dispatcher and the GET/HEAD/POST handlers
//! - **`form`**: `application/x-www-form-urlencoded` body decoding
//! - **`writer`**: serializes and writes responses to the client
//!
//! # Exchange flow
//!
//! ```text
//!   accept
//!     │
//!     ▼
//!   parse request ──► dispatch on method ──► handler builds Response
//!                                                   │
//!   socket closed ◄── writer emits wire bytes ◄─────┘
//! ```

pub mod connection;
pub mod form;
pub mod handlers;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
