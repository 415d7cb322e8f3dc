use tokio::io::AsyncReadExt;
use volley::http::response::{Response, ResponseBuilder, StatusCode};
use volley::http::writer::ResponseWriter;

fn bare_response() -> Response {
    Response {
        status: StatusCode::Ok,
        headers: vec![
            ("A".to_string(), "1".to_string()),
            ("B".to_string(), "2".to_string()),
        ],
        body: b"hi".to_vec(),
    }
}

#[test]
fn test_serialized_bytes_exact_layout() {
    let writer = ResponseWriter::new(&bare_response(), false);

    assert_eq!(writer.as_bytes(), b"HTTP/1.1 200 OK\r\nA: 1\r\nB: 2\r\n\r\nhi");
}

#[test]
fn test_head_only_keeps_headers_but_drops_body() {
    let writer = ResponseWriter::new(&bare_response(), true);
    let wire = String::from_utf8(writer.as_bytes().to_vec()).unwrap();

    assert!(wire.ends_with("B: 2\r\n\r\n"));
    assert!(!wire.contains("hi"));
}

#[test]
fn test_head_only_content_length_matches_full_body() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(b"hi".to_vec())
        .build();
    let writer = ResponseWriter::new(&response, true);
    let wire = String::from_utf8(writer.as_bytes().to_vec()).unwrap();

    assert!(wire.contains("Content-Length: 2\r\n"));
    assert!(wire.ends_with("\r\n\r\n"));
}

#[test]
fn test_status_line_carries_code_and_reason() {
    let response = ResponseBuilder::new(StatusCode::NotFound).build();
    let writer = ResponseWriter::new(&response, false);
    let wire = String::from_utf8(writer.as_bytes().to_vec()).unwrap();

    assert!(wire.starts_with("HTTP/1.1 404 Not Found\r\n"));
}

#[test]
fn test_content_length_reflects_utf8_byte_count() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body("café".as_bytes().to_vec())
        .build();
    let writer = ResponseWriter::new(&response, false);
    let wire = String::from_utf8(writer.as_bytes().to_vec()).unwrap();

    assert!(wire.contains("Content-Length: 5\r\n"));
}

#[tokio::test]
async fn test_write_to_stream_sends_every_byte() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(b"<h1>ok</h1>".to_vec())
        .build();
    let mut writer = ResponseWriter::new(&response, false);
    let expected = writer.as_bytes().to_vec();

    let (mut client, mut server) = tokio::io::duplex(4096);
    writer.write_to_stream(&mut server).await.unwrap();
    drop(server);

    let mut received = Vec::new();
    client.read_to_end(&mut received).await.unwrap();
    assert_eq!(received, expected);
}
