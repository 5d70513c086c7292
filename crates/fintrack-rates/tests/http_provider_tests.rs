use std::{
    io::{BufRead, BufReader, Write},
    net::TcpListener,
    thread::{self, JoinHandle},
    time::Duration,
};

use fintrack_core::{RateCache, RateError, RateProvider};
use fintrack_domain::CurrencyCode;
use fintrack_rates::ExchangeRateApiProvider;

/// Serves `responses` to consecutive connections and returns the request
/// lines it saw.
fn serve(responses: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let base_url = format!("http://{}/v6", listener.local_addr().expect("addr"));
    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for (status, body) in responses {
            let (stream, _) = listener.accept().expect("accept");
            let mut reader = BufReader::new(stream);
            let mut request_line = String::new();
            reader.read_line(&mut request_line).expect("request line");
            loop {
                let mut header = String::new();
                reader.read_line(&mut header).expect("header");
                if header == "\r\n" || header.is_empty() {
                    break;
                }
            }
            seen.push(request_line.trim_end().to_string());
            let mut stream = reader.into_inner();
            let response = format!(
                "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).expect("write response");
            stream.flush().expect("flush");
        }
        seen
    });
    (base_url, handle)
}

fn provider(base_url: &str) -> ExchangeRateApiProvider {
    let client = reqwest::blocking::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client");
    ExchangeRateApiProvider::with_client(base_url, Some("test-key".into()), client)
}

#[test]
fn fetches_rate_from_pair_endpoint() {
    let (base_url, server) = serve(vec![(
        200,
        r#"{"result":"success","base_code":"EUR","target_code":"USD","conversion_rate":1.0834}"#,
    )]);
    let rate = provider(&base_url)
        .fetch_rate(CurrencyCode::EUR, CurrencyCode::USD)
        .expect("rate");

    assert!((rate - 1.0834).abs() < 1e-12);
    let seen = server.join().expect("server thread");
    assert_eq!(seen, vec!["GET /v6/test-key/pair/EUR/USD HTTP/1.1".to_string()]);
}

#[test]
fn non_success_status_is_an_error() {
    let (base_url, server) = serve(vec![(503, "{}")]);
    let err = provider(&base_url)
        .fetch_rate(CurrencyCode::GBP, CurrencyCode::USD)
        .unwrap_err();
    assert!(matches!(err, RateError::Status(503)));
    server.join().expect("server thread");
}

#[test]
fn malformed_or_error_payloads_are_errors() {
    let (base_url, server) = serve(vec![
        (200, "not json"),
        (200, r#"{"result":"error","error-type":"invalid-key"}"#),
        (200, r#"{"result":"success"}"#),
    ]);
    let provider = provider(&base_url);
    for _ in 0..3 {
        let err = provider
            .fetch_rate(CurrencyCode::CAD, CurrencyCode::JPY)
            .unwrap_err();
        assert!(matches!(err, RateError::Payload(_)), "{err}");
    }
    server.join().expect("server thread");
}

#[test]
fn unreachable_service_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let provider = provider(&format!("http://{addr}/v6"));
    let err = provider
        .fetch_rate(CurrencyCode::EUR, CurrencyCode::GBP)
        .unwrap_err();
    assert!(matches!(err, RateError::Transport(_)));
}

#[test]
fn missing_api_key_skips_the_network() {
    let provider =
        ExchangeRateApiProvider::new("http://127.0.0.1:9/v6", None, Duration::from_secs(1))
            .expect("client");
    assert!(!provider.is_configured());
    assert!(matches!(
        provider.fetch_rate(CurrencyCode::EUR, CurrencyCode::USD),
        Err(RateError::NotConfigured(_))
    ));
}

#[test]
fn cache_over_http_makes_one_request_per_pair() {
    let (base_url, server) = serve(vec![(200, r#"{"result":"success","conversion_rate":1.1}"#)]);
    let mut cache = RateCache::new(provider(&base_url));

    assert_eq!(cache.rate(CurrencyCode::EUR, CurrencyCode::USD), Some(1.1));
    assert_eq!(cache.rate(CurrencyCode::EUR, CurrencyCode::USD), Some(1.1));
    assert_eq!(cache.rate(CurrencyCode::USD, CurrencyCode::USD), Some(1.0));

    let seen = server.join().expect("server thread");
    assert_eq!(seen.len(), 1);
}
