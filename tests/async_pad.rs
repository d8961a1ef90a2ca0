//! Integration tests for the async pad facade

#![cfg(feature = "remote")]

use std::sync::{Arc, Mutex, Once};

use inkpad::{Error, Pad, PadConfig, Point};
use tiny_http::{Response, Server};

static INIT: Once = Once::new();

/// Start a classifier stub that always answers 8
fn start_test_server() -> String {
    INIT.call_once(|| {
        std::thread::spawn(|| {
            let server = Server::http("127.0.0.1:18081").unwrap();
            for request in server.incoming_requests() {
                let response = match request.url() {
                    "/predict" => Response::from_string(r#"{"data":{"prediction":8}}"#)
                        .with_header(
                            "Content-Type: application/json"
                                .parse::<tiny_http::Header>()
                                .unwrap(),
                        ),
                    _ => Response::from_string("Not Found").with_status_code(404),
                };
                let _ = request.respond(response);
            }
        });
        // Give the server time to start
        std::thread::sleep(std::time::Duration::from_millis(100));
    });

    "http://127.0.0.1:18081".to_string()
}

fn test_config() -> PadConfig {
    PadConfig {
        endpoint: format!("{}/predict", start_test_server()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_full_session() {
    let pad = Pad::new(Some(test_config())).await.expect("Failed to create pad");

    pad.pointer_down(60.0, 60.0).await.unwrap();
    pad.pointer_move(220.0, 60.0).await.unwrap();
    pad.pointer_move(220.0, 220.0).await.unwrap();
    pad.pointer_up().await.unwrap();

    let label = pad.submit().await.expect("Failed to submit");
    assert_eq!(label, 8);

    let snapshot = pad.snapshot().await.unwrap();
    assert_eq!(snapshot.prediction, Some(8));
    assert_eq!(snapshot.stroke_count, 1);
    assert!(snapshot.inked_cells > 0);

    pad.record_feedback(true).await.unwrap();
    pad.record_feedback(false).await.unwrap();
    let snapshot = pad.snapshot().await.unwrap();
    assert_eq!(snapshot.total_correct, 1);
    assert_eq!(snapshot.total_incorrect, 1);

    pad.reset().await.unwrap();
    let snapshot = pad.snapshot().await.unwrap();
    assert_eq!(snapshot.prediction, None);
    assert_eq!(snapshot.stroke_count, 0);
    assert_eq!(snapshot.inked_cells, 0);
    // Tally survives a surface reset.
    assert_eq!(snapshot.total_correct, 1);
    assert_eq!(snapshot.total_incorrect, 1);

    pad.close().await.unwrap();
}

#[tokio::test]
async fn test_draw_stroke_and_grid_text() {
    let pad = Pad::new(Some(test_config())).await.expect("Failed to create pad");

    pad.draw_stroke(&[Point::new(20.0, 140.0), Point::new(260.0, 140.0)])
        .await
        .unwrap();

    let text = pad.grid_text().await.unwrap();
    assert_eq!(text.lines().count(), 28);
    assert!(text.contains('#'));

    let snapshot = pad.snapshot().await.unwrap();
    assert_eq!(snapshot.stroke_count, 1);

    pad.close().await.unwrap();
}

#[tokio::test]
async fn test_on_prediction_callback() {
    let pad = Pad::new(Some(test_config())).await.expect("Failed to create pad");

    let seen: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    pad.on_prediction(move |label| sink.lock().unwrap().push(label))
        .await
        .unwrap();

    pad.draw_stroke(&[Point::new(40.0, 40.0), Point::new(200.0, 240.0)])
        .await
        .unwrap();
    pad.submit().await.unwrap();
    pad.submit().await.unwrap();
    // The callback runs on the worker thread before the submit reply is
    // sent, so both labels are visible here.
    assert_eq!(seen.lock().unwrap().as_slice(), &[8, 8]);

    pad.clear_on_prediction().await.unwrap();
    pad.submit().await.unwrap();
    assert_eq!(seen.lock().unwrap().len(), 2);

    pad.close().await.unwrap();
}

#[tokio::test]
async fn test_bad_endpoint_fails_at_creation() {
    let config = PadConfig {
        endpoint: "not a url".to_string(),
        ..Default::default()
    };
    match Pad::new(Some(config)).await {
        Err(Error::ConfigError(_)) => {}
        Ok(_) => panic!("expected pad creation to fail"),
        Err(other) => panic!("expected ConfigError, got {}", other),
    }
}

#[tokio::test]
async fn test_handles_share_one_worker() {
    let pad = Pad::new(Some(test_config())).await.expect("Failed to create pad");
    let other = pad.clone();

    other
        .draw_stroke(&[Point::new(30.0, 30.0), Point::new(90.0, 90.0)])
        .await
        .unwrap();
    let snapshot = pad.snapshot().await.unwrap();
    assert_eq!(snapshot.stroke_count, 1);

    pad.close().await.unwrap();
}
