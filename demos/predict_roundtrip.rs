//! Async facade example: drive the pad against a local classifier stub
//! (feature: `remote`)

use inkpad::{Pad, PadConfig, Point};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Inkpad - Predict Round Trip\n");

    // This example is intended to run with the `remote` feature enabled
    // (on by default): cargo run --example predict_roundtrip
    if !cfg!(feature = "remote") {
        eprintln!("example requires the 'remote' feature; run: cargo run --example predict_roundtrip");
        return Ok(());
    }

    // Use a tiny HTTP server as a stand-in model so the example runs anywhere
    let server = tiny_http::Server::http("0.0.0.0:0").unwrap();
    let addr = server.server_addr();
    std::thread::spawn(move || {
        for req in server.incoming_requests() {
            let _ = req.respond(tiny_http::Response::from_string(
                r#"{"data":{"prediction":3}}"#,
            ));
        }
    });

    let config = PadConfig {
        endpoint: format!("http://{}/predict", addr),
        ..Default::default()
    };

    let pad = Pad::new(Some(config)).await?;
    pad.on_prediction(|label| println!("callback saw prediction: {}", label))
        .await?;

    // A rough "3"-ish squiggle
    pad.draw_stroke(&[
        Point::new(80.0, 60.0),
        Point::new(200.0, 60.0),
        Point::new(120.0, 140.0),
        Point::new(200.0, 140.0),
        Point::new(200.0, 210.0),
        Point::new(80.0, 220.0),
    ])
    .await?;

    print!("{}", pad.grid_text().await?);

    let label = pad.submit().await?;
    println!("Predicted: {}", label);

    pad.record_feedback(true).await?;
    let snap = pad.snapshot().await?;
    println!(
        "Session: {} correct / {} incorrect",
        snap.total_correct, snap.total_incorrect
    );

    pad.close().await?;
    println!("Done.");

    Ok(())
}
