//! Minimal offline example demonstrating the Sketchpad API

use inkpad::{OfflineClassifier, PadConfig, Sketchpad};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Inkpad - Offline Sketch Example\n");

    let mut pad = Sketchpad::new(PadConfig::default());

    // Draw a rough "4" with two strokes
    pad.pointer_down(90.0, 40.0);
    pad.pointer_move(80.0, 150.0);
    pad.pointer_move(200.0, 150.0);
    pad.pointer_up();
    pad.pointer_down(180.0, 60.0);
    pad.pointer_move(180.0, 240.0);
    pad.pointer_up();

    println!("Grid ({} inked cells):", pad.grid().inked_cells());
    print!("{}", pad.render_grid_text());

    // No model server here; the offline backend answers a fixed digit
    let label = pad.submit_with(&OfflineClassifier::with_label(4))?;
    println!("\nPredicted: {}", label);

    pad.record_feedback(true);
    let snap = pad.snapshot();
    println!(
        "Session: {} correct / {} incorrect",
        snap.total_correct, snap.total_incorrect
    );

    pad.reset();
    println!("After reset: {} strokes", pad.strokes().len());

    Ok(())
}
