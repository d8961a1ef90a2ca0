use crate::sketchpad::Sketchpad;
use crate::{Error, PadConfig, PadSnapshot, Result, Stroke};
use std::sync::mpsc::{self, Sender};
use std::thread;
use tokio::sync::oneshot;

type PredictionCallback = Box<dyn Fn(u8) + Send + Sync>;

enum Command {
    PointerDown(f32, f32, oneshot::Sender<Result<()>>),
    PointerMove(f32, f32, oneshot::Sender<Result<()>>),
    PointerUp(oneshot::Sender<Result<()>>),
    Replay(Vec<Stroke>, oneshot::Sender<Result<()>>),

    Submit(oneshot::Sender<Result<u8>>),
    Feedback(bool, oneshot::Sender<Result<()>>),
    Reset(oneshot::Sender<Result<()>>),

    Snapshot(oneshot::Sender<Result<PadSnapshot>>),
    GridText(oneshot::Sender<Result<String>>),

    OnPrediction(PredictionCallback, oneshot::Sender<Result<()>>),
    ClearOnPrediction(oneshot::Sender<Result<()>>),

    Close(oneshot::Sender<Result<()>>),
}

/// An async-friendly pad abstraction backed by a dedicated worker thread.
///
/// The worker thread owns a synchronous `Sketchpad` plus its classifier and
/// executes commands sent from async tasks, so callers get an async
/// interface while the blocking classify call stays off the async runtime.
/// Commands are serviced strictly in order, which also keeps classify
/// requests single-flight.
#[derive(Clone)]
pub struct Pad {
    cmd_tx: Sender<Command>,
}

impl Pad {
    /// Create a new pad (spawns a background thread that owns the state).
    pub async fn new(config: Option<PadConfig>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
        let (init_tx, init_rx): (oneshot::Sender<Result<()>>, oneshot::Receiver<Result<()>>) =
            oneshot::channel();

        thread::spawn(move || {
            // Build the classifier on the worker thread so a bad endpoint
            // surfaces from `new` instead of the first submit.
            let classifier = match crate::new_classifier(&config) {
                Ok(c) => c,
                Err(err) => {
                    let _ = init_tx.send(Err(err));
                    return;
                }
            };
            let mut pad = Sketchpad::new(config);

            let _ = init_tx.send(Ok(()));

            // Command loop
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    Command::PointerDown(x, y, resp) => {
                        pad.pointer_down(x, y);
                        let _ = resp.send(Ok(()));
                    }
                    Command::PointerMove(x, y, resp) => {
                        pad.pointer_move(x, y);
                        let _ = resp.send(Ok(()));
                    }
                    Command::PointerUp(resp) => {
                        pad.pointer_up();
                        let _ = resp.send(Ok(()));
                    }
                    Command::Replay(strokes, resp) => {
                        pad.replay_strokes(&strokes);
                        let _ = resp.send(Ok(()));
                    }
                    Command::Submit(resp) => {
                        let res = pad.submit_with(&classifier);
                        let _ = resp.send(res);
                    }
                    Command::Feedback(was_correct, resp) => {
                        pad.record_feedback(was_correct);
                        let _ = resp.send(Ok(()));
                    }
                    Command::Reset(resp) => {
                        pad.reset();
                        let _ = resp.send(Ok(()));
                    }
                    Command::Snapshot(resp) => {
                        let _ = resp.send(Ok(pad.snapshot()));
                    }
                    Command::GridText(resp) => {
                        let _ = resp.send(Ok(pad.render_grid_text()));
                    }
                    Command::OnPrediction(cb, resp) => {
                        pad.on_prediction(cb);
                        let _ = resp.send(Ok(()));
                    }
                    Command::ClearOnPrediction(resp) => {
                        pad.clear_on_prediction();
                        let _ = resp.send(Ok(()));
                    }
                    Command::Close(resp) => {
                        let _ = resp.send(Ok(()));
                        break;
                    }
                }
            }
        });

        // Wait for the worker to report initialization success or failure
        let init_res = init_rx
            .await
            .map_err(|e| Error::Other(format!("Worker init canceled: {}", e)))?;
        init_res?;

        Ok(Self { cmd_tx })
    }

    /// Press the pointer down at (x, y).
    pub async fn pointer_down(&self, x: f32, y: f32) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::PointerDown(x, y, tx));
        rx.await
            .map_err(|e| Error::Other(format!("PointerDown canceled: {}", e)))?
    }

    /// Move the pointer to (x, y), extending the stroke if one is active.
    pub async fn pointer_move(&self, x: f32, y: f32) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::PointerMove(x, y, tx));
        rx.await
            .map_err(|e| Error::Other(format!("PointerMove canceled: {}", e)))?
    }

    /// Release the pointer, finishing the active stroke.
    pub async fn pointer_up(&self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::PointerUp(tx));
        rx.await
            .map_err(|e| Error::Other(format!("PointerUp canceled: {}", e)))?
    }

    /// Convenience: draw one full stroke in a single round trip.
    pub async fn draw_stroke(&self, points: &[crate::Point]) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self
            .cmd_tx
            .send(Command::Replay(vec![points.to_vec()], tx));
        rx.await
            .map_err(|e| Error::Other(format!("Replay canceled: {}", e)))?
    }

    /// Paint a pre-recorded stroke list.
    pub async fn replay_strokes(&self, strokes: Vec<Stroke>) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Replay(strokes, tx));
        rx.await
            .map_err(|e| Error::Other(format!("Replay canceled: {}", e)))?
    }

    /// Rasterize the drawing and submit it to the classifier, returning the
    /// predicted digit.
    pub async fn submit(&self) -> Result<u8> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Submit(tx));
        rx.await
            .map_err(|e| Error::Other(format!("Submit canceled: {}", e)))?
    }

    /// Record feedback on the current prediction (no-op when none is held).
    pub async fn record_feedback(&self, was_correct: bool) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Feedback(was_correct, tx));
        rx.await
            .map_err(|e| Error::Other(format!("Feedback canceled: {}", e)))?
    }

    /// Clear the drawing and the current prediction.
    pub async fn reset(&self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Reset(tx));
        rx.await
            .map_err(|e| Error::Other(format!("Reset canceled: {}", e)))?
    }

    /// Fetch a point-in-time summary of the pad state.
    pub async fn snapshot(&self) -> Result<PadSnapshot> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Snapshot(tx));
        rx.await
            .map_err(|e| Error::Other(format!("Snapshot canceled: {}", e)))?
    }

    /// Fetch the current grid as text art.
    pub async fn grid_text(&self) -> Result<String> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::GridText(tx));
        rx.await
            .map_err(|e| Error::Other(format!("GridText canceled: {}", e)))?
    }

    /// Register a callback invoked on the worker thread for each
    /// successful prediction.
    pub async fn on_prediction<F>(&self, cb: F) -> Result<()>
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::OnPrediction(Box::new(cb), tx));
        rx.await
            .map_err(|e| Error::Other(format!("OnPrediction canceled: {}", e)))?
    }

    /// Remove a previously registered prediction callback if any.
    pub async fn clear_on_prediction(&self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::ClearOnPrediction(tx));
        rx.await
            .map_err(|e| Error::Other(format!("ClearOnPrediction canceled: {}", e)))?
    }

    /// Shut down the background worker.
    pub async fn close(self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Close(tx));
        rx.await
            .map_err(|e| Error::Other(format!("Close canceled: {}", e)))?
    }
}
