use crate::state::{ContactPayload, SubmitError};
use log::{info, warn};
use serde::Deserialize;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::Duration;

pub enum IoCommand {
    SubmitContact {
        endpoint: String,
        timeout_secs: u64,
        payload: ContactPayload,
    },
}

pub enum IoResult {
    ContactSubmitted,
    ContactFailed(SubmitError),
}

/// Answer shape of the form relay. Anything without a true `success` flag
/// counts as declined.
#[derive(Deserialize)]
struct RelayResponse {
    #[serde(default)]
    success: bool,
}

pub fn spawn_worker(ctx: eframe::egui::Context) -> (Sender<IoCommand>, Receiver<IoResult>) {
    let (cmd_tx, cmd_rx) = channel();
    let (res_tx, res_rx) = channel();

    let ctx_clone = ctx.clone();
    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                IoCommand::SubmitContact {
                    endpoint,
                    timeout_secs,
                    payload,
                } => {
                    let result = match submit_contact(&endpoint, timeout_secs, &payload) {
                        Ok(()) => {
                            info!("contact message relayed");
                            IoResult::ContactSubmitted
                        }
                        Err(e) => {
                            warn!("contact relay failed: {e:?}");
                            IoResult::ContactFailed(e)
                        }
                    };
                    let _ = res_tx.send(result);
                }
            }
            ctx_clone.request_repaint();
        }
    });

    (cmd_tx, res_rx)
}

/// One POST, no retry. The relay is opaque: all we trust is the HTTP status
/// and a `success` boolean in the JSON body.
fn submit_contact(
    endpoint: &str,
    timeout_secs: u64,
    payload: &ContactPayload,
) -> Result<(), SubmitError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    let response = client
        .post(endpoint)
        .json(payload)
        .send()
        .map_err(classify_send_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(SubmitError::BadStatus(status.as_u16()));
    }

    let body: RelayResponse = response.json().unwrap_or(RelayResponse { success: false });
    if body.success {
        Ok(())
    } else {
        Err(SubmitError::Declined)
    }
}

fn classify_send_error(e: reqwest::Error) -> SubmitError {
    if e.is_timeout() {
        SubmitError::Timeout
    } else {
        SubmitError::Network(e.to_string())
    }
}
