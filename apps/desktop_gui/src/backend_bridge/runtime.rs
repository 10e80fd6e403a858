//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::load_directory;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::LoadFailed(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                return;
            }
        };

        runtime.block_on(async move {
            tracing::debug!("backend worker ready");
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::LoadDirectory { settings } => {
                        let event = match load_directory(&settings).await {
                            Ok(directory) => {
                                tracing::info!(
                                    people = directory.people.len(),
                                    "directory ready for display"
                                );
                                UiEvent::DirectoryLoaded(directory)
                            }
                            Err(err) => {
                                tracing::error!(
                                    api = %settings.api_base_url,
                                    "directory load failed: {err}"
                                );
                                UiEvent::LoadFailed(UiError::from_network_error(
                                    UiErrorContext::LoadDirectory,
                                    &err,
                                ))
                            }
                        };
                        if ui_tx.send(event).is_err() {
                            tracing::warn!("ui event receiver dropped; stopping backend worker");
                            break;
                        }
                    }
                }
            }
        });
    });
}
