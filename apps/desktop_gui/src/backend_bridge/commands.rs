//! Backend commands queued from UI to backend worker.

use client_core::Settings;

pub enum BackendCommand {
    LoadDirectory { settings: Settings },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadDirectory { .. } => "load_directory",
        }
    }
}
