//! Shared mock ports for unit tests.

mod mock_console;
mod mock_key_source;
mod mock_launcher;

pub(crate) use mock_console::ScriptedConsole;
pub(crate) use mock_key_source::StaticKeySource;
pub(crate) use mock_launcher::RecordingLauncher;
