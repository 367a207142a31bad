// Composition root for the Excel Up backend.
//
// - Read server config from the environment.
// - Wire the process environment into the client config handler.
// - Wire the workbook adapters into the inventory update handler.
// - Expose the HTTP router to the binary.

pub mod config;
pub mod env_file;
pub mod http;
pub mod state;
