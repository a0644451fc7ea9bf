//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and page navigation
//! - `input`: Key event handling
//! - `responses`: Applying finished network requests
//! - `render`: UI rendering
//! - `worker`: Background request execution

mod input;
mod render;
mod responses;
mod state;
pub mod worker;


pub use state::App;
pub use worker::{Request, Response, Worker};
