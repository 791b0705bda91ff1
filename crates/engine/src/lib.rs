#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod equipment;
mod error;
mod exercise;
mod history;
mod import;
mod metrics;
mod progress;
mod progression;
mod rules;
mod service;
mod session;
mod standards;

pub use equipment::*;
pub use error::*;
pub use exercise::*;
pub use history::*;
pub use import::*;
pub use metrics::*;
pub use progress::*;
pub use progression::*;
pub use rules::*;
pub use service::*;
pub use session::*;
pub use standards::*;
