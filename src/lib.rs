//! House price prediction web service.
//!
//! Serves an HTML form, runs the submitted fields through a pre-trained
//! regression artifact loaded once at startup, and renders the predicted
//! price back into the same page.

pub mod config;
pub mod inference;
pub mod models;
pub mod routes;

pub use config::ServerConfig;
pub use inference::PriceModel;
pub use models::{PredictForm, PriceInput};
