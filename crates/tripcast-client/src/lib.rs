pub mod client;
pub mod session;


pub use client::PredictClient;
pub use session::Session;
