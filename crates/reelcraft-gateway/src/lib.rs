//! HTTP clients for the collaborator services the Reelcraft pipeline
//! depends on: the AI gateway (text + image generation) and the speech
//! synthesis service.
//!
//! Consumers program against the capability traits in [`capability`];
//! the concrete clients here are wired in at application startup.

pub mod capability;
pub mod chat;
pub mod config;
pub mod error;
pub mod speech;

pub use capability::{ImageGeneration, SpeechAudio, SpeechSynthesis, TextGeneration};
pub use chat::AiGatewayClient;
pub use config::{AiGatewayConfig, SpeechConfig};
pub use error::{GatewayError, GatewayResult};
pub use speech::SpeechClient;
