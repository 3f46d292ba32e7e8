//! Provider clients implementing `wineai_core::completion::CompletionClient`.

pub mod openai_api_client;

pub use openai_api_client::OpenAIApiClient;
