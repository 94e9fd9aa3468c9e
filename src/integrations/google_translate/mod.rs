pub mod client;

pub use client::GoogleTranslateClient;
