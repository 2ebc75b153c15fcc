pub mod chatbot;
pub mod gemini;
pub mod ollama;
pub mod persona;
pub mod provider;
