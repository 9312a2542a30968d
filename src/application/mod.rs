/// Application layer - Use cases, view state and DTOs
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod search;
pub mod session;
pub mod state;
pub mod use_cases;
