// Model abstraction and the smartcore-backed pipeline
pub mod ml;

// Form values -> price band
pub mod prediction_service;

// Startup wiring
pub mod system;
