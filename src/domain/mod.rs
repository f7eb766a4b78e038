// Form inputs and their widget bounds
pub mod phone_specs;

// Model input row
pub mod features;

// Class code to price band table
pub mod pricing;

// Domain-specific error types
pub mod errors;
