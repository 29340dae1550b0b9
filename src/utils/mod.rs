// Utility functions
pub mod sanitize;
pub mod validation;
