//! Validation utilities for relay inputs and settings

/// Validate the number of locations in a batch request
pub fn validate_batch_size(len: usize, max: usize) -> Result<(), &'static str> {
    if len == 0 {
        return Err("No locations provided");
    }
    if len > max {
        return Err("Too many locations in one batch");
    }
    Ok(())
}

/// Validate a shared client key before it is accepted as configuration
pub fn validate_client_key(key: &str) -> Result<(), &'static str> {
    if key.trim().is_empty() {
        return Err("Client key must not be empty");
    }
    if key.trim() != key {
        return Err("Client key must not carry surrounding whitespace");
    }
    if !key.chars().all(|c| c.is_ascii_graphic()) {
        return Err("Client key must be printable ASCII");
    }
    Ok(())
}
