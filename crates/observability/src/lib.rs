//! Tracing/logging setup shared by the sample binaries.

/// Initialize process-wide logging, one human-readable line per event.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::Format::Full);
}

/// Initialize process-wide logging with one JSON object per line.
pub fn init_json() {
    tracing::init(tracing::Format::Json);
}

/// Tracing configuration (filters, layers).
pub mod tracing;

#[cfg(test)]
mod tests {
    #[test]
    fn both_entry_points_can_be_called_in_any_order() {
        super::init_json();
        super::init();
        super::init_json();
        ::tracing::info!("logging initialized");
    }
}
