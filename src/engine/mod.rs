// ==========================================
// Warehouse FEFO Core - Engine Layer
// ==========================================
// Responsibility: business rule engines over in-memory domain values.
// Red line: engines do no I/O and hold no state between calls; "now"
// is always injected by the caller.
// ==========================================

pub mod allocator;
pub mod expiry_monitor;

// Re-export core engines
pub use allocator::FefoAllocator;
pub use expiry_monitor::ExpiryMonitor;
