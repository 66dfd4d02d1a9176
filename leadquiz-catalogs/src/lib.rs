pub mod auto_warranty;

// Re-export auto_warranty catalog
pub use auto_warranty::{STATES, auto_warranty, vehicle_table};
