// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod page_header;

// Primitive wrappers
pub mod progress;

// Data visualization
pub mod chart;

// Re-exports for convenience
pub use badge::*;
pub use button::*;
pub use card::*;
pub use chart::*;
pub use page_header::*;
pub use progress::*;
