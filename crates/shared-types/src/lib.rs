pub mod config;
pub mod error;
pub mod icon;

// Dashboard domain modules
pub mod datasets;
pub mod metrics;
pub mod role;
pub mod tab;
pub mod view;

pub use config::*;
pub use error::*;
pub use icon::*;

pub use datasets::*;
pub use metrics::*;
pub use role::*;
pub use tab::*;
pub use view::*;
