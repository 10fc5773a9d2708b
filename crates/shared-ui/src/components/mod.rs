pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod input;
pub mod label;
pub mod navbar;
pub mod page_header;
pub mod separator;
pub mod sidebar;
pub mod skeleton;

// Re-exports for convenience
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use input::*;
pub use label::*;
pub use navbar::*;
pub use page_header::*;
pub use separator::*;
pub use sidebar::*;
pub use skeleton::*;
