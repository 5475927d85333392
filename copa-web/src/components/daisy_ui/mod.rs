pub mod alert;
pub mod badge;
pub mod foundation;
pub mod loading;
pub mod stat;

pub use alert::Alert;
pub use badge::Badge;
pub use foundation::{DaisyColor, DaisySize};
pub use loading::Loading;
pub use stat::{Stat, StatItem};
