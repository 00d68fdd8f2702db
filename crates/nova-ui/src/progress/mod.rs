//! Timed progress bar.

mod fill;
mod timer;


pub use fill::fill_percent;
pub use timer::ProgressTimer;
