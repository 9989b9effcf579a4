pub use p3_baby_bear;
pub use p3_goldilocks;
pub use p3_koala_bear;
pub use soundcalc;

pub mod config;
pub mod report;
pub mod utils;
