pub mod posting;

pub use posting::{Category, Currency, Employment, JobPosting, PayUnit, RawPosting};
