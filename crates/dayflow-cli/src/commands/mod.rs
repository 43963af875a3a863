pub mod review;
pub mod streak;
pub mod task;
