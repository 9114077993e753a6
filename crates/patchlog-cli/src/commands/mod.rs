pub mod history;
pub mod latest;
pub mod updates;
