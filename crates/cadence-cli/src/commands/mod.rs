pub mod add;
pub mod delete;
pub mod done;
pub mod expand;
pub mod list;
pub mod preview;
