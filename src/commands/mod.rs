pub mod clear;
pub mod edit;
pub mod list;
pub mod set;
pub mod shell;
pub mod show;
