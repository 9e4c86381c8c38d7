pub mod controller;
pub mod pid;
pub mod scripted;

pub use controller::Controller;
pub use pid::{Pid, PidConfig};
pub use scripted::ScriptedController;
