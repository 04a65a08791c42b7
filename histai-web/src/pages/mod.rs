pub mod authors;
pub mod histagent;
pub mod histbench;
pub mod home;
pub mod impact;
pub mod submit;
