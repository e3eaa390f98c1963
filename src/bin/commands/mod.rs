pub mod check_cmd;
pub mod inspect_cmd;

pub use check_cmd::cmd_check;
pub use inspect_cmd::cmd_inspect;
