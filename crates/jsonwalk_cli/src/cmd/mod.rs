/// Shape validation and summary command.
pub mod check;
/// Path value extraction command.
pub mod get;
/// Node listing command.
pub mod paths;
/// Indented tree printing command.
pub mod print;
/// Path rewrite command.
pub mod set;
/// Shared argument parsing and output helpers.
pub mod util;
