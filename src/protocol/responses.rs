//! Shell responses
//!
//! Literal messages shown for reported conditions.

pub const COMMAND_TOO_LONG: &str = "Command too long";

/// ANSI sequence that clears the terminal and homes the cursor
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub fn cd_into_file(name: &str) -> String {
    format!("Unable cd to file \"{}\"", name)
}

pub fn read_denied(name: &str) -> String {
    format!("Unable to read file \"{}\": permission denied", name)
}

pub fn write_denied(name: &str) -> String {
    format!("Unable to write file \"{}\": permission denied", name)
}

pub fn invalid_mode(arg: &str) -> String {
    format!("Unable to set mod \"{}\"", arg)
}

pub fn unknown_command(name: &str) -> String {
    format!("Unknown command \"{}\"", name)
}

pub fn no_manual(name: &str) -> String {
    format!("No manual entry for \"{}\"", name)
}

pub fn missing_operand(command: &str) -> String {
    format!("{}: missing operand", command)
}
