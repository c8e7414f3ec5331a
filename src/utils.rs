use crate::graph::Person;
use std::io::{self, IsTerminal};

pub fn is_pipe() -> bool {
    !io::stdout().is_terminal()
}

pub fn print_info(msg: &str) {
    if !is_pipe() {
        println!("{}", msg);
    }
}

/// `name (age)`, or just `name` when the age is unknown.
pub fn friend_line(person: &Person) -> String {
    match person.age {
        Some(age) => format!("{} ({})", person.name, age),
        None => person.name.clone(),
    }
}
