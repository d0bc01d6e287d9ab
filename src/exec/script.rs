// src/exec/script.rs

//! Shell quoting and script assembly.

use std::borrow::Cow;

use crate::exec::request::EnvAssignment;

fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_@%+=:,./-".contains(c)
}

/// Quote a word so the shell reads it back unchanged.
pub fn quote(word: &str) -> Cow<'_, str> {
    if word.is_empty() {
        return Cow::Borrowed("''");
    }
    if word.chars().all(is_safe) {
        return Cow::Borrowed(word);
    }
    Cow::Owned(format!("'{}'", word.replace('\'', r#"'"'"'"#)))
}

pub fn join<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| quote(w.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Declarations first, then the command, chained with `&&` so a failed
/// declaration stops the command from running.
pub fn build_script(env: &[EnvAssignment], command: &str, args: &[String]) -> String {
    let mut statements: Vec<String> = env.iter().map(EnvAssignment::declaration).collect();

    let mut words = Vec::with_capacity(args.len() + 1);
    words.push(command);
    words.extend(args.iter().map(String::as_str));
    statements.push(join(&words));

    statements.join(" && ")
}
