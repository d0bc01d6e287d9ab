// src/format/ansi.rs

//! The `F` namespace: ANSI SGR sequences addressable from templates as
//! `{F.B}`, `{F.fg.R}`, `{F.bg.index}208m`, and so on.

/// Look up an attribute path below `F.` (e.g. `"B"`, `"fg.red"`).
pub fn lookup(path: &str) -> Option<&'static str> {
    match path.split_once('.') {
        Some(("fg", color)) => foreground(color),
        Some(("bg", color)) => background(color),
        Some(_) => None,
        None => attribute(path),
    }
}

fn attribute(name: &str) -> Option<&'static str> {
    Some(match name {
        "X" | "reset" => "\x1b[0m",
        "B" | "bold" => "\x1b[1m",
        "D" | "dim" => "\x1b[2m",
        "I" | "italic" => "\x1b[3m",
        "U" | "uline" => "\x1b[4m",
        "reverse" => "\x1b[7m",
        "strike" => "\x1b[9m",
        // SGR 22 ends both bold and dim.
        "XB" | "Xbold" | "XD" | "Xdim" => "\x1b[22m",
        "XI" | "Xitalic" => "\x1b[23m",
        "XU" | "Xuline" => "\x1b[24m",
        "Xreverse" => "\x1b[27m",
        "Xstrike" => "\x1b[29m",
        _ => return None,
    })
}

fn foreground(color: &str) -> Option<&'static str> {
    Some(match color {
        "K" | "black" => "\x1b[30m",
        "R" | "red" => "\x1b[31m",
        "G" | "green" => "\x1b[32m",
        "Y" | "yellow" => "\x1b[33m",
        "B" | "blue" => "\x1b[34m",
        "M" | "magenta" => "\x1b[35m",
        "C" | "cyan" => "\x1b[36m",
        "W" | "white" => "\x1b[37m",
        "index" => "\x1b[38;5;",
        "rgb" => "\x1b[38;2;",
        "X" | "default" => "\x1b[39m",
        _ => return None,
    })
}

fn background(color: &str) -> Option<&'static str> {
    Some(match color {
        "K" | "black" => "\x1b[40m",
        "R" | "red" => "\x1b[41m",
        "G" | "green" => "\x1b[42m",
        "Y" | "yellow" => "\x1b[43m",
        "B" | "blue" => "\x1b[44m",
        "M" | "magenta" => "\x1b[45m",
        "C" | "cyan" => "\x1b[46m",
        "W" | "white" => "\x1b[47m",
        "index" => "\x1b[48;5;",
        "rgb" => "\x1b[48;2;",
        "X" | "default" => "\x1b[49m",
        _ => return None,
    })
}
