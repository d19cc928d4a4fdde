use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "nmapr::print";

const KEY_WIDTH: usize = 9;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// A rule of `fill` across the output width with `title` in the middle.
fn rule(fill: &str, title: Option<&str>) -> String {
    let Some(title) = title else {
        return fill.repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string();
    };

    let title = format!("⟦ {} ⟧", title.to_uppercase());
    let pad = TOTAL_WIDTH.saturating_sub(title.chars().count());
    format!(
        "{}{}{}",
        fill.repeat(pad / 2).color(colors::SEPARATOR),
        title.color(colors::PRIMARY),
        fill.repeat(pad - pad / 2).color(colors::SEPARATOR)
    )
}

pub fn header(msg: &str, q_level: u8) {
    if q_level == 0 {
        print(&rule("─", Some(msg)));
    }
}

pub fn fat_separator() {
    print(&rule("═", None));
}

/// `> msg`, used for the echoed command line.
pub fn print_status<T: AsRef<str>>(msg: T) {
    print(&format!(
        "{} {}",
        ">".color(colors::SEPARATOR),
        msg.as_ref().color(colors::TEXT_DEFAULT)
    ));
}

/// `[idx] name` above a host's detail tree.
pub fn tree_head(idx: usize, name: &str) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

pub fn as_tree_one_level<V: Display>(key_value_pair: &[(String, V)]) {
    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        let branch: ColoredString = if last { "└─" } else { "├─" }.color(colors::SEPARATOR);
        let dots: usize = KEY_WIDTH.saturating_sub(key.chars().count());
        let output: String = format!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(dots).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        );
        print(&output);
    }
}

/// Centers plain `text` on the separator width before coloring it.
pub fn centerln(text: &str, color: Color) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(text.chars().count()) / 2);
    print(&format!("{}{}", space, text.color(color).bold()));
}

pub fn no_results() {
    centerln("no hosts answered", colors::CLOSED);
}

pub fn end_of_program() {
    fat_separator();
}
