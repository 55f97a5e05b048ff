//! The welcome banner shown at the top of reader screens.

use chrono::Local;
use nudge::ReaderKind;

use super::terminal::Style;

const TODO_LOGO: [&str; 5] = [
    r"  _____         _       ",
    r" |_   _|__   __| | ___  ",
    r"   | |/ _ \ / _` |/ _ \ ",
    r"   | | (_) | (_| | (_) |",
    r"   |_|\___/ \__,_|\___/ ",
];

const READ_LOGO: [&str; 5] = [
    r"  ____                _ ",
    r" |  _ \ ___  __ _  __| |",
    r" | |_) / _ \/ _` |/ _` |",
    r" |  _ <  __/ (_| | (_| |",
    r" |_| \_\___|\__,_|\__,_|",
];

const QUES_LOGO: [&str; 5] = [
    r"   ___                  ",
    r"  / _ \ _   _  ___  ___ ",
    r" | | | | | | |/ _ \/ __|",
    r" | |_| | |_| |  __/\__ \",
    r"  \__\_\\__,_|\___||___/",
];

const READER_LOGO: [&str; 5] = [
    r"  ____                _           ",
    r" |  _ \ ___  __ _  __| | ___ _ __ ",
    r" | |_) / _ \/ _` |/ _` |/ _ \ '__|",
    r" |  _ <  __/ (_| | (_| |  __/ |   ",
    r" |_| \_\___|\__,_|\__,_|\___|_|   ",
];

const fn logo(kind: Option<ReaderKind>) -> &'static [&'static str] {
    match kind {
        Some(ReaderKind::Todo) => &TODO_LOGO,
        Some(ReaderKind::Read) => &READ_LOGO,
        Some(ReaderKind::Ques) => &QUES_LOGO,
        None => &READER_LOGO,
    }
}

/// Prints the banner: flavor artwork on the left, tool info on the right.
pub fn print(style: &Style) {
    let art = logo(style.kind());
    let flavor = style.kind().map_or("reader", ReaderKind::name);
    let info = [
        format!("| nudge v{} ({flavor})", env!("CARGO_PKG_VERSION")),
        format!("| date: {}", Local::now().format("%Y-%m-%d")),
    ];

    let width = art.iter().map(|line| line.len()).max().unwrap_or(0);
    let rows = art.len().max(info.len());

    println!();
    for row in 0..rows {
        let left = art.get(row).copied().unwrap_or("");
        let right = info.get(row).map_or("", String::as_str);
        let padding = " ".repeat(width - left.len());
        println!("{}{padding}  {right}", style.accent(left));
    }
    println!();
}
