use crate::checks::issue::{FAILURE_GLYPH, SUCCESS_GLYPH};
use console::style;

pub struct Console;

impl Console {
    const WIDTH: usize = 40;

    fn horizontal_border() -> String {
        "═".repeat(Self::WIDTH)
    }

    pub fn section(title: &str) {
        println!();
        let border = Self::horizontal_border();
        println!("{}", style(format!("╔{border}╗")).cyan().bold());
        println!(
            "{}",
            style(format!(" {title:^width$} ", width = Self::WIDTH)).cyan().bold()
        );
        println!("{}", style(format!("╚{border}╝")).cyan().bold());
    }

    pub fn title(text: &str) {
        println!();
        println!("{}", style(text).cyan().bold());
    }

    pub fn info(label: &str, value: &str) {
        println!("{}: {}", style(label).dim().cyan(), style(value).white());
    }

    pub fn success(text: &str) {
        println!("{} {}", style(SUCCESS_GLYPH).green().bold(), style(text).green());
    }

    pub fn error(text: &str) {
        println!("{} {}", style(FAILURE_GLYPH).red().bold(), style(text).red());
    }

    pub fn progress(text: &str) {
        println!("{} {}", style("→").yellow().bold(), style(text).yellow());
    }
}
