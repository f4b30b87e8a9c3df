//! Themes command: list the builtin themes.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::{CardStyle, Theme};

/// List builtin themes
#[derive(Args, Debug)]
pub struct ThemesArgs {
    /// Print a theme as YAML instead of listing
    #[arg(long, value_name = "NAME")]
    pub show: Option<String>,
}

pub fn run(args: ThemesArgs, printer: &Printer) -> Result<()> {
    if let Some(name) = &args.show {
        let theme = crate::config::resolve_theme(name)?;
        print!("{}", theme.to_yaml()?);
        return Ok(());
    }

    for line in listing() {
        println!("{}", line);
    }
    printer.status("Listed", &plural(Theme::BUILTIN.len(), "theme", "themes"));
    Ok(())
}

/// One line per builtin theme: name, style and default page size.
pub fn listing() -> Vec<String> {
    Theme::BUILTIN
        .iter()
        .filter_map(|name| Theme::builtin(name))
        .map(|theme| {
            let style = match theme.style {
                CardStyle::FullBleed => "cover-cropped artwork under a tint",
                CardStyle::Framed => "artwork thumbnail on a flat background",
            };
            format!("{:<12} {} ({} page)", theme.name, style, theme.page)
        })
        .collect()
}
