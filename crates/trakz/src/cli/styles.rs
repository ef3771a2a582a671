use console::Style;
use once_cell::sync::Lazy;

pub static INDEX: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static STARS: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static STATUS: Lazy<Style> = Lazy::new(|| Style::new().magenta());
pub static TAG: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static TIME: Lazy<Style> = Lazy::new(|| Style::new().dim().italic());

pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red().bold());
