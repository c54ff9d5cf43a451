//! Output trait for rendering reports to different formats.

use owo_colors::{OwoColorize, Stream, Style};

/// Prefix of every status line.
pub const PREFIX: &str = "svg-to-ts:";

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render it.
pub trait Output {
    /// Render a success status line pointing at a location.
    fn success(&mut self, msg: &str, location: &str);

    /// Render a failure status line.
    fn failure(&mut self, msg: &str);

    /// Render an added item (e.g., new file).
    fn added_item(&mut self, text: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
///
/// Colors are applied only when stdout supports them.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    fn paint(text: &str, style: Style) -> String {
        text.if_supports_color(Stream::Stdout, |t| t.style(style))
            .to_string()
    }

    fn prefix() -> String {
        Self::paint(PREFIX, Style::new().blue().bold())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn success(&mut self, msg: &str, location: &str) {
        println!(
            "{} {} {}",
            Self::prefix(),
            Self::paint(msg, Style::new().green()),
            Self::paint(location, Style::new().underline())
        );
    }

    fn failure(&mut self, msg: &str) {
        println!("{} {}", Self::prefix(), Self::paint(msg, Style::new().red()));
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        // Generated files end with a newline already.
        print!("{}", text);
        if !text.ends_with('\n') {
            println!();
        }
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Records rendered lines as plain text.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn success(&mut self, msg: &str, location: &str) {
        self.lines.push(format!("{PREFIX} {msg} {location}"));
    }

    fn failure(&mut self, msg: &str) {
        self.lines.push(format!("{PREFIX} {msg}"));
    }

    fn added_item(&mut self, text: &str) {
        self.lines.push(format!("+ {text}"));
    }

    fn divider(&mut self, label: &str) {
        self.lines.push(format!("-- {label} --"));
    }

    fn preformatted(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn newline(&mut self) {
        self.lines.push(String::new());
    }
}
