//! ANSI escape helpers used to highlight level labels.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red = 31,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Style {
    color: Option<Color>,
    bold: bool,
    bright: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Use the high-intensity variant of the foreground color (`90..=97`).
    pub fn bright(mut self) -> Self {
        self.bright = true;
        self
    }

    /// Wrap `text` in escape sequences, or return it unchanged when no style is set.
    pub fn paint(&self, text: &str) -> String {
        let mut codes = vec![];
        if self.bold {
            codes.push(1_u8);
        }
        if let Some(color) = self.color {
            let base = color as u8;
            codes.push(if self.bright { base + 60 } else { base });
        }
        if codes.is_empty() {
            return text.to_string();
        }

        let codes = codes
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(";");
        format!("\x1b[{codes}m{text}\x1b[0m")
    }
}
