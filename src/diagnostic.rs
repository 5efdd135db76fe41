use std::fmt;

/// Where in a line a diagnostic points. Parse errors report the offending
/// token; lexical and runtime errors carry no token context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorLocation {
    None,
    AtEnd,
    At(String),
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorLocation::None => Ok(()),
            ErrorLocation::AtEnd => write!(f, " at end"),
            ErrorLocation::At(lexeme) => write!(f, " at '{}'", lexeme),
        }
    }
}

/// A single renderable diagnostic. `Display` produces the canonical
/// `[line <N>] Error<where>: <message>` form that every driver and test
/// relies on.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub line: usize,
    pub location: ErrorLocation,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: usize, location: ErrorLocation, message: impl Into<String>) -> Self {
        Self {
            line,
            location,
            message: message.into(),
        }
    }

    pub fn at_line(line: usize, message: impl Into<String>) -> Self {
        Self::new(line, ErrorLocation::None, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error{}: {}", self.line, self.location, self.message)
    }
}

/// Returns the content of a 1-based line of source, if it exists.
fn line_content(source: &str, line_num: usize) -> Option<&str> {
    source.lines().nth(line_num.saturating_sub(1))
}

/// Renders diagnostics for terminal output: the canonical header line plus,
/// when the source line is available, a gutter excerpt pointing at it.
pub struct DiagnosticRenderer<'a> {
    source: &'a str,
    use_color: bool,
}

impl<'a> DiagnosticRenderer<'a> {
    pub fn new(source: &'a str, use_color: bool) -> Self {
        Self { source, use_color }
    }

    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut output = String::new();

        output.push_str(&self.style_red_bold(&diagnostic.to_string()));
        output.push('\n');

        if let Some(content) = line_content(self.source, diagnostic.line) {
            let line_label = diagnostic.line.to_string();
            let gutter_width = line_label.len() + 1;
            output.push_str(&format!(
                "{} {} {}\n",
                self.style_blue(&line_label),
                self.style_blue("|"),
                content
            ));
            if let ErrorLocation::At(lexeme) = &diagnostic.location {
                if let Some(col) = content.find(lexeme.as_str()) {
                    let underline =
                        format!("{}{}", " ".repeat(col), "^".repeat(lexeme.len().max(1)));
                    output.push_str(&format!(
                        "{} {} {}\n",
                        " ".repeat(gutter_width - 1),
                        self.style_blue("|"),
                        self.style_red(&underline)
                    ));
                }
            }
        }

        output
    }

    fn style_red(&self, s: &str) -> String {
        if self.use_color {
            format!("\x1b[31m{}\x1b[0m", s)
        } else {
            s.to_string()
        }
    }

    fn style_red_bold(&self, s: &str) -> String {
        if self.use_color {
            format!("\x1b[1;31m{}\x1b[0m", s)
        } else {
            s.to_string()
        }
    }

    fn style_blue(&self, s: &str) -> String {
        if self.use_color {
            format!("\x1b[34m{}\x1b[0m", s)
        } else {
            s.to_string()
        }
    }
}

/// Render a batch of diagnostics, one excerpt per diagnostic.
pub fn render_diagnostics(source: &str, diagnostics: &[Diagnostic], use_color: bool) -> String {
    let renderer = DiagnosticRenderer::new(source, use_color);
    let mut output = String::new();
    for diagnostic in diagnostics {
        output.push_str(&renderer.render(diagnostic));
    }
    output
}
