//! Output trait for rendering reports.

/// Target output for reports.
pub trait Output {
    /// Render a plain line of text.
    fn line(&mut self, text: &str);

    /// Render a shell command the user should run.
    fn command(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }

    fn command(&mut self, text: &str) {
        println!("  {text}");
    }

    fn newline(&mut self) {
        println!();
    }
}
