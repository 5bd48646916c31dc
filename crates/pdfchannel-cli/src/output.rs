use std::io::Write;

use owo_colors::OwoColorize;
use pdfchannel_core::MethodResponse;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Render a channel response for a human reader.
pub fn print_response(
    w: &mut dyn Write,
    response: &MethodResponse,
    color: ColorMode,
) -> std::io::Result<()> {
    match response {
        MethodResponse::Success { result } => match result.as_str() {
            Some(text) => {
                w.write_all(text.as_bytes())?;
                if !text.ends_with('\n') {
                    writeln!(w)?;
                }
            }
            None => writeln!(w, "{}", result)?,
        },
        MethodResponse::Error { code, message } => {
            if color.enabled() {
                writeln!(w, "{} {}", format!("{}:", code).bold().red(), message)?;
            } else {
                writeln!(w, "{}: {}", code, message)?;
            }
        }
        MethodResponse::NotImplemented => {
            if color.enabled() {
                writeln!(w, "{}", "method not implemented on this channel".yellow())?;
            } else {
                writeln!(w, "method not implemented on this channel")?;
            }
        }
    }
    Ok(())
}
