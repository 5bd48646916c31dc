use std::io::{Read, Write};
use std::path::PathBuf;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use clap::{Parser, Subcommand};
use serde_json::json;

use pdfchannel_core::{
    METHOD_EXTRACT_TEXT, MethodCall, MethodResponse, PdfBackend, config_file, dispatch,
};

mod output;

use output::ColorMode;

/// PDF text extraction channel - host-side harness for the extractText method
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract the text of a PDF through the method channel
    Extract {
        /// Path to the PDF file (omit when reading bytes with --stdin)
        file_path: Option<PathBuf>,

        /// Read the PDF bytes from stdin instead of a file path
        #[arg(long)]
        stdin: bool,

        /// Backend to dispatch to (lopdf, mupdf)
        #[arg(long)]
        backend: Option<String>,

        /// Print the raw response envelope as JSON
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Path to write the output to
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the backends compiled into this binary
    Backends,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Backends => {
            for name in backend_names() {
                println!("{}", name);
            }
            Ok(())
        }
        Command::Extract {
            file_path,
            stdin,
            backend,
            json,
            no_color,
            output,
        } => extract(file_path, stdin, backend, json, no_color, output),
    }
}

fn extract(
    file_path: Option<PathBuf>,
    stdin: bool,
    backend: Option<String>,
    json: bool,
    no_color: bool,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = config_file::load_config();

    // Resolve the backend: CLI flag > env var > config file > default.
    let backend_name = backend
        .or_else(|| std::env::var("PDFCHANNEL_BACKEND").ok())
        .or_else(|| {
            config
                .extraction
                .as_ref()
                .and_then(|e| e.backend.clone())
        })
        .unwrap_or_else(|| "lopdf".to_string());
    let backend = select_backend(&backend_name)?;

    let args = match (file_path, stdin) {
        (Some(_), true) => anyhow::bail!("pass a file path or --stdin, not both"),
        (None, false) => anyhow::bail!("pass a file path or --stdin"),
        (Some(path), false) => {
            let Some(path) = path.to_str() else {
                anyhow::bail!("path is not valid UTF-8: {}", path.display());
            };
            json!({ "path": path })
        }
        (None, true) => {
            let mut bytes = Vec::new();
            std::io::stdin().read_to_end(&mut bytes)?;
            if let Some(max_mb) = config.extraction.as_ref().and_then(|e| e.max_input_mb) {
                let max_bytes = max_mb as usize * 1024 * 1024;
                if bytes.len() > max_bytes {
                    anyhow::bail!(
                        "input is {} bytes, over the configured {} MB limit",
                        bytes.len(),
                        max_mb
                    );
                }
            }
            json!({ "bytes": BASE64.encode(&bytes) })
        }
    };

    let call = MethodCall::new(METHOD_EXTRACT_TEXT, args);
    let response = dispatch(&call, backend.as_ref());

    let use_color = !no_color && output.is_none();
    let color = ColorMode(use_color);

    let mut writer: Box<dyn Write> = if let Some(ref output_path) = output {
        Box::new(std::fs::File::create(output_path)?)
    } else {
        Box::new(std::io::stdout())
    };

    if json {
        serde_json::to_writer_pretty(&mut writer, &response)?;
        writeln!(writer)?;
    } else {
        output::print_response(&mut writer, &response, color)?;
    }

    if !matches!(response, MethodResponse::Success { .. }) {
        std::process::exit(1);
    }
    Ok(())
}

fn select_backend(name: &str) -> anyhow::Result<Box<dyn PdfBackend>> {
    match name {
        "lopdf" => Ok(Box::new(pdfchannel_lopdf::LopdfBackend::new())),
        #[cfg(feature = "mupdf")]
        "mupdf" => Ok(Box::new(pdfchannel_mupdf::MupdfBackend::new())),
        #[cfg(not(feature = "mupdf"))]
        "mupdf" => anyhow::bail!("this binary was built without the mupdf backend"),
        other => anyhow::bail!(
            "unknown backend: {} (available: {})",
            other,
            backend_names().join(", ")
        ),
    }
}

fn backend_names() -> Vec<&'static str> {
    let mut names = vec!["lopdf"];
    #[cfg(feature = "mupdf")]
    names.push("mupdf");
    names
}
