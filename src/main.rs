//! parseview — interactive editor and result viewer for a remote
//! teaching compiler.
//!
//! Opens a TUI with an editor pane; Ctrl-R sends the document to the
//! compiler service and the token stream, syntax tree, and any error
//! location come back into the result views.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use parseview::remote::HttpCompileService;
use parseview::tui::App;

/// Starter document shown when no file is given.
const DEFAULT_SOURCE: &str = "#include <iostream>

using namespace std;

int main() {
    cout << \"Hello world!\";
    return 0;
}
";

#[derive(Parser, Debug)]
#[command(name = "parseview", version, about = "Editor front-end for a remote teaching compiler")]
struct Cli {
    /// Source file to open in the editor
    file: Option<PathBuf>,

    /// Compiler service endpoint
    #[arg(long, default_value = "http://127.0.0.1:8719/compile")]
    server: String,

    /// HTTP timeout in seconds (0 disables the timeout)
    #[arg(long, default_value_t = 15)]
    timeout: u64,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let source = match &cli.file {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("failed to read {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => DEFAULT_SOURCE.to_string(),
    };

    let timeout = if cli.timeout == 0 {
        None
    } else {
        Some(Duration::from_secs(cli.timeout))
    };
    let service = match HttpCompileService::new(cli.server.clone(), timeout) {
        Ok(service) => Arc::new(service),
        Err(e) => {
            eprintln!("failed to build HTTP client: {e}");
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&source, service, cli.server);
    let result = app.run(&mut terminal);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
