use std::io;
use std::sync::Arc;
use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tokio::sync::Mutex;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use genre_grid::config::Config;
use genre_grid::controller::AppController;
use genre_grid::logging;
use genre_grid::model::{AppModel, ItunesCatalog};
use genre_grid::view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    if let Err(e) = logging::init_logging(&config.log_dir) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!(
        relay = %config.relay_base_url,
        endpoint = %config.search_base_url,
        entity = %config.entity,
        "=== genre-grid starting ==="
    );

    let catalog = ItunesCatalog::new(&config)?;

    let model = Arc::new(Mutex::new(AppModel::new()));
    let controller = AppController::new(model.clone(), Arc::new(catalog));

    if let Some(query) = &config.query {
        let mut model_guard = model.lock().await;
        model_guard.update_search_query(query.clone());
        controller.submit_search(&mut model_guard, query);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("genre-grid shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
) -> io::Result<()> {
    loop {
        let width = terminal.size()?.width;

        let (snapshot, should_quit) = {
            let mut model_guard = model.lock().await;
            model_guard.set_grid_columns(AppView::grid_columns(width));
            (model_guard.clone(), model_guard.should_quit())
        };

        if should_quit {
            break;
        }

        terminal.draw(|f| {
            AppView::render(f, &snapshot);
        })?;

        // Short poll so finished searches show up promptly
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                controller.handle_key_event(key).await;
            }
        }
    }

    Ok(())
}
