//! Holocron CLI — terminal Star Wars catalog and favorites viewer

mod keys;
mod ui;

use std::error::Error;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use clap::Parser;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use tracing_subscriber::EnvFilter;

use holocron::route::Route;
use holocron_app::app::{AppCommand, AppController, DetailState};
use holocron_app::config::files::{LOG, SETTINGS};
use holocron_app::data::{data_path, FavoritesStore, FileStorage, Settings};
use holocron_app::providers::SwapiSource;

use keys::Action;

#[derive(Parser)]
#[command(name = "holocron", about = "Star Wars catalog and favorites viewer", version)]
struct Cli {
    /// Initial navigation path (e.g. /detail/people/1)
    #[arg(default_value = "/")]
    path: String,

    /// Reference API base URL (overrides settings)
    #[arg(long)]
    api_base: Option<String>,

    /// Directory for durable storage (overrides settings)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log file (defaults to holocron.log in the storage directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print stored favorites and exit
    #[arg(long)]
    favorites: bool,

    /// Write the effective settings (after overrides) to settings.json and exit
    #[arg(long)]
    save_settings: bool,
}

/// Front-end state that is not part of the controller
struct Tui {
    selected: usize,
    running: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let (mut settings, settings_error) = match Settings::load() {
        Ok(s) => (s, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    if let Some(api_base) = cli.api_base {
        settings.api_base_url = api_base;
    }
    if let Some(dir) = cli.data_dir {
        settings.data_dir = Some(dir);
    }

    if cli.save_settings {
        settings.save()?;
        println!("Settings saved to {}", data_path(SETTINGS)?.display());
        return Ok(());
    }

    let storage_dir = settings.storage_dir()?;
    let log_path = cli.log_file.unwrap_or_else(|| storage_dir.join(LOG));
    init_logging(&log_path)?;
    if let Some(e) = settings_error {
        tracing::warn!(error = %e, "could not load settings, using defaults");
    }

    let favorites = FavoritesStore::load(Box::new(FileStorage::new(&storage_dir)));

    if cli.favorites {
        for entry in favorites.entries() {
            println!("{}\t{}\t{}", entry.category, entry.name(), entry.url());
        }
        return Ok(());
    }

    let source = Arc::new(SwapiSource::from_settings(&settings)?);
    let mut ctrl = AppController::new(source, favorites);
    ctrl.start(Route::parse(&cli.path));

    // Enter TUI
    terminal::enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut ctrl);

    // Restore terminal
    terminal::disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    result
}

/// Install the tracing subscriber writing to `path`
///
/// The terminal belongs to the TUI, so nothing is logged to stderr.
fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("holocron=info,holocron_app=info,holocron_cli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run<B: Backend>(terminal: &mut Terminal<B>, ctrl: &mut AppController) -> Result<(), Box<dyn Error>> {
    let mut tui = Tui {
        selected: 0,
        running: true,
    };
    let tick_rate = Duration::from_millis(50);
    let mut last_tick = Instant::now();

    while tui.running {
        // Apply fetch results
        ctrl.poll();
        clamp_selection(&mut tui, ctrl);

        terminal.draw(|f| ui::draw(f, ctrl, tui.selected))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = keys::map_key(key.code, ctrl.route().is_list()) {
                        apply(action, &mut tui, ctrl);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn clamp_selection(tui: &mut Tui, ctrl: &AppController) {
    let len = ctrl.cards().len();
    if tui.selected >= len {
        tui.selected = len.saturating_sub(1);
    }
}

fn apply(action: Action, tui: &mut Tui, ctrl: &mut AppController) {
    match action {
        Action::Quit => tui.running = false,
        Action::ToggleView => {
            if ctrl.route().is_list() {
                ctrl.handle(AppCommand::SetView(ctrl.view().toggled()));
                tui.selected = 0;
            }
        }
        Action::Up => tui.selected = tui.selected.saturating_sub(1),
        Action::Down => tui.selected = tui.selected.saturating_add(1),
        Action::ToggleFavorite => {
            if let Some((item, category)) = current_item(tui, ctrl) {
                ctrl.handle(AppCommand::ToggleFavorite { item, category });
            }
        }
        Action::Open => {
            if ctrl.route().is_list() {
                let route = ctrl.cards().get(tui.selected).and_then(|c| c.detail_route());
                if let Some(route) = route {
                    ctrl.handle(AppCommand::Navigate(route));
                }
            } else if matches!(ctrl.detail().map(|d| d.state()), Some(DetailState::NotFound)) {
                ctrl.handle(AppCommand::Home);
            }
        }
        Action::Home => ctrl.handle(AppCommand::Home),
        Action::Reload => ctrl.handle(AppCommand::Reload),
    }
    clamp_selection(tui, ctrl);
}

/// The item the toggle key applies to: the selected card, or the detail item
fn current_item(
    tui: &Tui,
    ctrl: &AppController,
) -> Option<(holocron::catalog::CatalogItem, holocron::catalog::Category)> {
    if ctrl.route().is_list() {
        return ctrl
            .cards()
            .get(tui.selected)
            .map(|c| (c.item.clone(), c.category));
    }
    let detail = ctrl.detail()?;
    match detail.state() {
        DetailState::Found(item) => Some((item.clone(), detail.category())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::{Receiver, Sender};
    use holocron::catalog::{CatalogItem, Category};
    use holocron_app::app::{LoadState, ViewState};
    use holocron_app::data::MemoryStorage;
    use holocron_app::providers::CatalogSource;

    const WAIT: Duration = Duration::from_secs(5);

    /// People answer at once; planets wait for the gate
    struct GatedSource {
        planets_gate: Receiver<()>,
    }

    impl CatalogSource for GatedSource {
        fn id(&self) -> &'static str {
            "gated"
        }

        fn list_category(&self, category: Category) -> holocron_app::error::Result<Vec<CatalogItem>> {
            Ok(match category {
                Category::People => vec![luke()],
                Category::Vehicles => Vec::new(),
                Category::Planets => {
                    let _ = self.planets_gate.recv_timeout(WAIT);
                    Vec::new()
                }
            })
        }

        fn get_item(
            &self,
            category: Category,
            id: &str,
        ) -> holocron_app::error::Result<Option<CatalogItem>> {
            Ok((category == Category::People && id == "1").then(luke))
        }
    }

    fn luke() -> CatalogItem {
        CatalogItem::new("https://swapi.dev/api/people/1/", "Luke Skywalker")
    }

    fn gated_controller() -> (AppController, Sender<()>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        let favorites = FavoritesStore::load(Box::new(MemoryStorage::new()));
        let mut ctrl = AppController::new(Arc::new(GatedSource { planets_gate: rx }), favorites);
        ctrl.start(Route::List);
        (ctrl, tx)
    }

    fn tui() -> Tui {
        Tui {
            selected: 0,
            running: true,
        }
    }

    fn settle(ctrl: &mut AppController) {
        while Category::ALL.iter().any(|c| ctrl.list().state(*c).is_loading()) {
            assert!(ctrl.wait(WAIT), "listing fetch did not finish");
        }
    }

    #[test]
    fn test_keys_inert_behind_page_spinner() {
        let (mut ctrl, planets_gate) = gated_controller();
        let mut tui = tui();

        while !matches!(ctrl.list().state(Category::People), LoadState::Loaded(_)) {
            assert!(ctrl.wait(WAIT), "people fetch did not finish");
        }
        assert!(ctrl.list().is_page_loading());

        apply(Action::ToggleFavorite, &mut tui, &mut ctrl);
        assert!(ctrl.favorites().is_empty());
        apply(Action::Open, &mut tui, &mut ctrl);
        assert!(ctrl.route().is_list());

        planets_gate.send(()).unwrap();
        settle(&mut ctrl);

        apply(Action::ToggleFavorite, &mut tui, &mut ctrl);
        assert_eq!(ctrl.favorites().len(), 1);
        apply(Action::Open, &mut tui, &mut ctrl);
        assert_eq!(ctrl.route(), &Route::detail(Category::People, "1"));
    }

    #[test]
    fn test_view_toggle_ignored_on_detail() {
        let (mut ctrl, planets_gate) = gated_controller();
        planets_gate.send(()).unwrap();
        settle(&mut ctrl);
        let mut tui = tui();

        apply(Action::Open, &mut tui, &mut ctrl);
        assert!(!ctrl.route().is_list());
        apply(Action::ToggleView, &mut tui, &mut ctrl);
        assert_eq!(ctrl.view(), ViewState::All);

        apply(Action::Home, &mut tui, &mut ctrl);
        apply(Action::ToggleView, &mut tui, &mut ctrl);
        assert_eq!(ctrl.view(), ViewState::Favorites);
    }

    #[test]
    fn test_selection_clamped_to_cards() {
        let (mut ctrl, planets_gate) = gated_controller();
        planets_gate.send(()).unwrap();
        settle(&mut ctrl);
        let mut tui = tui();

        apply(Action::Down, &mut tui, &mut ctrl);
        apply(Action::Down, &mut tui, &mut ctrl);
        assert_eq!(tui.selected, 0);
        apply(Action::Up, &mut tui, &mut ctrl);
        assert_eq!(tui.selected, 0);
    }
}
