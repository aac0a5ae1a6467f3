//! Terminal rendering

use ratatui::prelude::*;
use ratatui::widgets::*;

use holocron::catalog::Category;
use holocron_app::app::detail::{BACK_LABEL, HOME_LABEL, NOT_FOUND_TITLE};
use holocron_app::app::list::{NO_FAVORITES_HINT, NO_FAVORITES_TITLE};
use holocron_app::app::{AppController, DetailState, DetailView, LoadState, ViewState};

const PAGE_LOADING: &str = "Loading Star Wars data...";
const DETAIL_LOADING: &str = "Loading details...";

pub fn draw(f: &mut Frame, ctrl: &AppController, selected: usize) {
    let area = f.area();

    let outer = Block::default()
        .title(format!(" Holocron v{} ", env!("CARGO_PKG_VERSION")))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // Navigation
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Help
    ])
    .split(inner);

    draw_nav(f, ctrl, chunks[0]);
    match ctrl.detail() {
        Some(detail) if !ctrl.route().is_list() => draw_detail(f, ctrl, detail, chunks[1]),
        _ => draw_list(f, ctrl, selected, chunks[1]),
    }
    draw_help(f, ctrl, chunks[2]);
}

fn draw_nav(f: &mut Frame, ctrl: &AppController, area: Rect) {
    let titles = vec![
        "All".to_string(),
        format!("Favorites ({})", ctrl.favorites().len()),
    ];
    let selected: usize = match ctrl.view() {
        ViewState::All => 0,
        ViewState::Favorites => 1,
    };
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow).bold());
    f.render_widget(tabs, area);
}

/// Per-category notices shown above the cards
fn category_notices(ctrl: &AppController) -> Vec<Line<'static>> {
    if ctrl.view() == ViewState::Favorites {
        return Vec::new();
    }
    let mut lines = Vec::new();
    for category in Category::ALL {
        match ctrl.list().state(category) {
            LoadState::Loading => lines.push(Line::from(Span::styled(
                format!("  Loading {}...", category.label()),
                Style::default().fg(Color::DarkGray),
            ))),
            LoadState::Failed(_) => lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} could not be loaded ", category.label()),
                    Style::default().fg(Color::Red),
                ),
                Span::styled("(r to retry)", Style::default().fg(Color::DarkGray)),
            ])),
            LoadState::Loaded(_) => {}
        }
    }
    lines
}

fn draw_list(f: &mut Frame, ctrl: &AppController, selected: usize, area: Rect) {
    if ctrl.list().is_page_loading() {
        draw_centered(f, vec![Line::from(PAGE_LOADING)], area);
        return;
    }

    let cards = ctrl.cards();
    if cards.is_empty() && ctrl.view() == ViewState::Favorites {
        let lines = vec![
            Line::from(Span::styled(NO_FAVORITES_TITLE, Style::default().bold())),
            Line::from(""),
            Line::from(Span::styled(NO_FAVORITES_HINT, Style::default().fg(Color::DarkGray))),
        ];
        draw_centered(f, lines, area);
        return;
    }

    let notices = category_notices(ctrl);
    let rows = Layout::vertical([
        Constraint::Length(notices.len() as u16),
        Constraint::Min(1),
    ])
    .split(area);
    f.render_widget(Paragraph::new(notices), rows[0]);

    let width = rows[1].width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = cards
        .iter()
        .map(|card| {
            let marker = if card.is_favorite { "♥ " } else { "  " };
            let title = Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Red)),
                Span::styled(card.item.name.clone(), Style::default().bold()),
                Span::styled(
                    format!("  [{}]", card.category.label()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("  {}", card.toggle_label()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            let summary = Line::from(Span::styled(
                format!("  {}", truncate_str(&card.summary(), width)),
                Style::default().fg(Color::DarkGray),
            ));
            ListItem::new(vec![title, summary])
        })
        .collect();

    let mut state = ListState::default();
    if !cards.is_empty() {
        state.select(Some(selected.min(cards.len() - 1)));
    }
    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, rows[1], &mut state);
}

fn draw_detail(f: &mut Frame, ctrl: &AppController, detail: &DetailView, area: Rect) {
    let item = match detail.state() {
        DetailState::Loading => {
            draw_centered(f, vec![Line::from(DETAIL_LOADING)], area);
            return;
        }
        DetailState::NotFound => {
            let lines = vec![
                Line::from(Span::styled(NOT_FOUND_TITLE, Style::default().fg(Color::Red).bold())),
                Line::from(""),
                Line::from(vec![
                    Span::styled("[Enter] ", Style::default().fg(Color::Yellow)),
                    Span::raw(HOME_LABEL),
                ]),
            ];
            draw_centered(f, lines, area);
            return;
        }
        DetailState::Found(item) => item,
    };

    let rows = Layout::vertical([
        Constraint::Length(1), // Back
        Constraint::Length(2), // Title
        Constraint::Min(3),    // Sections
    ])
    .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(BACK_LABEL, Style::default().fg(Color::Yellow))),
        rows[0],
    );

    let marker = if ctrl.favorites().contains(item) {
        Span::styled("  ♥ favorite", Style::default().fg(Color::Red))
    } else {
        Span::raw("")
    };
    let title = Line::from(vec![
        Span::styled(item.name.clone(), Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("  {}", detail.category().label()),
            Style::default().fg(Color::DarkGray),
        ),
        marker,
    ]);
    f.render_widget(Paragraph::new(title), rows[1]);

    let sections = detail.sections();
    if sections.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, sections.len() as u32); sections.len()];
    let columns = Layout::horizontal(constraints).split(rows[2]);

    for ((title, fields), column) in sections.into_iter().zip(columns.iter()) {
        let block = Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let lines: Vec<Line> = fields
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{}: ", label), Style::default().fg(Color::DarkGray)),
                    Span::raw(value),
                ])
            })
            .collect();
        f.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            *column,
        );
    }
}

fn draw_centered(f: &mut Frame, lines: Vec<Line>, area: Rect) {
    let height = lines.len() as u16;
    let top = area.height.saturating_sub(height) / 2;
    let rect = Rect {
        y: area.y + top,
        height: height.min(area.height),
        ..area
    };
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}

fn draw_help(f: &mut Frame, ctrl: &AppController, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let help = if ctrl.route().is_list() {
        Line::from(vec![
            key("  'q' "),
            Span::raw("quit  |  "),
            key("Tab "),
            Span::raw("view  |  "),
            key("j/k "),
            Span::raw("select  |  "),
            key("Space "),
            Span::raw("favorite  |  "),
            key("Enter "),
            Span::raw("details  |  "),
            key("'r' "),
            Span::raw("reload"),
        ])
    } else {
        Line::from(vec![
            key("  'q' "),
            Span::raw("quit  |  "),
            key("Esc "),
            Span::raw("back  |  "),
            key("Space "),
            Span::raw("favorite"),
        ])
    };
    f.render_widget(Paragraph::new(help).alignment(Alignment::Left), area);
}

/// Truncate on a character boundary, ending in "..." when shortened
fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use holocron::catalog::CatalogItem;
    use holocron::route::Route;
    use holocron_app::app::AppCommand;
    use holocron_app::data::{FavoritesStore, MemoryStorage};
    use holocron_app::error::Result;
    use holocron_app::providers::CatalogSource;
    use ratatui::backend::TestBackend;

    /// Serves Luke for people and nothing else
    struct StaticSource;

    impl CatalogSource for StaticSource {
        fn id(&self) -> &'static str {
            "static"
        }

        fn list_category(&self, category: Category) -> Result<Vec<CatalogItem>> {
            Ok(match category {
                Category::People => vec![luke()],
                _ => Vec::new(),
            })
        }

        fn get_item(&self, category: Category, id: &str) -> Result<Option<CatalogItem>> {
            Ok((category == Category::People && id == "1").then(luke))
        }
    }

    fn luke() -> CatalogItem {
        CatalogItem::new("https://swapi.dev/api/people/1/", "Luke Skywalker")
            .with_field("gender", "male")
            .with_field("birth_year", "19BBY")
            .with_field("height", "172")
    }

    fn controller(route: Route) -> AppController {
        let favorites = FavoritesStore::load(Box::new(MemoryStorage::new()));
        let mut ctrl = AppController::new(Arc::new(StaticSource), favorites);
        ctrl.start(route);
        ctrl
    }

    fn settle(ctrl: &mut AppController) {
        while ctrl.list().is_page_loading() && ctrl.route().is_list() {
            assert!(ctrl.wait(Duration::from_secs(5)), "list fetch timed out");
        }
        while ctrl.detail().is_some_and(DetailView::is_loading) {
            assert!(ctrl.wait(Duration::from_secs(5)), "detail fetch timed out");
        }
    }

    fn render(ctrl: &AppController) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, ctrl, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_page_loading_before_results() {
        let favorites = FavoritesStore::load(Box::new(MemoryStorage::new()));
        let ctrl = AppController::new(Arc::new(StaticSource), favorites);
        assert!(render(&ctrl).contains(PAGE_LOADING));
    }

    #[test]
    fn test_list_shows_cards_and_favorite_count() {
        let mut ctrl = controller(Route::List);
        settle(&mut ctrl);
        ctrl.toggle_favorite(&luke(), Category::People);

        let screen = render(&ctrl);
        assert!(screen.contains("Luke Skywalker"));
        assert!(screen.contains("Favorites (1)"));
        assert!(screen.contains("Remove from favorites"));
        assert!(screen.contains("Gender: male | Birth Year: 19BBY"));
    }

    #[test]
    fn test_empty_favorites_message() {
        let mut ctrl = controller(Route::List);
        settle(&mut ctrl);
        ctrl.handle(AppCommand::SetView(ViewState::Favorites));

        let screen = render(&ctrl);
        assert!(screen.contains(NO_FAVORITES_TITLE));
        assert!(!screen.contains("Luke Skywalker"));
    }

    #[test]
    fn test_detail_found_shows_sections() {
        let mut ctrl = controller(Route::detail(Category::People, "1"));
        settle(&mut ctrl);

        let screen = render(&ctrl);
        assert!(screen.contains("Luke Skywalker"));
        assert!(screen.contains("Personal Information"));
        assert!(screen.contains("172 cm"));
    }

    #[test]
    fn test_detail_not_found() {
        let mut ctrl = controller(Route::detail(Category::People, "9999"));
        settle(&mut ctrl);

        let screen = render(&ctrl);
        assert!(screen.contains(NOT_FOUND_TITLE));
        assert!(screen.contains(HOME_LABEL));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Tatooine", 20), "Tatooine");
        assert_eq!(truncate_str("Population: 200000", 10), "Populat...");
        assert_eq!(truncate_str("abcdef", 2), "ab");
    }
}
