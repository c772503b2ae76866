//! UI rendering for the terminal front-end.

use crate::app::{App, StartField};
use crate::view::{
    CHOSE_LABEL, END_HEADING, END_TEXT, IDENTITY_LABEL, JOURNEY_HEADING, LOADING_TEXT, TAGLINE,
    THEME_LABEL, TITLE, journey,
};
use borboleta_core::{GameTheme, HistoryItem, PlayerIdentity, StoryNode};
use borboleta_session::Phase;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use strum::IntoEnumIterator;

/// Accent colour for a theme.
pub fn accent(theme: GameTheme) -> Color {
    match theme {
        GameTheme::CrimesReais => Color::Red,
        GameTheme::ClimaAmbiental => Color::Rgb(249, 115, 22),
        GameTheme::PoliticaGlobal => Color::Cyan,
        GameTheme::Aleatorio => Color::Yellow,
    }
}

/// Draw the main UI.
#[tracing::instrument(skip_all, fields(phase = %app.state().phase()))]
pub fn draw(f: &mut Frame, app: &App) {
    let banner = app.state().error().clone().or_else(|| app.notice.clone());
    let banner_height = if banner.is_some() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Length(banner_height), // Error banner
            Constraint::Min(0),                // Screen
            Constraint::Length(3),             // Status bar
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    if let Some(message) = banner {
        draw_banner(f, &message, chunks[1]);
    }

    match (app.state().phase(), app.node()) {
        (Phase::Start, _) => draw_start_screen(f, app, chunks[2]),
        (Phase::Playing, Some(node)) => draw_game_screen(f, app, node, chunks[2]),
        (Phase::Loading, Some(node)) => {
            draw_game_screen(f, app, node, chunks[2]);
            draw_loading(f, app, chunks[2]);
        }
        (Phase::Ended, Some(node)) => draw_end_screen(f, app, node, chunks[2]),
        _ => draw_loading(f, app, chunks[2]),
    }

    draw_status_bar(f, app, chunks[3]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let color = accent(app.active_theme());
    let mut spans = vec![Span::styled(
        TITLE,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if let Some(theme) = app.state().theme() {
        spans.push(Span::styled(
            format!("  ·  {}", theme),
            Style::default().fg(Color::Gray),
        ));
    }
    if let Some(visits) = app.visits {
        spans.push(Span::styled(
            format!("  ·  Visitas: {}", visits),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn draw_banner(f: &mut Frame, message: &str, area: Rect) {
    let banner = Paragraph::new(message.to_string())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(banner, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.state().phase() {
        Phase::Start => "←→: Selecionar | Tab: Alternar | Enter: Iniciar | Q: Sair",
        Phase::Loading => "R: Reiniciar | Q: Sair",
        Phase::Playing => "↑↓: Navegar | Enter/1-9: Escolher | R: Reiniciar | Q: Sair",
        Phase::Ended => "Enter/R: Tentar Outra Realidade | Q: Sair",
    };
    let status = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

fn option_spans<T>(options: impl Iterator<Item = T>, selected: T, focused: bool) -> Line<'static>
where
    T: PartialEq + std::fmt::Display,
{
    let mut spans = Vec::new();
    for option in options {
        let style = if option == selected {
            let style = Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD);
            if focused {
                style.add_modifier(Modifier::UNDERLINED)
            } else {
                style
            }
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", option), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

fn label(text: &'static str, focused: bool) -> Line<'static> {
    let marker = if focused { "▸ " } else { "  " };
    Line::from(Span::styled(
        format!("{}{}", marker, text),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn draw_start_screen(f: &mut Frame, app: &App, area: Rect) {
    let identity_focused = app.focus == StartField::Identity;
    let lines = vec![
        Line::from(Span::styled(
            TAGLINE,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        label(IDENTITY_LABEL, identity_focused),
        option_spans(PlayerIdentity::iter(), app.identity, identity_focused),
        Line::default(),
        label(THEME_LABEL, !identity_focused),
        option_spans(GameTheme::iter(), app.theme, !identity_focused),
        Line::default(),
        Line::from(Span::styled(
            "[ Enter ] INICIAR CADEIA DE EVENTOS",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let screen = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(screen, area);
}

fn journey_lines(history: &[HistoryItem], color: Color) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in journey(history) {
        lines.push(Line::from(Span::styled(
            entry.outcome,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(vec![
            Span::styled("  │ ", Style::default().fg(color)),
            Span::styled(
                CHOSE_LABEL,
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(entry.choice, Style::default().fg(Color::White)),
        ]));
    }
    lines
}

fn draw_game_screen(f: &mut Frame, app: &App, node: &StoryNode, area: Rect) {
    let color = accent(app.active_theme());
    let history = app.state().history();
    let journey_height = if history.is_empty() {
        0
    } else {
        (history.len() as u16 * 2 + 2).min(8)
    };
    let choices_height = node.choices().len() as u16 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(journey_height),
            Constraint::Min(4),
            Constraint::Length(2),
            Constraint::Length(choices_height),
        ])
        .split(area);

    if !history.is_empty() {
        let lines = journey_lines(history, color);
        // Keep the latest entries in view.
        let scroll = (lines.len() as u16).saturating_sub(journey_height.saturating_sub(2));
        let summary = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(
                        JOURNEY_HEADING,
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    )),
            )
            .scroll((scroll, 0));
        f.render_widget(summary, chunks[0]);
    }

    let scene = Paragraph::new(vec![
        Line::from(Span::styled(
            node.outcome_text().clone(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        Line::from(Span::styled(
            node.story_text().clone(),
            Style::default().fg(Color::White),
        )),
    ])
    .block(Block::default().borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    f.render_widget(scene, chunks[1]);

    let ambience = app.ambience().unwrap_or("-");
    let atmosphere = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Imagem: ", Style::default().fg(color)),
            Span::styled(
                node.image_prompt().clone(),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled("Ambiente: ", Style::default().fg(color)),
            Span::styled(
                format!("{} ({})", ambience, node.sound_description()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ]);
    f.render_widget(atmosphere, chunks[2]);

    let loading = app.state().phase() == Phase::Loading;
    let items: Vec<ListItem> = node
        .choices()
        .iter()
        .map(|choice| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}: ", choice.id()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(choice.text().clone()),
            ]))
        })
        .collect();
    let base = if loading {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let choices = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .style(base)
        .highlight_style(Style::default().fg(Color::Black).bg(color))
        .highlight_symbol("» ");
    let mut state = ListState::default().with_selected(if loading {
        None
    } else {
        Some(app.selected_choice)
    });
    f.render_stateful_widget(choices, chunks[3], &mut state);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn draw_loading(f: &mut Frame, app: &App, area: Rect) {
    let popup = centered(area, LOADING_TEXT.chars().count() as u16 + 6, 3);
    let loading = Paragraph::new(LOADING_TEXT)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent(app.active_theme()))),
        )
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(Clear, popup);
    f.render_widget(loading, popup);
}

fn draw_end_screen(f: &mut Frame, app: &App, node: &StoryNode, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            END_HEADING,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            node.outcome_text().clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(node.story_text().clone()),
        Line::default(),
    ];
    if let Some(reference) = node.real_event_reference() {
        lines.push(Line::from(Span::styled(
            reference.clone(),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        END_TEXT,
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
    )));
    if !app.state().history().is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            JOURNEY_HEADING,
            Style::default()
                .fg(accent(app.active_theme()))
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(journey_lines(
            app.state().history(),
            accent(app.active_theme()),
        ));
    }

    let screen = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(screen, area);
}
