use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::{
    animation::{layout::CARD_COLS, project, CardMotion},
    cards::history::{CHART_CEILING, CHART_FLOOR},
    models::CardDisplayState,
    styling::{self, TierStyle},
    tui::app::App,
};

const BUTTON_HEIGHT: u16 = 9;
const BUTTON_ORANGE: Color = Color::Rgb(241, 39, 17);
const HOT: Color = Color::Rgb(241, 39, 17);
const COLD: Color = Color::Rgb(66, 134, 244);

/// Screen regions for one frame.
pub struct Areas {
    pub button: Rect,
    pub help: Rect,
    /// Visible cards in draw order, selected card last.
    pub cards: Vec<(usize, Rect)>,
}

pub fn layout_areas(area: Rect, app: &App) -> Areas {
    let help = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1.min(area.height));
    let button_width = (CARD_COLS + 2).min(area.width);
    let button_height = BUTTON_HEIGHT.min(area.height.saturating_sub(1));
    let button = Rect::new(
        area.right().saturating_sub(button_width + 1),
        area.bottom().saturating_sub(button_height + 2),
        button_width,
        button_height,
    );

    let mut order: Vec<usize> = (0..app.motions.len()).filter(|&i| i != app.selected).collect();
    if app.selected < app.motions.len() {
        order.push(app.selected);
    }

    let cards = order
        .into_iter()
        .filter_map(|index| project(&app.motions[index], button, area).map(|rect| (index, rect)))
        .collect();

    Areas { button, help, cards }
}

/// Topmost card under a screen cell.
pub fn card_at(areas: &Areas, column: u16, row: u16) -> Option<usize> {
    areas
        .cards
        .iter()
        .rev()
        .find(|(_, rect)| {
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        })
        .map(|(index, _)| *index)
}

pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout_areas(frame.size(), app);

    draw_help(frame, areas.help, app);
    draw_button(frame, areas.button, app);

    for (index, rect) in &areas.cards {
        if let Some(card) = app.dashboard.card(*index) {
            draw_card(frame, *rect, card, &app.motions[*index], *index == app.selected);
        }
    }
}

fn draw_help(frame: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Green).add_modifier(Modifier::BOLD));
    let mut spans = vec![
        key("Space"),
        Span::raw(" show/hide | "),
        key("←/→"),
        Span::raw(" select | "),
        key("f"),
        Span::raw(" flip | "),
        Span::styled("q", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(" quit"),
    ];
    if let Some(message) = &app.status_message {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(message.as_str(), Style::default().fg(Color::Yellow)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_button(frame: &mut Frame, area: Rect, app: &App) {
    let (ready, total) = app.loading_progress();
    let status = if ready < total {
        Line::styled(format!("Loading {}/{}", ready, total), Style::default().fg(Color::Yellow))
    } else if app.is_revealed() {
        Line::styled("Space to hide", Style::default().fg(Color::Gray))
    } else {
        Line::styled("Space to reveal", Style::default().fg(Color::Gray))
    };

    let text = vec![
        Line::styled("♞ chess.com", Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::styled(
            "Who's Hot?",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::from("🔥🔥🔥🔥🔥🔥"),
        Line::from(""),
        status,
    ];

    let button = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BUTTON_ORANGE)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(button, area);
}

fn draw_card(frame: &mut Frame, area: Rect, card: &CardDisplayState, motion: &CardMotion, selected: bool) {
    let style = styling::resolve(card.rating as i64);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(if selected { BorderType::Thick } else { BorderType::Rounded })
        .border_style(Style::default().fg(if selected { style.accent_color() } else { style.shadow_color() }));
    if selected && motion.showing_front() {
        block = block.title(format!(" {} ", card.game.label()));
    }

    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    if inner.width < 2 || inner.height < 2 {
        return;
    }

    if motion.showing_front() {
        draw_front(frame, inner, card, style);
    } else {
        draw_back(frame, inner, card, style);
    }
}

fn split_card(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area)
}

fn draw_front(frame: &mut Frame, area: Rect, card: &CardDisplayState, style: &TierStyle) {
    let chunks = split_card(area);
    frame.render_widget(header(style, chunks[0]), chunks[0]);

    let rating = card.rating as i64;
    let stats = format!(" {}  {}  +{} ", card.game.label(), card.rating, card.plus);
    let body = vec![
        Line::styled(
            card.display_name(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            style.label.to_uppercase(),
            Style::default().fg(style.accent_color()).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(
            stats,
            Style::default()
                .bg(style.accent_color())
                .fg(styling::stats_text_color(rating))
                .add_modifier(Modifier::BOLD),
        ),
    ];

    frame.render_widget(Paragraph::new(body).alignment(Alignment::Center), chunks[1]);
}

fn draw_back(frame: &mut Frame, area: Rect, card: &CardDisplayState, style: &TierStyle) {
    let chunks = split_card(area);
    frame.render_widget(header(style, chunks[0]), chunks[0]);

    let Some(history) = &card.history else {
        return;
    };

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(chunks[1]);

    // One column per day; keep the most recent days that fit.
    let values = history.chart_values();
    let visible = values.len().min(body[0].width as usize);
    let skip = values.len() - visible;
    let bars: Vec<Bar> = values
        .iter()
        .zip(&history.points)
        .skip(skip)
        .map(|(value, point)| {
            Bar::default()
                .value(*value)
                .text_value(String::new())
                .style(Style::default().fg(if point.hot { HOT } else { COLD }))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(0)
        .max((CHART_CEILING - CHART_FLOOR) as u64);
    frame.render_widget(chart, body[0]);

    let footer = Line::from(vec![
        Span::styled(history.start_label.as_str(), Style::default().fg(Color::Gray)),
        Span::raw(" → "),
        Span::styled(history.end_label.as_str(), Style::default().fg(Color::Gray)),
        Span::styled(format!("  +{}", card.plus), Style::default().fg(HOT).add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(Paragraph::new(footer).alignment(Alignment::Center), body[1]);
}

/// Gradient band with the avatar glyph in the middle row.
fn header(style: &TierStyle, area: Rect) -> Paragraph<'static> {
    let stops = style.stop_colors();
    let width = area.width as usize;
    let band = |glyph: Option<char>| -> Line<'static> {
        let spans: Vec<Span> = (0..width)
            .map(|column| {
                let color = if stops.is_empty() {
                    style.accent_color()
                } else {
                    stops[column * stops.len() / width.max(1)]
                };
                let symbol = match glyph {
                    Some(c) if column == width / 2 => c.to_string(),
                    _ => " ".to_string(),
                };
                Span::styled(symbol, Style::default().bg(color).fg(Color::White))
            })
            .collect();
        Line::from(spans)
    };

    let lines: Vec<Line> = (0..area.height)
        .map(|row| band((row == area.height / 2).then_some('♚')))
        .collect();
    Paragraph::new(lines)
}
