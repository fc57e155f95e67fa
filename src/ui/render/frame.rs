use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::{Backend, Frame},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::audio::PlaybackAlert;
use crate::ui::model::UiRenderData;

use super::theme::{
    ACCENT_GOLD_RGB, ACCENT_GREEN_RGB, ACCENT_RED_RGB, ALERT_HEIGHT, ALERT_WIDTH, CONTROL_HEIGHT,
    CONTROL_WIDTH, HELP_HEIGHT, INPUT_HEIGHT, LIVE_HEIGHT, RESULT_HEIGHT, TITLE_HEIGHT, UI_MARGIN,
    alert_border_style, app_background_style, minutes_style, muted_style, panel_block_style,
    panel_border_style, rgb, style_color,
};

const INPUT_PROMPT: &str = "› ";
const INPUT_CURSOR: &str = "█";

/// Screen areas of the dashboard, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub title: Rect,
    pub live: Rect,
    pub input: Rect,
    pub result: Rect,
    pub control: Rect,
    pub help: Rect,
}

#[must_use]
pub fn layout_regions(area: Rect) -> Option<Regions> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(UI_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(LIVE_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(RESULT_HEIGHT),
            Constraint::Length(CONTROL_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(HELP_HEIGHT),
        ])
        .split(area);

    let (title, live, input, result, control_row, help) = match chunks.as_ref() {
        [title, live, input, result, control, _, help] => {
            (*title, *live, *input, *result, *control, *help)
        }
        _ => return None,
    };

    Some(Regions {
        title,
        live,
        input,
        result,
        control: Rect {
            width: control_row.width.min(CONTROL_WIDTH),
            ..control_row
        },
        help,
    })
}

pub fn draw_frame<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData) {
    let size = f.size();
    f.render_widget(
        Block::default().style(app_background_style(data.no_color)),
        size,
    );

    let Some(regions) = layout_regions(size) else {
        return;
    };

    render_title(f, data, regions.title);
    render_panel(
        f,
        data,
        data.locale.live_title(),
        live_lines(data),
        regions.live,
    );
    render_panel(
        f,
        data,
        data.locale.custom_title(),
        vec![input_line(data)],
        regions.input,
    );
    if let Some(lines) = custom_result_lines(data) {
        render_panel(f, data, "", lines, regions.result);
    }
    render_control(f, data, regions.control);
    render_help(f, data, regions.help);

    if let Some(alert) = data.alert.as_ref() {
        render_alert(f, data, alert, size);
    }
}

pub(crate) fn live_lines(data: &UiRenderData) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                data.live.minutes.clone(),
                minutes_style(data.no_color, ACCENT_RED_RGB),
            ),
            Span::raw(" "),
            Span::styled(data.locale.minutes_word(), muted_style(data.no_color)),
        ]),
        Line::from(Span::styled(
            data.live.label.clone(),
            muted_style(data.no_color),
        )),
    ]
}

/// Lines of the custom result region, or `None` while it is hidden.
pub(crate) fn custom_result_lines(data: &UiRenderData) -> Option<Vec<Line<'static>>> {
    data.custom.as_ref().map(|view| {
        vec![
            Line::from(vec![
                Span::styled(
                    view.minutes.clone(),
                    minutes_style(data.no_color, ACCENT_GREEN_RGB),
                ),
                Span::raw(" "),
                Span::styled(data.locale.minutes_word(), muted_style(data.no_color)),
            ]),
            Line::from(Span::styled(view.label.clone(), muted_style(data.no_color))),
        ]
    })
}

fn input_line(data: &UiRenderData) -> Line<'static> {
    Line::from(vec![
        Span::styled(INPUT_PROMPT, muted_style(data.no_color)),
        Span::raw(data.input.clone()),
        Span::styled(INPUT_CURSOR, muted_style(data.no_color)),
    ])
}

fn render_title<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "🎄 xmascount",
            minutes_style(data.no_color, ACCENT_GOLD_RGB),
        ),
        Span::styled(
            format!("  v{}", env!("CARGO_PKG_VERSION")),
            muted_style(data.no_color),
        ),
    ]))
    .style(app_background_style(data.no_color));
    f.render_widget(title, area);
}

fn render_panel<B: Backend>(
    f: &mut Frame<'_, B>,
    data: &UiRenderData,
    title: &str,
    lines: Vec<Line<'static>>,
    area: Rect,
) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(panel_border_style(data.no_color))
        .style(panel_block_style(data.no_color));
    if !title.is_empty() {
        block = block.title(Span::styled(
            format!(" {} ", title),
            style_color(data.no_color, rgb(ACCENT_GOLD_RGB)),
        ));
    }
    let panel = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}

fn render_control<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData, area: Rect) {
    let text = format!(
        "[m] {} {}",
        data.control.icon(),
        data.control.label(data.locale)
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(panel_border_style(data.no_color))
        .style(panel_block_style(data.no_color));
    let control = Paragraph::new(Line::from(text))
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(control, area);
}

fn render_help<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData, area: Rect) {
    let help = Paragraph::new(Line::from(Span::styled(
        data.locale.help_line(),
        muted_style(data.no_color),
    )))
    .style(app_background_style(data.no_color));
    f.render_widget(help, area);
}

fn render_alert<B: Backend>(
    f: &mut Frame<'_, B>,
    data: &UiRenderData,
    alert: &PlaybackAlert,
    area: Rect,
) {
    let popup = centered_rect(ALERT_WIDTH, ALERT_HEIGHT, area);
    let lines = vec![
        Line::from(data.locale.alert_message()),
        Line::from(""),
        Line::from(Span::styled(
            alert.reason.clone(),
            muted_style(data.no_color),
        )),
        Line::from(""),
        Line::from(Span::styled(
            data.locale.alert_hint(),
            muted_style(data.no_color),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(alert_border_style(data.no_color))
        .style(panel_block_style(data.no_color))
        .title(format!(" {} ", data.locale.alert_title()));
    let dialog = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(Clear, popup);
    f.render_widget(dialog, popup);
}

pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area
            .x
            .saturating_add(area.width.saturating_sub(width) / 2),
        y: area
            .y
            .saturating_add(area.height.saturating_sub(height) / 2),
        width,
        height,
    }
}
