use ratatui::style::{Color, Modifier, Style};

pub(super) const UI_MARGIN: u16 = 1;
pub(super) const TITLE_HEIGHT: u16 = 1;
pub(super) const LIVE_HEIGHT: u16 = 5;
pub(super) const INPUT_HEIGHT: u16 = 3;
pub(super) const RESULT_HEIGHT: u16 = 4;
pub(super) const CONTROL_HEIGHT: u16 = 3;
pub(super) const HELP_HEIGHT: u16 = 1;
pub(super) const CONTROL_WIDTH: u16 = 28;
pub(super) const ALERT_WIDTH: u16 = 56;
pub(super) const ALERT_HEIGHT: u16 = 8;

pub(super) const APP_BG_RGB: (u8, u8, u8) = (0x0a, 0x0a, 0x0a);
pub(super) const PANEL_BORDER_RGB: (u8, u8, u8) = (0xe5, 0xe7, 0xeb);
pub(super) const PANEL_TEXT_RGB: (u8, u8, u8) = (0xff, 0xff, 0xff);
pub(super) const PANEL_MUTED_RGB: (u8, u8, u8) = (0xd1, 0xd5, 0xdb);
pub(super) const ACCENT_RED_RGB: (u8, u8, u8) = (0xef, 0x44, 0x44);
pub(super) const ACCENT_GREEN_RGB: (u8, u8, u8) = (0x22, 0xc5, 0x5e);
pub(super) const ACCENT_GOLD_RGB: (u8, u8, u8) = (0xf5, 0x9e, 0x0b);

pub(super) fn style_color(no_color: bool, color: Color) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(color)
    }
}

pub(super) const fn rgb(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub(super) fn app_background_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().bg(rgb(APP_BG_RGB))
    }
}

pub(super) fn panel_block_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default()
            .bg(rgb(APP_BG_RGB))
            .fg(rgb(PANEL_TEXT_RGB))
    }
}

pub(super) fn panel_border_style(no_color: bool) -> Style {
    style_color(no_color, rgb(PANEL_BORDER_RGB))
}

pub(super) fn muted_style(no_color: bool) -> Style {
    style_color(no_color, rgb(PANEL_MUTED_RGB))
}

pub(super) fn minutes_style(no_color: bool, accent: (u8, u8, u8)) -> Style {
    style_color(no_color, rgb(accent)).add_modifier(Modifier::BOLD)
}

pub(super) fn alert_border_style(no_color: bool) -> Style {
    style_color(no_color, rgb(ACCENT_RED_RGB)).add_modifier(Modifier::BOLD)
}
