use chrono::TimeZone;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::audio::{AudioToggle, PlaybackAlert, ToggleCommand, Volume};
use crate::countdown::{CountdownView, Locale, custom_view};
use crate::error::AudioError;

use super::model::UiRenderData;

const QUIT_KEY: char = 'q';
const MUSIC_KEY: char = 'm';

/// What the run loop has to do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    None,
    Quit,
    Audio(ToggleCommand),
}

/// All mutable UI state, owned by the run loop.
#[derive(Debug)]
pub struct App<Tz: TimeZone> {
    zone: Tz,
    locale: Locale,
    no_color: bool,
    live: CountdownView,
    input: String,
    custom: Option<CountdownView>,
    audio: AudioToggle,
    alert: Option<PlaybackAlert>,
}

impl<Tz: TimeZone> App<Tz> {
    /// Builds the controller and evaluates `initial_input` right away.
    pub fn new(
        zone: Tz,
        locale: Locale,
        no_color: bool,
        volume: Volume,
        live: CountdownView,
        initial_input: String,
    ) -> Self {
        let mut app = Self {
            zone,
            locale,
            no_color,
            live,
            input: String::new(),
            custom: None,
            audio: AudioToggle::new(volume),
            alert: None,
        };
        app.set_input(initial_input);
        app
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub const fn custom(&self) -> Option<&CountdownView> {
        self.custom.as_ref()
    }

    pub const fn alert(&self) -> Option<&PlaybackAlert> {
        self.alert.as_ref()
    }

    pub const fn audio(&self) -> &AudioToggle {
        &self.audio
    }

    pub fn set_live(&mut self, view: CountdownView) {
        self.live = view;
    }

    pub fn set_input(&mut self, value: String) {
        self.input = value;
        self.refresh_custom();
    }

    fn edit_input<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut String),
    {
        edit(&mut self.input);
        self.refresh_custom();
    }

    fn refresh_custom(&mut self) {
        self.custom = custom_view(&self.input, &self.zone, self.locale);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.kind == KeyEventKind::Release {
            return AppAction::None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return AppAction::Quit;
        }
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.alert = None;
            }
            return AppAction::None;
        }

        match key.code {
            KeyCode::Esc => AppAction::Quit,
            KeyCode::Char('u') if ctrl => {
                self.edit_input(String::clear);
                AppAction::None
            }
            KeyCode::Char(QUIT_KEY) if !ctrl => AppAction::Quit,
            KeyCode::Char(MUSIC_KEY) if !ctrl => self.toggle_music(),
            KeyCode::Backspace => {
                self.edit_input(|input| {
                    input.pop();
                });
                AppAction::None
            }
            KeyCode::Char(ch) if !ctrl && !ch.is_control() => {
                self.edit_input(|input| input.push(ch));
                AppAction::None
            }
            KeyCode::Char(_)
            | KeyCode::Enter
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::Home
            | KeyCode::End
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Delete
            | KeyCode::Insert
            | KeyCode::F(_)
            | KeyCode::Null
            | KeyCode::CapsLock
            | KeyCode::ScrollLock
            | KeyCode::NumLock
            | KeyCode::PrintScreen
            | KeyCode::Pause
            | KeyCode::Menu
            | KeyCode::KeypadBegin
            | KeyCode::Media(_)
            | KeyCode::Modifier(_) => AppAction::None,
        }
    }

    /// Left clicks on the music control toggle playback.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, control: Option<Rect>) -> AppAction {
        if self.alert.is_some() {
            return AppAction::None;
        }
        let is_click = mouse.kind == MouseEventKind::Down(MouseButton::Left);
        match control {
            Some(area) if is_click && rect_contains(area, mouse.column, mouse.row) => {
                self.toggle_music()
            }
            Some(_) | None => AppAction::None,
        }
    }

    pub fn paste(&mut self, text: &str) {
        if self.alert.is_some() {
            return;
        }
        self.edit_input(|input| input.extend(text.chars().filter(|ch| !ch.is_control())));
    }

    pub fn toggle_music(&mut self) -> AppAction {
        self.audio
            .click()
            .map_or(AppAction::None, AppAction::Audio)
    }

    pub fn play_resolved(&mut self, outcome: Result<(), AudioError>) {
        if let Some(alert) = self.audio.play_resolved(outcome) {
            self.alert = Some(alert);
        }
    }

    pub fn pause_resolved(&mut self, outcome: Result<(), AudioError>) {
        if let Some(alert) = self.audio.pause_resolved(outcome) {
            self.alert = Some(alert);
        }
    }

    pub fn render_data(&self) -> UiRenderData {
        UiRenderData {
            locale: self.locale,
            no_color: self.no_color,
            live: self.live.clone(),
            input: self.input.clone(),
            custom: self.custom.clone(),
            control: self.audio.affordance(),
            alert: self.alert.clone(),
        }
    }
}

fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && row >= area.y
        && column < area.x.saturating_add(area.width)
        && row < area.y.saturating_add(area.height)
}
