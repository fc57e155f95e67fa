use clap::ValueEnum;
use serde::Deserialize;

/// Wording and number grouping for everything the countdown prints.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    It,
}

impl Locale {
    #[must_use]
    pub const fn thousands_separator(self) -> char {
        match self {
            Locale::En => ',',
            Locale::It => '.',
        }
    }

    #[must_use]
    pub fn live_label(self, year: i32) -> String {
        match self {
            Locale::En => format!("to December 25 {}", year),
            Locale::It => format!("al 25 Dicembre {}", year),
        }
    }

    #[must_use]
    pub fn custom_label(self, year: i32) -> String {
        match self {
            Locale::En => format!("Relative to December 25 {}", year),
            Locale::It => format!("Rispetto al 25 Dicembre {}", year),
        }
    }

    #[must_use]
    pub const fn minutes_word(self) -> &'static str {
        match self {
            Locale::En => "minutes",
            Locale::It => "minuti",
        }
    }

    #[must_use]
    pub const fn live_title(self) -> &'static str {
        match self {
            Locale::En => "Minutes until Christmas",
            Locale::It => "Minuti a Natale",
        }
    }

    #[must_use]
    pub const fn custom_title(self) -> &'static str {
        match self {
            Locale::En => "Pick a date and time",
            Locale::It => "Scegli una data e un'ora",
        }
    }

    #[must_use]
    pub const fn play_label(self) -> &'static str {
        match self {
            Locale::En => "Play Music",
            Locale::It => "Riproduci musica",
        }
    }

    #[must_use]
    pub const fn pause_label(self) -> &'static str {
        match self {
            Locale::En => "Pause Music",
            Locale::It => "Metti in pausa",
        }
    }

    #[must_use]
    pub const fn starting_label(self) -> &'static str {
        match self {
            Locale::En => "Starting…",
            Locale::It => "Avvio…",
        }
    }

    #[must_use]
    pub const fn alert_title(self) -> &'static str {
        match self {
            Locale::En => "Playback failed",
            Locale::It => "Riproduzione non riuscita",
        }
    }

    #[must_use]
    pub const fn alert_message(self) -> &'static str {
        match self {
            Locale::En => "Unable to play music. Check your audio settings.",
            Locale::It => "Impossibile riprodurre la musica. Controlla le impostazioni audio.",
        }
    }

    #[must_use]
    pub const fn alert_hint(self) -> &'static str {
        match self {
            Locale::En => "Press Enter to close",
            Locale::It => "Premi Invio per chiudere",
        }
    }

    #[must_use]
    pub const fn help_line(self) -> &'static str {
        match self {
            Locale::En => "type to edit date · Ctrl-U clear · m music · q quit",
            Locale::It => "scrivi per modificare · Ctrl-U cancella · m musica · q esci",
        }
    }
}
