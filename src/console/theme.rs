//! Console color theming.
//!
//! Maps each [`Tone`] to a terminal color. Colors are a presentation aid only;
//! nothing in the workflow depends on them. Light and dark palettes are
//! available, with automatic detection based on the terminal environment.

use yansi::Color;

use super::Tone;

/// Colors used for each tone of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub header: Color,
    pub info: Color,
    pub hint: Color,
    pub prompt: Color,
    pub success: Color,
    pub failure: Color,
    pub greater: Color,
    pub equal: Color,
    pub less: Color,
}

impl Theme {
    /// Dark-background palette (default).
    ///
    /// Palette:
    /// - Header: bright white
    /// - Info: white (gray on most terminals)
    /// - Hint: bright black (dark gray)
    /// - Prompt: yellow
    /// - Success / Failure: bright green / bright red
    /// - Greater / Equal / Less: green / yellow / red
    pub fn dark() -> Self {
        Self {
            header: Color::BrightWhite,
            info: Color::White,
            hint: Color::BrightBlack,
            prompt: Color::Yellow,
            success: Color::BrightGreen,
            failure: Color::BrightRed,
            greater: Color::Green,
            equal: Color::Yellow,
            less: Color::Red,
        }
    }

    /// Light-background palette.
    pub fn light() -> Self {
        Self {
            header: Color::Black,
            info: Color::BrightBlack,
            hint: Color::BrightBlack,
            prompt: Color::Magenta,
            success: Color::Green,
            failure: Color::Red,
            greater: Color::Green,
            equal: Color::Blue,
            less: Color::Red,
        }
    }

    /// Detect terminal theme or return dark theme as default.
    pub fn auto() -> Self {
        if is_light_terminal() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Color for a tone.
    #[must_use]
    pub fn color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Header => self.header,
            Tone::Info => self.info,
            Tone::Hint => self.hint,
            Tone::Prompt => self.prompt,
            Tone::Success => self.success,
            Tone::Failure => self.failure,
            Tone::Greater => self.greater,
            Tone::Equal => self.equal,
            Tone::Less => self.less,
        }
    }
}

/// Simple heuristic to detect if the terminal is light-themed.
///
/// `COLORFGBG` is set by some terminals (rxvt, xterm, konsole) as "fg;bg".
fn is_light_terminal() -> bool {
    std::env::var("COLORFGBG")
        .ok()
        .as_deref()
        .and_then(light_background)
        .unwrap_or(false)
}

fn light_background(colorfgbg: &str) -> Option<bool> {
    let bg = colorfgbg.split(';').next_back()?;
    let bg_num = bg.parse::<u32>().ok()?;
    // 0=black, 7=gray, 8=dark gray, 15=white
    Some(bg_num >= 7 && bg_num != 8)
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
