use crate::note::Note;
use crate::shared::table::fit_label;
use yansi::Paint;

/// Color palette for consistent theming
#[derive(Clone, Copy, Debug)]
pub struct ColorPalette {
    pub primary: (u8, u8, u8),   // ids
    pub secondary: (u8, u8, u8), // card titles, headers
    pub timestamp: (u8, u8, u8), // timestamps
}

impl ColorPalette {
    pub const CATPPUCCIN: Self = Self {
        primary: (108, 112, 134),   // Gray
        secondary: (148, 226, 213), // Teal
        timestamp: (137, 180, 250), // Blue
    };
}

/// The two ways a single note can be shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// Full content under an underlined title.
    Card,
    /// One summary line.
    List,
}

/// Formatting context passed through the rendering pipeline. The plain
/// context (no color, no width) yields the canonical card and list strings.
#[derive(Clone, Copy, Debug)]
pub struct FormatContext {
    pub use_color: bool,
    pub palette: ColorPalette,
    pub max_width: Option<usize>,
}

impl FormatContext {
    pub fn new(use_color: bool) -> Self {
        Self { use_color, palette: ColorPalette::CATPPUCCIN, max_width: None }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn with_width(mut self, width: Option<usize>) -> Self {
        self.max_width = width;
        self
    }

    pub fn format_id(&self, id: usize) -> String {
        let text = format!("[{id}]");
        if self.use_color {
            let (r, g, b) = self.palette.primary;
            Paint::rgb(&text, r, g, b).to_string()
        } else {
            text
        }
    }

    pub fn format_header(&self, text: &str) -> String {
        if self.use_color {
            let (r, g, b) = self.palette.secondary;
            Paint::rgb(text, r, g, b).bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn format_timestamp(&self, ts: &str) -> String {
        if self.use_color {
            let (r, g, b) = self.palette.timestamp;
            Paint::rgb(ts, r, g, b).to_string()
        } else {
            ts.to_string()
        }
    }

    pub fn render(&self, note: &Note, mode: ViewMode) -> String {
        match mode {
            ViewMode::Card => self.render_card(note),
            ViewMode::List => self.render_list_line(note),
        }
    }

    /// ```text
    /// Title
    /// -----
    /// This is an example and contains a title.
    ///
    /// Last edited: 2022-05-27, 21:59.
    /// ```
    pub fn render_card(&self, note: &Note) -> String {
        let mut out = String::new();
        out.push_str(&self.format_header(&note.title));
        out.push('\n');
        out.push_str(&"-".repeat(note.title.chars().count()));
        out.push('\n');
        out.push_str(&note.content);
        out.push('\n');
        if !note.content.is_empty() && !note.content.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&format!(
            "Last edited: {}.",
            self.format_timestamp(&note.display_time())
        ));
        out
    }

    /// `[1] 2022-05-27, 21:59 - This is another example`
    pub fn render_list_line(&self, note: &Note) -> String {
        let prefix = format!(
            "{} {} - ",
            self.format_id(note.id),
            self.format_timestamp(&note.display_time())
        );
        let label = note.list_label();
        let label = match self.max_width {
            Some(width) => fit_label(&prefix, &label, width),
            None => label,
        };
        format!("{prefix}{label}")
    }
}
