/// Color palette for one theme mode.
///
/// Presentation-only configuration: a palette lookup never touches rows,
/// form fields, or network behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background gradient
    pub background: &'static str,
    /// Card / panel background
    pub surface: &'static str,
    /// App bar background
    pub header: &'static str,
    /// Primary accent (buttons, links)
    pub accent: &'static str,
    /// Table header background
    pub table_header: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    /// Border color for inputs and panels
    pub border: &'static str,
}

pub const LIGHT: Palette = Palette {
    background: "linear-gradient(135deg, #e3f2fd, #ffffff)",
    surface: "#ffffff",
    header: "#1976d2",
    accent: "#1976d2",
    table_header: "#1976d2",
    text_primary: "#000000",
    text_secondary: "#666666",
    border: "#cccccc",
};

pub const DARK: Palette = Palette {
    background: "linear-gradient(135deg, #0d1117, #1f1f1f)",
    surface: "#1e1e1e",
    header: "#333333",
    accent: "#90caf9",
    table_header: "#333333",
    text_primary: "#ffffff",
    text_secondary: "#aaaaaa",
    border: "#444444",
};

impl Palette {
    pub fn for_mode(dark_mode: bool) -> &'static Palette {
        if dark_mode {
            &DARK
        } else {
            &LIGHT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_map_to_distinct_palettes() {
        assert_ne!(Palette::for_mode(false), Palette::for_mode(true));
        assert_eq!(*Palette::for_mode(false), LIGHT);
        assert_eq!(*Palette::for_mode(true), DARK);
    }

    #[test]
    fn double_toggle_restores_palette() {
        let mut dark_mode = false;
        let before = Palette::for_mode(dark_mode);
        dark_mode = !dark_mode;
        dark_mode = !dark_mode;
        assert_eq!(before, Palette::for_mode(dark_mode));
    }
}
