//! Editor color assignment for map rendering
//!
//! Colors cycle through a fixed palette in sorted editor order, so the
//! same roster always produces the same legend.

use indexmap::IndexMap;
use rpt_roster::EditorName;

const PALETTE: [&str; 10] = [
    "red", "blue", "green", "orange", "purple", "pink", "cyan", "lime", "brown", "magenta",
];

const NEUTRAL: &str = "gray";

/// Stable editor → color assignment
#[derive(Debug, Clone, Default)]
pub struct EditorPalette {
    colors: IndexMap<EditorName, &'static str>,
}

impl EditorPalette {
    /// Assign colors to editors, cycling the palette in the given order
    ///
    /// Callers pass the roster's sorted editor list so assignments stay
    /// stable run to run.
    #[must_use]
    pub fn new(editors: &[EditorName]) -> Self {
        let colors = editors
            .iter()
            .enumerate()
            .map(|(i, editor)| (editor.clone(), PALETTE[i % PALETTE.len()]))
            .collect();
        Self { colors }
    }

    /// The color for an editor, if they are in the palette
    #[inline]
    #[must_use]
    pub fn color(&self, editor: &EditorName) -> Option<&'static str> {
        self.colors.get(editor).copied()
    }

    /// Fill color for a completed suburb, neutral when the completing
    /// editor is unknown to the legend
    #[inline]
    #[must_use]
    pub fn color_or_neutral(&self, editor: &EditorName) -> &'static str {
        self.color(editor).unwrap_or(NEUTRAL)
    }

    /// Color for not-started suburbs
    #[inline]
    #[must_use]
    pub fn neutral() -> &'static str {
        NEUTRAL
    }

    /// Legend entries in assignment order
    pub fn iter(&self) -> impl Iterator<Item = (&EditorName, &'static str)> {
        self.colors.iter().map(|(e, c)| (e, *c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editors(names: &[&str]) -> Vec<EditorName> {
        names.iter().map(|n| EditorName::new(n).unwrap()).collect()
    }

    #[test]
    fn colors_follow_input_order() {
        let palette = EditorPalette::new(&editors(&["Anele", "Bheki", "Cebo"]));
        assert_eq!(palette.color(&EditorName::new("Anele").unwrap()), Some("red"));
        assert_eq!(palette.color(&EditorName::new("Bheki").unwrap()), Some("blue"));
        assert_eq!(palette.color(&EditorName::new("Cebo").unwrap()), Some("green"));
    }

    #[test]
    fn palette_cycles_past_ten_editors() {
        let names: Vec<String> = (0..12).map(|i| format!("Editor{i:02}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let palette = EditorPalette::new(&editors(&refs));

        let eleventh = EditorName::new("Editor10").unwrap();
        assert_eq!(palette.color(&eleventh), Some("red"));
    }

    #[test]
    fn unknown_editor_falls_back_to_neutral() {
        let palette = EditorPalette::new(&editors(&["Anele"]));
        let unknown = EditorName::new("Ghost").unwrap();
        assert_eq!(palette.color(&unknown), None);
        assert_eq!(palette.color_or_neutral(&unknown), "gray");
    }
}
