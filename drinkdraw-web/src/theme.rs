//! Bar theming: pushes the selected bar's palette into CSS custom properties.
//!
//! Colors are HSL triplets without the `hsl()` wrapper (`"45 90% 55%"`) so the
//! stylesheet can compose them as `hsl(var(--primary))`.
use drinkdraw_game::{Bar, BarTheme};

/// Foreground used on cards regardless of the bar.
const CARD_FOREGROUND: &str = "0 0% 98%";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Parse `"h s% l%"`; `None` unless all three components are numeric.
    #[must_use]
    pub fn parse(triplet: &str) -> Option<Self> {
        let mut parts = triplet
            .split_whitespace()
            .map(|part| part.trim_end_matches('%').parse::<f64>().ok());
        let h = parts.next()??;
        let s = parts.next()??;
        let l = parts.next()??;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { h, s, l })
    }

    #[must_use]
    pub fn triplet(self) -> String {
        format!("{} {}% {}%", self.h, self.s, self.l)
    }

    fn css(self) -> String {
        format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }

    const fn with(self, s: f64, l: f64) -> Self {
        Self { h: self.h, s, l }
    }
}

/// Colors derived from the card background plus the page gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub border: Hsl,
    pub input: Hsl,
    pub muted_foreground: Hsl,
    pub background_gradient: String,
}

/// Derive the secondary colors from the theme, or `None` if a triplet is malformed.
#[must_use]
pub fn derive_palette(theme: &BarTheme) -> Option<Palette> {
    let card = Hsl::parse(&theme.card_bg)?;
    let bg = Hsl::parse(&theme.background)?;

    let border = card.with((card.s - 10.0).max(10.0), (card.l + 10.0).min(40.0));
    let input = card.with((card.s - 5.0).max(10.0), (card.l - 5.0).max(10.0));
    let muted_foreground = card.with((card.s - 20.0).max(5.0), (card.l + 45.0).min(70.0));

    let stops = [
        (bg.with((bg.s + 10.0).min(100.0), bg.l), 0),
        (card.with((card.s + 5.0).min(100.0), (card.l + 5.0).min(25.0)), 25),
        (bg.with((bg.s + 10.0).min(100.0), (bg.l - 2.0).max(5.0)), 50),
        (card.with((card.s + 10.0).min(100.0), (card.l + 7.0).min(28.0)), 75),
        (bg.with((bg.s + 5.0).min(100.0), (bg.l - 1.0).max(5.0)), 100),
    ];
    let stops: Vec<String> = stops
        .iter()
        .map(|(color, at)| format!("{} {at}%", color.css()))
        .collect();

    Some(Palette {
        border,
        input,
        muted_foreground,
        background_gradient: format!("linear-gradient(135deg, {})", stops.join(", ")),
    })
}

/// Every custom property a bar sets, in application order.
#[must_use]
pub fn css_variables(theme: &BarTheme) -> Vec<(&'static str, String)> {
    let mut vars = vec![
        ("--primary", theme.primary.clone()),
        ("--secondary", theme.secondary.clone()),
        ("--accent", theme.accent.clone()),
        ("--background", theme.background.clone()),
        ("--card", theme.card_bg.clone()),
        ("--card-foreground", CARD_FOREGROUND.to_string()),
        ("--muted", theme.card_bg.clone()),
        ("--ring", theme.primary.clone()),
    ];
    if let Some(palette) = derive_palette(theme) {
        vars.push(("--border", palette.border.triplet()));
        vars.push(("--input", palette.input.triplet()));
        vars.push(("--muted-foreground", palette.muted_foreground.triplet()));
    } else {
        log::warn!("bar theme has a malformed card color: {:?}", theme.card_bg);
    }
    vars
}

/// Apply `bar` to the document root; `None` drops the bar marker and keeps the stylesheet defaults.
pub fn apply_bar_theme(bar: Option<&Bar>) {
    let Some(root) = crate::dom::root_element() else {
        return;
    };
    let Some(bar) = bar else {
        let _ = root.remove_attribute("data-theme");
        return;
    };

    let style = root.style();
    for (name, value) in css_variables(&bar.theme) {
        let _ = style.set_property(name, &value);
    }
    if let Some(palette) = derive_palette(&bar.theme)
        && let Some(body) = crate::dom::document().and_then(|doc| doc.body())
    {
        let body_style = body.style();
        let _ = body_style.set_property("background", &palette.background_gradient);
        let _ = body_style.set_property("background-attachment", "fixed");
    }
    let _ = root.set_attribute("data-theme", &bar.id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(card_bg: &str) -> BarTheme {
        BarTheme {
            primary: "45 90% 55%".into(),
            secondary: "30 20% 20%".into(),
            accent: "45 100% 65%".into(),
            background: "0 0% 8%".into(),
            card_bg: card_bg.into(),
        }
    }

    #[test]
    fn parses_triplets() {
        assert_eq!(
            Hsl::parse("30 15% 15%"),
            Some(Hsl {
                h: 30.0,
                s: 15.0,
                l: 15.0
            })
        );
        assert_eq!(Hsl::parse("30 15%"), None);
        assert_eq!(Hsl::parse("a b c"), None);
        assert_eq!(Hsl::parse("1 2% 3% 4"), None);
    }

    #[test]
    fn derives_clamped_palette() {
        let palette = derive_palette(&theme("30 15% 15%")).unwrap();
        assert_eq!(palette.border.triplet(), "30 10% 25%");
        assert_eq!(palette.input.triplet(), "30 10% 10%");
        assert_eq!(palette.muted_foreground.triplet(), "30 5% 60%");
        assert!(palette.background_gradient.starts_with("linear-gradient(135deg, hsl(0, 10%, 8%) 0%"));
        assert!(palette.background_gradient.ends_with("hsl(0, 5%, 7%) 100%)"));

        let bright = derive_palette(&theme("270 60% 35%")).unwrap();
        assert_eq!(bright.border.triplet(), "270 50% 40%");
        assert_eq!(bright.muted_foreground.triplet(), "270 40% 70%");
    }

    #[test]
    fn variables_cover_base_and_derived_colors() {
        let vars = css_variables(&theme("30 15% 15%"));
        let names: Vec<_> = vars.iter().map(|(name, _)| *name).collect();
        assert!(names.contains(&"--ring"));
        assert!(names.contains(&"--muted-foreground"));
        assert_eq!(vars.len(), 11);

        let degraded = css_variables(&theme("not a color"));
        assert_eq!(degraded.len(), 8);
    }

    #[test]
    fn catalog_themes_are_well_formed() {
        for bar in drinkdraw_game::BarCatalog::default_catalog().iter() {
            assert!(derive_palette(&bar.theme).is_some(), "{}", bar.id);
        }
    }
}
