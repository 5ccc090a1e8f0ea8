use std::collections::BTreeMap;
use std::path::Path;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{VeloError, VeloResult};

/// Named color roles used by the job catalog (`bg-dark`, `accent-red`, ...).
///
/// Two palettes are built in: [`Palette::classic`] mirrors the original
/// cycling theme, [`Palette::luxury`] the black-and-gold theme. A JSON object
/// of `role: "#rrggbb"` pairs can override any subset of roles.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: BTreeMap<String, Rgb8>,
}

impl Palette {
    /// Dark cycling theme: red/blue/gold accents on near-black cards.
    pub fn classic() -> Self {
        Self::from_pairs([
            ("bg-dark", "#0a0a0f"),
            ("bg-card", "#141419"),
            ("bg-elevated", "#1a1a2e"),
            ("accent-red", "#e63946"),
            ("accent-blue", "#00a8e8"),
            ("accent-gold", "#f4a261"),
            ("text-white", "#ffffff"),
            ("text-gray", "#a0a0a0"),
            ("metal", "#4a5568"),
            ("carbon", "#1a1a2e"),
            ("tire", "#0f0f15"),
            ("skin", "#f0dcc8"),
            ("shoulders", "#50505a"),
            ("road", "#2d3748"),
        ])
    }

    /// Black-and-gold theme from the premium asset set.
    pub fn luxury() -> Self {
        Self::from_pairs([
            ("bg-dark", "#0a0a0a"),
            ("bg-card", "#111111"),
            ("bg-elevated", "#1a1a1a"),
            ("accent-red", "#c9a962"),
            ("accent-blue", "#e8d5a3"),
            ("accent-gold", "#9a7b3d"),
            ("text-white", "#f5f5f5"),
            ("text-gray", "#737373"),
            ("metal", "#525252"),
            ("carbon", "#2d2d3a"),
            ("tire", "#262626"),
            ("skin", "#404040"),
            ("shoulders", "#262626"),
            ("road", "#404040"),
        ])
    }

    fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let colors = pairs
            .into_iter()
            .map(|(role, hex)| {
                let color = Rgb8::from_hex(hex).unwrap_or(Rgb8::BLACK);
                (role.to_owned(), color)
            })
            .collect();
        Self { colors }
    }

    /// Look up a role. Unknown roles are a validation error so typos in
    /// custom palettes surface before any pixels are drawn.
    pub fn get(&self, role: &str) -> VeloResult<Rgb8> {
        self.colors
            .get(role)
            .copied()
            .ok_or_else(|| VeloError::validation(format!("unknown palette role '{role}'")))
    }

    /// Merge `role: hex` overrides into this palette. New roles are allowed.
    pub fn merge(&mut self, overrides: &Palette) {
        for (role, color) in &overrides.colors {
            self.colors.insert(role.clone(), *color);
        }
    }

    /// Load overrides from a JSON file (an object of `role: "#rrggbb"`).
    pub fn merge_from_path(&mut self, path: &Path) -> VeloResult<()> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            VeloError::validation(format!("cannot read palette '{}': {e}", path.display()))
        })?;
        let overrides: Palette = serde_json::from_str(&text).map_err(|e| {
            VeloError::validation(format!("invalid palette '{}': {e}", path.display()))
        })?;
        self.merge(&overrides);
        Ok(())
    }
}
