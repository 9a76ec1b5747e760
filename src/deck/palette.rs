//! Style palette: a closed set of semantic roles mapped to concrete colours.
//!
//! Renderers never carry colour literals. They ask the palette for a [`Role`]
//! and get back a [`Paint`], which keeps both the role and the resolved colour
//! so the element order and styling of a page can be inspected after the fact.
//! A role the palette does not define is a configuration error, never a silent
//! fallback.

use crate::common::{Error, RGBColor, Result};
use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic colour roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Background,
    PrimaryAccent,
    SecondaryAccent,
    Highlight,
    BodyText,
    InverseText,
    Border,
    HeaderFill,
    AltRowFill,
    Success,
    /// Fill of bordered panels sitting on top of the page background
    Surface,
}

impl Role {
    pub const COUNT: usize = 11;

    pub const ALL: [Role; Role::COUNT] = [
        Role::Background,
        Role::PrimaryAccent,
        Role::SecondaryAccent,
        Role::Highlight,
        Role::BodyText,
        Role::InverseText,
        Role::Border,
        Role::HeaderFill,
        Role::AltRowFill,
        Role::Success,
        Role::Surface,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Background => "background",
            Role::PrimaryAccent => "primary-accent",
            Role::SecondaryAccent => "secondary-accent",
            Role::Highlight => "highlight",
            Role::BodyText => "body-text",
            Role::InverseText => "inverse-text",
            Role::Border => "border",
            Role::HeaderFill => "header-fill",
            Role::AltRowFill => "alt-row-fill",
            Role::Success => "success",
            Role::Surface => "surface",
        }
    }
}

// Canonical names plus the short aliases used in theme files.
static ROLE_NAMES: phf::Map<&'static str, Role> = phf_map! {
    "background" => Role::Background,
    "primary-accent" => Role::PrimaryAccent,
    "accent" => Role::PrimaryAccent,
    "secondary-accent" => Role::SecondaryAccent,
    "highlight" => Role::Highlight,
    "body-text" => Role::BodyText,
    "text" => Role::BodyText,
    "inverse-text" => Role::InverseText,
    "border" => Role::Border,
    "header-fill" => Role::HeaderFill,
    "header" => Role::HeaderFill,
    "alt-row-fill" => Role::AltRowFill,
    "success" => Role::Success,
    "surface" => Role::Surface,
};

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        ROLE_NAMES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| Error::Config(format!("Unknown style role '{}'", s)))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved colour together with the role it was requested under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub role: Role,
    pub color: RGBColor,
}

/// Read-only role to colour mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Option<RGBColor>; Role::COUNT],
}

impl Palette {
    /// A palette with no roles defined.
    pub const fn empty() -> Self {
        Self {
            colors: [None; Role::COUNT],
        }
    }

    /// Light background, navy and red accents, yellow highlight.
    pub fn brutalist() -> Self {
        Self::empty()
            .with(Role::Background, RGBColor::from_u32(0xF8F9FA))
            .with(Role::PrimaryAccent, RGBColor::from_u32(0xE63946))
            .with(Role::SecondaryAccent, RGBColor::from_u32(0x1D3557))
            .with(Role::Highlight, RGBColor::from_u32(0xFFD166))
            .with(Role::BodyText, RGBColor::from_u32(0x212529))
            .with(Role::InverseText, RGBColor::WHITE)
            .with(Role::Border, RGBColor::from_u32(0x212529))
            .with(Role::HeaderFill, RGBColor::from_u32(0x1D3557))
            .with(Role::AltRowFill, RGBColor::from_u32(0xE9ECEF))
            .with(Role::Success, RGBColor::from_u32(0x2ECC71))
            .with(Role::Surface, RGBColor::WHITE)
    }

    /// Builder method: define or replace a role.
    pub fn with(mut self, role: Role, color: RGBColor) -> Self {
        self.colors[role.index()] = Some(color);
        self
    }

    pub fn get(&self, role: Role) -> Option<RGBColor> {
        self.colors[role.index()]
    }

    /// Resolve a role, failing if the palette leaves it undefined.
    pub fn resolve(&self, role: Role) -> Result<RGBColor> {
        self.get(role).ok_or(Error::UndefinedRole(role))
    }

    pub fn paint(&self, role: Role) -> Result<Paint> {
        Ok(Paint {
            role,
            color: self.resolve(role)?,
        })
    }

    /// Overlay every role defined in `other` on top of this palette.
    pub fn merged(mut self, other: &Palette) -> Self {
        for role in Role::ALL {
            if let Some(color) = other.get(role) {
                self.colors[role.index()] = Some(color);
            }
        }
        self
    }

    /// Roles with a colour, in declaration order.
    pub fn defined(&self) -> impl Iterator<Item = (Role, RGBColor)> + '_ {
        Role::ALL
            .into_iter()
            .filter_map(|role| self.get(role).map(|c| (role, c)))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::brutalist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_roles_indexed_in_order() {
        for (i, role) in Role::ALL.iter().enumerate() {
            assert_eq!(role.index(), i);
        }
    }

    #[test]
    fn test_brutalist_defines_every_role() {
        let palette = Palette::brutalist();
        assert_eq!(palette.defined().count(), Role::COUNT);
        assert_eq!(
            palette.resolve(Role::PrimaryAccent).unwrap().to_hex(),
            "E63946"
        );
    }

    #[test]
    fn test_undefined_role_fails_fast() {
        let palette = Palette::empty().with(Role::BodyText, RGBColor::BLACK);
        assert!(palette.resolve(Role::BodyText).is_ok());
        assert!(matches!(
            palette.resolve(Role::Highlight),
            Err(Error::UndefinedRole(Role::Highlight))
        ));
    }

    #[test]
    fn test_role_names() {
        assert_eq!("primary-accent".parse::<Role>().unwrap(), Role::PrimaryAccent);
        assert_eq!("accent".parse::<Role>().unwrap(), Role::PrimaryAccent);
        assert_eq!("Header_Fill".parse::<Role>().unwrap(), Role::HeaderFill);
        assert!("shadow".parse::<Role>().is_err());
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_merge_overrides_only_defined_roles() {
        let overlay = Palette::empty().with(Role::Highlight, RGBColor::from_u32(0x00FF00));
        let merged = Palette::brutalist().merged(&overlay);
        assert_eq!(merged.resolve(Role::Highlight).unwrap().to_hex(), "00FF00");
        assert_eq!(merged.resolve(Role::Border).unwrap().to_hex(), "212529");
    }
}
