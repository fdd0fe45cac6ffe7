//! Style slots and the built-in theme presets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of style slots the presentation layer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleSlot {
    Container,
    Heading,
    Label,
    Input,
    Slider,
    Button,
    ErrorText,
    SuccessContainer,
    SuccessText,
    ErrorContainer,
    ErrorIcon,
    SuccessIcon,
}

impl StyleSlot {
    pub const ALL: [StyleSlot; 12] = [
        StyleSlot::Container,
        StyleSlot::Heading,
        StyleSlot::Label,
        StyleSlot::Input,
        StyleSlot::Slider,
        StyleSlot::Button,
        StyleSlot::ErrorText,
        StyleSlot::SuccessContainer,
        StyleSlot::SuccessText,
        StyleSlot::ErrorContainer,
        StyleSlot::ErrorIcon,
        StyleSlot::SuccessIcon,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            StyleSlot::Container => "container",
            StyleSlot::Heading => "heading",
            StyleSlot::Label => "label",
            StyleSlot::Input => "input",
            StyleSlot::Slider => "slider",
            StyleSlot::Button => "button",
            StyleSlot::ErrorText => "errorText",
            StyleSlot::SuccessContainer => "successContainer",
            StyleSlot::SuccessText => "successText",
            StyleSlot::ErrorContainer => "errorContainer",
            StyleSlot::ErrorIcon => "errorIcon",
            StyleSlot::SuccessIcon => "successIcon",
        }
    }

    /// Matches case-insensitively, ignoring `_` and `-`, so `error_text`
    /// and `errorText` name the same slot.
    pub fn from_key(key: &str) -> Option<StyleSlot> {
        let normalized: String = key
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        StyleSlot::ALL
            .iter()
            .copied()
            .find(|slot| slot.key().to_ascii_lowercase() == normalized)
    }
}

impl fmt::Display for StyleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
    Colorful,
}

impl ThemeName {
    /// Unrecognised names fall back to the light theme.
    pub fn from_name_or_default(name: &str) -> ThemeName {
        name.parse().unwrap_or_default()
    }

    pub fn preset(&self) -> &'static [(StyleSlot, &'static str)] {
        match self {
            ThemeName::Light => LIGHT,
            ThemeName::Dark => DARK,
            ThemeName::Colorful => COLORFUL,
        }
    }
}

impl FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            "colorful" => Ok(ThemeName::Colorful),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

const LIGHT: &[(StyleSlot, &str)] = &[
    (StyleSlot::Container, "max-w-md mx-auto p-6 bg-white rounded-lg shadow-md"),
    (StyleSlot::Heading, "text-xl font-bold mb-4 text-gray-800"),
    (StyleSlot::Label, "block text-sm font-medium text-gray-700 mb-1"),
    (StyleSlot::Input, "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"),
    (StyleSlot::Slider, "w-full h-2 bg-gray-200 rounded-lg appearance-none cursor-pointer"),
    (StyleSlot::Button, "w-full py-2 px-4 bg-blue-600 text-white font-semibold rounded-md hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 disabled:opacity-50"),
    (StyleSlot::ErrorText, "mt-2 text-sm text-red-600"),
    (StyleSlot::SuccessContainer, "p-4 bg-green-100 rounded-md"),
    (StyleSlot::SuccessText, "text-green-800 flex items-center"),
    (StyleSlot::ErrorContainer, "p-4 bg-red-100 rounded-md"),
    (StyleSlot::ErrorIcon, "h-5 w-5 text-red-500 mr-2"),
    (StyleSlot::SuccessIcon, "h-5 w-5 text-green-500 mr-2"),
];

const DARK: &[(StyleSlot, &str)] = &[
    (StyleSlot::Container, "max-w-md mx-auto p-6 bg-gray-800 rounded-lg shadow-md"),
    (StyleSlot::Heading, "text-xl font-bold mb-4 text-white"),
    (StyleSlot::Label, "block text-sm font-medium text-gray-300 mb-1"),
    (StyleSlot::Input, "w-full px-3 py-2 border border-gray-600 bg-gray-700 text-white rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"),
    (StyleSlot::Slider, "w-full h-2 bg-gray-600 rounded-lg appearance-none cursor-pointer"),
    (StyleSlot::Button, "w-full py-2 px-4 bg-blue-500 text-white font-semibold rounded-md hover:bg-blue-600 focus:outline-none focus:ring-2 focus:ring-blue-400 focus:ring-offset-2 focus:ring-offset-gray-800 disabled:opacity-50"),
    (StyleSlot::ErrorText, "mt-2 text-sm text-red-400"),
    (StyleSlot::SuccessContainer, "p-4 bg-green-800 rounded-md"),
    (StyleSlot::SuccessText, "text-green-200 flex items-center"),
    (StyleSlot::ErrorContainer, "p-4 bg-red-900 rounded-md"),
    (StyleSlot::ErrorIcon, "h-5 w-5 text-red-400 mr-2"),
    (StyleSlot::SuccessIcon, "h-5 w-5 text-green-400 mr-2"),
];

const COLORFUL: &[(StyleSlot, &str)] = &[
    (StyleSlot::Container, "max-w-md mx-auto p-6 bg-gradient-to-br from-purple-50 to-blue-50 rounded-lg shadow-md"),
    (StyleSlot::Heading, "text-xl font-bold mb-4 text-purple-800"),
    (StyleSlot::Label, "block text-sm font-medium text-purple-700 mb-1"),
    (StyleSlot::Input, "w-full px-3 py-2 border border-purple-300 rounded-md focus:outline-none focus:ring-2 focus:ring-purple-500"),
    (StyleSlot::Slider, "w-full h-2 bg-purple-200 rounded-lg appearance-none cursor-pointer"),
    (StyleSlot::Button, "w-full py-2 px-4 bg-gradient-to-r from-purple-600 to-blue-600 text-white font-semibold rounded-md hover:from-purple-700 hover:to-blue-700 focus:outline-none focus:ring-2 focus:ring-purple-500 focus:ring-offset-2 disabled:opacity-50"),
    (StyleSlot::ErrorText, "mt-2 text-sm text-red-600"),
    (StyleSlot::SuccessContainer, "p-4 bg-gradient-to-r from-green-100 to-teal-100 rounded-md"),
    (StyleSlot::SuccessText, "text-green-800 flex items-center"),
    (StyleSlot::ErrorContainer, "p-4 bg-gradient-to-r from-red-100 to-pink-100 rounded-md"),
    (StyleSlot::ErrorIcon, "h-5 w-5 text-red-500 mr-2"),
    (StyleSlot::SuccessIcon, "h-5 w-5 text-green-500 mr-2"),
];
