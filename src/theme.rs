//! Colour schemes for the readings views.
//!
//! Every view is rendered by the same functions; only the classes in
//! [ThemeStyles] change between themes.

use clap::ValueEnum;

/// The colour scheme used to render the readings pages.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    /// Light panels with blue buttons.
    #[default]
    Classic,
    /// Dark panels with yellow headings.
    Night,
}

/// The Tailwind classes for each styled element of the readings views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct ThemeStyles {
    pub body: &'static str,
    pub panel: &'static str,
    pub heading: &'static str,
    pub label: &'static str,
    pub input: &'static str,
    pub text: &'static str,
    pub result_value: &'static str,
    pub button_primary: &'static str,
    pub button_secondary: &'static str,
    pub button_back: &'static str,
    pub button_previous: &'static str,
    pub button_next: &'static str,
    pub button_delete: &'static str,
    pub table_header: &'static str,
    pub table_row: &'static str,
    pub table_cell: &'static str,
}

const CLASSIC: ThemeStyles = ThemeStyles {
    body: "container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900",
    panel: "w-full p-8 rounded-lg shadow bg-white dark:bg-gray-800 \
        text-gray-900 dark:text-white",
    heading: "text-2xl font-bold mb-4",
    label: "block mb-2 text-sm font-medium text-gray-900 dark:text-white",
    input: "block w-full p-2.5 rounded text-sm text-gray-900 dark:text-white \
        bg-gray-50 dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
        focus:ring-blue-600 focus:border-blue-600",
    text: "text-xl",
    result_value: "text-green-600 dark:text-green-400 font-bold",
    button_primary: "w-full px-4 py-2 bg-blue-500 dark:bg-blue-600 \
        hover:enabled:bg-blue-600 text-white rounded",
    button_secondary: "w-full px-4 py-2 bg-gray-200 dark:bg-gray-700 \
        hover:bg-gray-300 text-gray-900 dark:text-white rounded",
    button_back: "inline-block px-4 py-2 bg-green-500 hover:bg-green-600 \
        text-white font-bold rounded text-center",
    button_previous: "px-4 py-2 mr-2 bg-red-400 disabled:opacity-50 \
        text-black font-bold rounded",
    button_next: "px-4 py-2 bg-blue-400 disabled:opacity-50 text-black font-bold rounded",
    button_delete: "text-red-600 hover:text-red-500 dark:text-red-500 \
        dark:hover:text-red-400 underline bg-transparent border-none cursor-pointer",
    table_header: "text-xs text-gray-700 uppercase bg-gray-50 dark:bg-gray-700 \
        dark:text-gray-400",
    table_row: "bg-white border-b dark:bg-gray-800 dark:border-gray-700",
    table_cell: "px-6 py-4",
};

const NIGHT: ThemeStyles = ThemeStyles {
    body: "container max-w-full min-h-screen bg-black",
    panel: "w-full p-8 rounded shadow-md bg-slate-900 text-white",
    heading: "text-2xl font-bold mb-4 text-[#f6f614]",
    label: "block mb-2 text-sm font-bold text-[#f6f614]",
    input: "block w-full p-2.5 rounded text-sm text-black bg-white border border-white",
    text: "text-xl text-white",
    result_value: "text-green-500 font-bold",
    button_primary: "w-full p-2 bg-[#f6f614] text-black font-bold rounded",
    button_secondary: "w-full p-2 bg-white text-black font-bold rounded",
    button_back: "inline-block p-2 bg-green-400 text-black font-bold rounded text-center",
    button_previous: "p-2 mr-2 bg-red-400 disabled:opacity-50 text-black font-bold rounded",
    button_next: "p-2 bg-blue-400 disabled:opacity-50 text-black font-bold rounded",
    button_delete: "p-1 bg-red-500 text-white rounded cursor-pointer",
    table_header: "border-b-2 border-white text-left leading-4 text-[#f6f614] tracking-wider",
    table_row: "text-white text-center font-bold",
    table_cell: "border px-4 py-2 whitespace-nowrap",
};

impl Theme {
    /// The classes to use when rendering with this theme.
    pub fn styles(self) -> &'static ThemeStyles {
        match self {
            Theme::Classic => &CLASSIC,
            Theme::Night => &NIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn themes_differ_only_in_styles() {
        assert_ne!(Theme::Classic.styles(), Theme::Night.styles());
        assert_eq!(Theme::default(), Theme::Classic);
    }
}
