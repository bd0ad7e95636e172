//! Shared UI themes and Tailwind class constants to keep pages visually
//! consistent.

pub struct Theme;

impl Theme {
    pub const PAGE_TITLE: &'static str = "text-2xl font-bold text-gray-900 dark:text-white";

    pub const PAGE_SUBTITLE: &'static str = "mt-1 text-sm text-gray-500 dark:text-gray-400";

    /// White panel used by dashboard cards, forms and tables.
    pub const CARD: &'static str = "rounded-lg border border-gray-200 bg-white p-6 shadow-sm dark:border-gray-700 dark:bg-gray-800";

    pub const CARD_TITLE: &'static str = "text-lg font-semibold text-gray-900 dark:text-white";

    pub const LABEL: &'static str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

    pub const INPUT: &'static str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500";

    /// Same as `INPUT` with the red border of a failing field.
    pub const INPUT_INVALID: &'static str = "bg-red-50 border border-red-500 text-red-900 placeholder-red-700 text-sm rounded-lg focus:ring-red-500 focus:border-red-500 block w-full p-2.5 dark:bg-gray-700 dark:text-red-400 dark:placeholder-red-500 dark:border-red-500";

    pub const FIELD_ERROR: &'static str = "mt-2 text-sm text-red-600 dark:text-red-400";

    pub const LINK: &'static str = "font-medium text-blue-600 hover:underline dark:text-blue-500";

    pub const TABLE: &'static str = "w-full text-sm text-left text-gray-500 dark:text-gray-400";

    pub const TABLE_HEAD: &'static str = "text-xs text-gray-700 uppercase bg-gray-50 dark:bg-gray-700 dark:text-gray-400";

    /// Container for a row that reacts to hover signaling its children (via the `group` class).
    pub const ROW: &'static str = "px-6 py-4 group transition-colors";

    /// Standard icon style that transitions from gray to dark/white on parent hover.
    pub const ICON: &'static str = "material-symbols-outlined text-gray-400 dark:text-gray-500 group-hover:text-gray-900 dark:group-hover:text-white transition-colors";

    /// Flat list item variant without drop shadow.
    pub const LIST_ITEM_FLAT: &'static str = "flex items-center justify-between bg-gray-50 dark:bg-gray-900/50 p-3 rounded-lg border border-gray-200 dark:border-gray-700 transition-colors";

    pub const TAB: &'static str = "inline-block px-4 py-2 rounded-lg text-sm font-medium text-gray-600 hover:bg-gray-100 hover:text-gray-900 dark:text-gray-400 dark:hover:bg-gray-800 dark:hover:text-white";

    pub const TAB_ACTIVE: &'static str = "inline-block px-4 py-2 rounded-lg text-sm font-medium text-white bg-blue-600";
}
