//! The navigation bar shown at the top of every page, and at the bottom on small screens.

use maud::{Markup, html};

use crate::endpoints;

/// The pages reachable from the navigation bar, as (URL, title) pairs.
const PAGES: [(&str, &str); 2] = [
    (endpoints::RECORDS_VIEW, "Records"),
    (endpoints::NEW_RECORD_VIEW, "New Record"),
];

const TOP_LINK_STYLE: &str = "block py-2 px-3 rounded-sm lg:p-0 text-gray-900 \
    hover:text-emerald-700 dark:text-white lg:dark:hover:text-emerald-400";
const TOP_LINK_CURRENT_STYLE: &str = "block py-2 px-3 rounded-sm lg:p-0 font-semibold \
    text-emerald-700 dark:text-emerald-400";
const BOTTOM_LINK_STYLE: &str = "flex w-full items-center justify-center rounded-lg \
    px-3 py-2 text-sm font-semibold text-gray-600 hover:bg-emerald-50 \
    hover:text-emerald-700 dark:text-gray-300 dark:hover:bg-emerald-900/20";
const BOTTOM_LINK_CURRENT_STYLE: &str = "flex w-full items-center justify-center rounded-lg \
    px-3 py-2 text-sm font-semibold bg-emerald-50 text-emerald-700 \
    dark:bg-emerald-900/30 dark:text-emerald-200";

/// The navigation bar for a page. The link whose URL equals the page's endpoint is
/// highlighted. Pages without a link, such as the edit page, highlight nothing.
pub struct NavBar<'a> {
    active_endpoint: &'a str,
}

impl<'a> NavBar<'a> {
    pub fn new(active_endpoint: &'a str) -> Self {
        Self { active_endpoint }
    }

    fn is_current(&self, url: &str) -> bool {
        self.active_endpoint == url
    }

    pub fn into_html(self) -> Markup {
        html!(
            nav class="bg-white border-b border-gray-200 dark:bg-gray-900 dark:border-gray-700"
            {
                div class="max-w-screen-xl flex items-center justify-between mx-auto p-4"
                {
                    a
                        href=(endpoints::RECORDS_VIEW)
                        class="text-2xl font-semibold whitespace-nowrap text-gray-900 dark:text-white"
                    {
                        "Registro Financiero"
                    }

                    ul class="hidden lg:flex lg:space-x-8 font-medium"
                    {
                        @for (url, title) in PAGES {
                            @let style = if self.is_current(url) { TOP_LINK_CURRENT_STYLE } else { TOP_LINK_STYLE };

                            li { a href=(url) class=(style) { (title) } }
                        }
                    }
                }
            }

            nav class="fixed inset-x-0 bottom-0 z-40 lg:hidden"
            {
                ul
                    class="grid grid-cols-2 gap-2 mx-4 mb-4 p-3 rounded-xl border
                    border-gray-200 bg-white/95 shadow-lg dark:border-gray-700
                    dark:bg-gray-900/95"
                    aria-label="Primary"
                {
                    @for (url, title) in PAGES {
                        @let is_current = self.is_current(url);
                        @let style = if is_current { BOTTOM_LINK_CURRENT_STYLE } else { BOTTOM_LINK_STYLE };

                        li
                        {
                            a href=(url) class=(style) aria-current=[is_current.then_some("page")]
                            {
                                (title)
                            }
                        }
                    }
                }
            }
        )
    }
}
