//! This file defines the tabs and the navigation bar that switches between them.

use maud::{Markup, html};

use crate::endpoints;

/// One of the top-level views of the app, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Transactions,
    Budgeting,
    Settings,
}

impl Tab {
    /// All tabs in the order they appear in the navigation bar.
    pub const ALL: [Tab; 4] = [
        Tab::Dashboard,
        Tab::Transactions,
        Tab::Budgeting,
        Tab::Settings,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Transactions => "Transactions",
            Tab::Budgeting => "Budgeting",
            Tab::Settings => "Settings",
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            Tab::Dashboard => endpoints::DASHBOARD_VIEW,
            Tab::Transactions => endpoints::TRANSACTIONS_VIEW,
            Tab::Budgeting => endpoints::BUDGETING_VIEW,
            Tab::Settings => endpoints::SETTINGS_VIEW,
        }
    }

    /// Get the tab whose page is served at `endpoint`, if any.
    pub fn from_endpoint(endpoint: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.endpoint() == endpoint)
    }

    fn position(self) -> usize {
        Tab::ALL
            .iter()
            .position(|&tab| tab == self)
            .unwrap_or_default()
    }

    /// The tab to the right, wrapping from the last tab to the first.
    pub fn next(self) -> Tab {
        Tab::ALL[(self.position() + 1) % Tab::ALL.len()]
    }

    /// The tab to the left, wrapping from the first tab to the last.
    pub fn previous(self) -> Tab {
        Tab::ALL[(self.position() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Template for a link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link {
    tab: Tab,
    is_current: bool,
}

impl Link {
    fn into_desktop_html(self) -> Markup {
        let style = if self.is_current {
            "px-3 py-2 rounded-md text-sm font-medium bg-white text-blue-700
            focus:outline-none focus-visible:ring-2 focus-visible:ring-blue-500
            dark:bg-gray-800 dark:text-blue-300"
        } else {
            "px-3 py-2 rounded-md text-sm font-medium text-gray-700
            hover:bg-white/70 focus:outline-none focus-visible:ring-2
            focus-visible:ring-blue-500 dark:text-gray-300 dark:hover:bg-gray-800"
        };

        html!(
            a
                href=(self.tab.endpoint())
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.tab.title())
            }
        )
    }

    fn into_bottom_html(self) -> Markup {
        let style = if self.is_current {
            "flex flex-col items-center justify-center gap-1 py-2.5 text-xs
            font-semibold text-blue-700 dark:text-blue-300"
        } else {
            "flex flex-col items-center justify-center gap-1 py-2.5 text-xs
            text-gray-600 dark:text-gray-400"
        };

        html!(
            li class="contents"
            {
                a
                    href=(self.tab.endpoint())
                    role="tab"
                    aria-selected=(if self.is_current { "true" } else { "false" })
                    class=(style)
                {
                    span { (self.tab.title()) }
                }
            }
        )
    }
}

pub struct NavBar {
    links: Vec<Link>,
    active_tab: Option<Tab>,
}

impl NavBar {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> NavBar {
        let active_tab = Tab::from_endpoint(active_endpoint);
        let links = Tab::ALL
            .into_iter()
            .map(|tab| Link {
                tab,
                is_current: Some(tab) == active_tab,
            })
            .collect();

        NavBar { links, active_tab }
    }

    pub fn into_html(self) -> Markup {
        let links = self.links;
        // The arrow keys only switch tabs when the current page is a tab.
        let next_tab = self.active_tab.map(|tab| tab.next().endpoint());
        let prev_tab = self.active_tab.map(|tab| tab.previous().endpoint());

        html!(
            header
                class="sticky top-0 z-20 bg-[#F0F2F5]/80 backdrop-blur border-b
                    border-gray-200 dark:bg-gray-900/80 dark:border-gray-700"
                role="banner"
            {
                div class="max-w-6xl mx-auto px-4 py-3 flex items-center justify-between"
                {
                    a href=(endpoints::ROOT) class="flex items-center gap-3"
                    {
                        div
                            aria-hidden="true"
                            class="w-8 h-8 rounded-lg bg-gradient-to-br from-blue-500 to-emerald-400"
                        {}

                        span
                            class="text-lg md:text-xl font-semibold dark:text-white"
                            aria-label="Fintrack - Personal Finance Dashboard"
                        {
                            "Fintrack"
                        }
                    }

                    nav
                        id="tab-nav"
                        aria-label="Primary"
                        class="hidden md:flex gap-6"
                        data-next-tab=[next_tab]
                        data-prev-tab=[prev_tab]
                    {
                        @for link in links.clone().into_iter() {
                            (link.into_desktop_html())
                        }
                    }
                }
            }

            nav
                aria-label="Bottom navigation"
                class="fixed bottom-0 inset-x-0 md:hidden bg-white border-t
                    border-gray-200 dark:bg-gray-800 dark:border-gray-700"
            {
                ul role="tablist" class="grid grid-cols-4"
                {
                    @for link in links.into_iter() {
                        (link.into_bottom_html())
                    }
                }
            }
        )
    }
}
