//! Element ids and class selectors the page template exposes.

pub const BODY: &str = "body";

pub const MOBILE_MENU_TOGGLE: &str = "mobileMenuToggle";
pub const MOBILE_SIDEBAR: &str = "mobileSidebar";
pub const SIDEBAR_CLOSE: &str = "sidebarClose";
pub const SIDEBAR_OVERLAY: &str = "sidebarOverlay";

pub const MOBILE_SEARCH_TOGGLE: &str = "mobileSearchToggle";
pub const MOBILE_SEARCH: &str = "mobileSearch";
pub const MOBILE_SEARCH_CLOSE: &str = "mobileSearchClose";
pub const MOBILE_SEARCH_INPUT: &str = "mobileSearchInput";
pub const MOBILE_SEARCH_RESULTS: &str = "mobileSearchResults";

pub const MOBILE_MORE_TOGGLE: &str = "mobileMoreToggle";
pub const MOBILE_MORE_DROPDOWN: &str = "mobileMoreDropdown";

pub const DESKTOP_SEARCH: &str = ".nav-search-desktop";
pub const DESKTOP_SEARCH_INPUT: &str = "desktopSearchInput";
pub const DESKTOP_SEARCH_RESULTS: &str = "desktopSearchResults";

pub const SIDEBAR_TOGGLE: &str = "sidebarToggle";
pub const DESKTOP_SIDEBAR: &str = "desktopSidebar";
pub const SIDEBAR_DROPDOWN_TOGGLE: &str = ".sidebar-dropdown-toggle";
pub const SIDEBAR_NAV_DROPDOWN: &str = ".sidebar-nav-dropdown";

pub const GUEST_AVATAR: &str = "guestAvatar";
pub const USER_MENU: &str = ".user-menu";

pub const COMMENT_FORM: &str = "commentForm";
pub const COMMENT_CONTENT: &str = "commentContent";
pub const COMMENT_DROPDOWN_ICON: &str = "commentDropdownIcon";
pub const COMMENTS_LIST: &str = ".comments-list";

pub const FLASH_MESSAGE_CLASS: &str = "flash-message";

pub mod class {
    pub const ACTIVE: &str = "active";
    pub const COLLAPSED: &str = "collapsed";
    pub const MOBILE_SEARCH_ACTIVE: &str = "mobile-search-active";
    pub const SIDEBAR_OPEN: &str = "sidebar-open";
}
