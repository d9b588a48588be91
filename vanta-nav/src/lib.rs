//! Navigation state for the VANTA dashboard shell.
//!
//! This crate is UI-agnostic. It owns the three pieces of state that decide
//! what the shell renders:
//! - [`RouteController`]: the current [`SectionId`], changed only by
//!   address-fragment signals;
//! - [`LayoutController`]: the current [`ViewportClass`] and the visibility
//!   of the mobile navigation overlay;
//! - [`SectionRegistry`]: a total mapping from [`SectionId`] to a view,
//!   falling back to the home view.
//!
//! [`Location`] plays the part of the host's address bar: menu items request
//! a fragment there and the resulting change signal is fed back through
//! [`RouteController::on_external_navigation_change`].
//!
//! # Quick Example
//!
//! ```
//! use vanta_nav::{
//!     LayoutController, Location, RouteController, SectionId, ViewportClass,
//! };
//!
//! let mut location = Location::new("#protection");
//! let mut route = RouteController::from_fragment(location.fragment());
//! let mut layout = LayoutController::new(ViewportClass::Mobile);
//! assert_eq!(route.current_section(), SectionId::Protection);
//!
//! layout.toggle_sidebar();
//! if let Some(fragment) = location.request(SectionId::Settings.fragment()) {
//!     layout.close_sidebar();
//!     route.on_external_navigation_change(&fragment);
//! }
//!
//! assert_eq!(route.current_section(), SectionId::Settings);
//! assert!(!layout.is_sidebar_open());
//! ```

mod layout;
mod location;
mod menu;
mod registry;
mod route;
mod section;
mod viewport;

pub use layout::{
    DESKTOP_SIDEBAR_WIDTH, LayoutController, TABLET_SIDEBAR_WIDTH,
};
pub use location::Location;
pub use menu::{HEADER_LINKS, NAVIGATION_MENU, NavigationMenuItem};
pub use registry::SectionRegistry;
pub use route::{RouteChange, RouteController, SectionTicket};
pub use section::{SectionId, UnknownSection};
pub use viewport::{
    MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH, ViewportClass, classify,
};
