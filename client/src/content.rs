//! Static site content: navigation anchors, brand, and hero copy.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// One entry in the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// Id of the page section this item scrolls to.
    pub target: &'static str,
}

impl NavItem {
    /// In-page anchor, e.g. `#about`.
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Home", target: "hero" },
    NavItem { label: "About", target: "about" },
    NavItem { label: "Skills", target: "skills" },
    NavItem { label: "Projects", target: "projects" },
    NavItem { label: "Contact", target: "contact" },
];

/// Navbar brand text: a glowing lead word followed by a plain suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brand {
    pub lead: &'static str,
    pub suffix: &'static str,
    pub target: &'static str,
}

pub const BRAND: Brand = Brand {
    lead: "Morgan's",
    suffix: " Portfolio",
    target: "hero",
};

/// Hero banner copy and portrait.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub greeting: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub tagline: &'static str,
    pub cta_label: &'static str,
    pub cta_target: &'static str,
    pub portrait_src: &'static str,
    pub portrait_alt: &'static str,
    pub portrait_size: u32,
}

impl Profile {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[must_use]
    pub fn cta_href(&self) -> String {
        format!("#{}", self.cta_target)
    }
}

pub const PROFILE: Profile = Profile {
    greeting: "Hi, I'm",
    first_name: "Morgan",
    last_name: "Muchira",
    tagline: "I create stunning websites with modern technologies. Specializing in \
              full-stack development, I build interfaces that are both beautiful and functional.",
    cta_label: "View My Work",
    cta_target: "projects",
    portrait_src: "/HeroPic.jpg",
    portrait_alt: "Morgan Muchira",
    portrait_size: 320,
};

pub const SITE_TITLE: &str = "Morgan's Portfolio";
