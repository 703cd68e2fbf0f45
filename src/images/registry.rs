//! Static registry of image slots editable from the admin panel.

use serde::Serialize;

/// One named image placement on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageSlot {
    /// Stable identifier, also the key in the override map
    pub key: &'static str,
    /// Human-readable name shown in the admin panel
    pub label: &'static str,
    /// Where the image appears
    pub description: &'static str,
    /// Bundled asset used when nothing is configured (empty = no default)
    pub default_src: &'static str,
}

impl ImageSlot {
    /// Whether the build ships a default asset for this slot.
    pub fn has_default(&self) -> bool {
        !self.default_src.is_empty()
    }
}

/// A titled group of slots, rendered as one collapsible admin section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageGroup {
    /// Section title
    pub title: &'static str,
    /// Slots in display order
    pub items: &'static [ImageSlot],
}

const fn slot(
    key: &'static str,
    label: &'static str,
    description: &'static str,
    default_src: &'static str,
) -> ImageSlot {
    ImageSlot {
        key,
        label,
        description,
        default_src,
    }
}

/// Every image slot on the site, grouped by page section.
pub static IMAGE_GROUPS: &[ImageGroup] = &[
    ImageGroup {
        title: "Logo & Branding",
        items: &[slot(
            "logo",
            "Site Logo",
            "Appears in navbar, mobile menu, footer, floating button & splash screen",
            "/logo.jpg",
        )],
    },
    ImageGroup {
        title: "Hero Section",
        items: &[slot(
            "hero-bg-image",
            "Hero Background Image",
            "Main image for the top section (displayed if no video is set)",
            "",
        )],
    },
    ImageGroup {
        title: "About Section",
        items: &[slot(
            "prefab-about",
            "About Section Image",
            "Square image in the \"About Quick Home Prefab\" section",
            "/images/prefab-about.svg",
        )],
    },
    ImageGroup {
        title: "Prefab Types",
        items: &[
            slot(
                "prefab-residential",
                "Houses / Residential",
                "Card image for \"Houses\" prefab type (landscape, ~800x600)",
                "/images/prefab-residential.svg",
            ),
            slot(
                "prefab-commercial",
                "Offices & Commercial",
                "Card image for \"Offices & Commercial Spaces\" prefab type",
                "/images/prefab-commercial.svg",
            ),
            slot(
                "prefab-modular",
                "Modular Units",
                "Card image for \"Modular Units\" prefab type",
                "/images/prefab-modular.svg",
            ),
        ],
    },
    ImageGroup {
        title: "Benefits Section",
        items: &[slot(
            "benefits-image",
            "Benefits / Future of Home Building",
            "Square image in the \"The Future of Home Building\" section",
            "",
        )],
    },
    ImageGroup {
        title: "Featured Projects",
        items: &[
            slot(
                "featured-project-1",
                "Modern Family Home",
                "Featured project card, residential home (landscape, ~800x400)",
                "",
            ),
            slot(
                "featured-project-2",
                "Tech Startup Office",
                "Featured project card, commercial office (landscape, ~800x400)",
                "",
            ),
        ],
    },
    ImageGroup {
        title: "3D Gallery Carousel",
        items: &[
            slot(
                "gallery-1",
                "Gallery: Modern Family Home",
                "Gallery card 1, Manila residential (portrait, ~380x250)",
                "",
            ),
            slot(
                "gallery-2",
                "Gallery: Tech Startup Office",
                "Gallery card 2, Cebu commercial",
                "",
            ),
            slot(
                "gallery-3",
                "Gallery: Coastal Villa",
                "Gallery card 3, Batangas residential",
                "",
            ),
            slot(
                "gallery-4",
                "Gallery: Eco-Friendly Home",
                "Gallery card 4, Tagaytay residential",
                "",
            ),
            slot(
                "gallery-5",
                "Gallery: Medical Clinic",
                "Gallery card 5, Quezon City commercial",
                "",
            ),
        ],
    },
    ImageGroup {
        title: "Project Scroller Cards",
        items: &[
            slot(
                "project-coastal-villa",
                "Coastal Villa",
                "Project scroller, Batangas residential",
                "",
            ),
            slot(
                "project-eco-home",
                "Eco-Friendly Home",
                "Project scroller, Tagaytay residential",
                "",
            ),
            slot(
                "project-medical-clinic",
                "Medical Clinic",
                "Project scroller, Quezon City commercial",
                "",
            ),
            slot(
                "project-resort-cottages",
                "Resort Cottages",
                "Project scroller, Palawan modular",
                "",
            ),
            slot(
                "project-student-dorm",
                "Student Dormitory",
                "Project scroller, Baguio modular",
                "",
            ),
            slot(
                "project-retail-space",
                "Retail Space",
                "Project scroller, Makati commercial",
                "",
            ),
        ],
    },
];

/// Iterate over every slot in registry order.
pub fn all_slots() -> impl Iterator<Item = &'static ImageSlot> {
    IMAGE_GROUPS.iter().flat_map(|group| group.items.iter())
}

/// Look up a slot by key.
pub fn find_slot(key: &str) -> Option<&'static ImageSlot> {
    all_slots().find(|slot| slot.key == key)
}

/// Look up a group by title.
pub fn find_group(title: &str) -> Option<&'static ImageGroup> {
    IMAGE_GROUPS.iter().find(|group| group.title == title)
}

/// Total number of slots across all groups.
pub fn total_slots() -> usize {
    IMAGE_GROUPS.iter().map(|group| group.items.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let mut seen = HashSet::new();
        for slot in all_slots() {
            assert!(seen.insert(slot.key), "duplicate slot key '{}'", slot.key);
        }
        assert_eq!(seen.len(), total_slots());
    }

    #[test]
    fn test_registry_shape() {
        assert_eq!(IMAGE_GROUPS.len(), 8);
        assert_eq!(total_slots(), 20);
        assert!(IMAGE_GROUPS.iter().all(|group| !group.items.is_empty()));
    }

    #[test]
    fn test_find_slot() {
        let logo = find_slot("logo").expect("logo slot");
        assert_eq!(logo.default_src, "/logo.jpg");
        assert!(logo.has_default());

        let hero = find_slot("hero-bg-image").expect("hero slot");
        assert!(!hero.has_default());

        assert!(find_slot("does-not-exist").is_none());
    }

    #[test]
    fn test_serializes_for_admin_view() {
        let json = serde_json::to_value(IMAGE_GROUPS).unwrap();
        assert_eq!(json[0]["title"], "Logo & Branding");
        assert_eq!(json[0]["items"][0]["key"], "logo");
        assert_eq!(json[0]["items"][0]["default_src"], "/logo.jpg");
    }

    #[test]
    fn test_find_group() {
        let gallery = find_group("3D Gallery Carousel").expect("gallery group");
        assert_eq!(gallery.items.len(), 5);
        assert!(find_group("Nope").is_none());
    }
}
