//! Hash-fragment routing between the landing page and the admin panel.

/// Top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Public marketing page
    #[default]
    Site,
    /// Image override editor
    Admin,
}

impl Route {
    /// Fragment that selects the admin view.
    pub const ADMIN_HASH: &'static str = "#/admin";

    /// Select the view for a `location.hash` value.
    ///
    /// Only an exact `#/admin` opens the admin panel; anything else,
    /// including an empty fragment, shows the site.
    pub fn from_hash(hash: &str) -> Self {
        if hash == Self::ADMIN_HASH {
            Route::Admin
        } else {
            Route::Site
        }
    }

    /// Canonical fragment for this route.
    pub fn hash(&self) -> &'static str {
        match self {
            Route::Site => "",
            Route::Admin => Self::ADMIN_HASH,
        }
    }

    /// Short name used in logs and by the wasm bindings.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Site => "site",
            Route::Admin => "admin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_hash() {
        assert_eq!(Route::from_hash("#/admin"), Route::Admin);
    }

    #[test]
    fn test_everything_else_is_site() {
        for hash in ["", "#", "#/", "#/admin/", "#/Admin", "#about", "/admin"] {
            assert_eq!(Route::from_hash(hash), Route::Site, "hash {hash:?}");
        }
    }

    #[test]
    fn test_hash_round_trip() {
        for route in [Route::Site, Route::Admin] {
            assert_eq!(Route::from_hash(route.hash()), route);
        }
        assert_eq!(Route::Admin.name(), "admin");
    }
}
