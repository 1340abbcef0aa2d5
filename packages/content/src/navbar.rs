//! Profile shown in the side navigation.

use crate::models::ProfileRecord;

/// Provides the profile block of the side navigation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavbarService;

impl NavbarService {
    pub fn new() -> Self {
        Self
    }

    pub fn get_side_nav_data(&self) -> ProfileRecord {
        ProfileRecord {
            name: "Romain Marecat".to_string(),
            email: "romain.marecat@gmail.com".to_string(),
            src: "assets/images/sidenav-profile.jpg".to_string(),
        }
    }
}
