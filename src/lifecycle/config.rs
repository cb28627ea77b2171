//! Runtime settings, read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `PET_MANAGER_CHANNEL_CAPACITY` | 32 | Request buffer of each backend |
//! | `PET_MANAGER_PET_PAGE_SIZE` | 10 | Page size of `PetFacade::first_page` |
//! | `PET_MANAGER_TUTOR_PAGE_SIZE` | 10 | Page size of `TutorFacade::first_page` |
//!
//! Values that do not parse fall back to the default.

use std::env;
use std::str::FromStr;

pub const CHANNEL_CAPACITY_VAR: &str = "PET_MANAGER_CHANNEL_CAPACITY";
pub const PET_PAGE_SIZE_VAR: &str = "PET_MANAGER_PET_PAGE_SIZE";
pub const TUTOR_PAGE_SIZE_VAR: &str = "PET_MANAGER_TUTOR_PAGE_SIZE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    pub channel_capacity: usize,
    pub pet_page_size: u32,
    pub tutor_page_size: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            pet_page_size: 10,
            tutor_page_size: 10,
        }
    }
}

impl SystemConfig {
    pub fn from_env() -> Self {
        Self::default().with_overrides(|name| env::var(name).ok())
    }

    /// Applies the overrides `lookup` returns for each variable name.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        override_with(&lookup, CHANNEL_CAPACITY_VAR, &mut self.channel_capacity);
        override_with(&lookup, PET_PAGE_SIZE_VAR, &mut self.pet_page_size);
        override_with(&lookup, TUTOR_PAGE_SIZE_VAR, &mut self.tutor_page_size);

        // tokio rejects zero-capacity channels.
        if self.channel_capacity == 0 {
            self.channel_capacity = Self::default().channel_capacity;
        }
        self
    }
}

fn override_with<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str, value: &mut T) {
    if let Some(raw) = lookup(name) {
        if let Ok(parsed) = raw.trim().parse() {
            *value = parsed;
        }
    }
}
