use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::at_storage_precision;

pub type ItemId = i64;

/// Read access to the attributes the matching rules compare.
///
/// Both lost and found reports expose the same four fields, so a score
/// computed from `(a, b)` is the same as one computed from `(b, a)`.
pub trait ItemAttributes {
    fn item_name(&self) -> Option<&str>;
    fn color(&self) -> Option<&str>;
    fn location(&self) -> Option<&str>;
    fn description(&self) -> Option<&str>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Lost,
    Found,
}

impl ItemKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lost => "lost",
            Self::Found => "found",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lost-item report that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLostItem {
    pub item_name: String,
    pub color: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub contact_info: String,
    pub reported_at: DateTime<Utc>,
}

impl NewLostItem {
    pub fn new(item_name: impl Into<String>, contact_info: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
            color: None,
            location: None,
            description: None,
            contact_info: contact_info.into(),
            reported_at: at_storage_precision(Utc::now()),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn reported_at(mut self, at: DateTime<Utc>) -> Self {
        self.reported_at = at_storage_precision(at);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LostItem {
    pub id: ItemId,
    pub item_name: String,
    pub color: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub contact_info: String,
    pub reported_at: DateTime<Utc>,
}

impl LostItem {
    pub fn from_new(id: ItemId, item: NewLostItem) -> Self {
        Self {
            id,
            item_name: item.item_name,
            color: item.color,
            location: item.location,
            description: item.description,
            contact_info: item.contact_info,
            reported_at: item.reported_at,
        }
    }
}

/// A found-item report that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFoundItem {
    pub item_name: String,
    pub color: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub finder_info: String,
    pub found_at: DateTime<Utc>,
}

impl NewFoundItem {
    pub fn new(item_name: impl Into<String>, finder_info: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
            color: None,
            location: None,
            description: None,
            finder_info: finder_info.into(),
            found_at: at_storage_precision(Utc::now()),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn found_at(mut self, at: DateTime<Utc>) -> Self {
        self.found_at = at_storage_precision(at);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundItem {
    pub id: ItemId,
    pub item_name: String,
    pub color: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub finder_info: String,
    pub found_at: DateTime<Utc>,
}

impl FoundItem {
    pub fn from_new(id: ItemId, item: NewFoundItem) -> Self {
        Self {
            id,
            item_name: item.item_name,
            color: item.color,
            location: item.location,
            description: item.description,
            finder_info: item.finder_info,
            found_at: item.found_at,
        }
    }
}

macro_rules! impl_item_attributes {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ItemAttributes for $ty {
                fn item_name(&self) -> Option<&str> {
                    Some(self.item_name.as_str())
                }

                fn color(&self) -> Option<&str> {
                    self.color.as_deref()
                }

                fn location(&self) -> Option<&str> {
                    self.location.as_deref()
                }

                fn description(&self) -> Option<&str> {
                    self.description.as_deref()
                }
            }
        )+
    };
}

impl_item_attributes!(NewLostItem, LostItem, NewFoundItem, FoundItem);
