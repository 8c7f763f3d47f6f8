use crate::error::Result;
use crate::models::{FoundItem, ItemId, LostItem, NewFoundItem, NewLostItem};
use crate::store::ItemSource;

use super::LostFound;
use super::report_service::validate_item_fields;

impl LostFound {
    pub fn lost_item(&self, id: ItemId) -> Result<Option<LostItem>> {
        self.state.get_lost_item(id)
    }

    pub fn found_item(&self, id: ItemId) -> Result<Option<FoundItem>> {
        self.state.get_found_item(id)
    }

    pub fn lost_items(&self) -> Result<Vec<LostItem>> {
        self.state.list_lost_items()
    }

    pub fn found_items(&self) -> Result<Vec<FoundItem>> {
        self.state.list_found_items()
    }

    /// Edits do not rerun matching; existing matches keep their scores.
    pub fn update_lost_item(&self, id: ItemId, item: &NewLostItem) -> Result<bool> {
        validate_item_fields(&item.item_name, &item.contact_info, "contact info")?;
        self.state.update_lost_item(id, item)
    }

    pub fn update_found_item(&self, id: ItemId, item: &NewFoundItem) -> Result<bool> {
        validate_item_fields(&item.item_name, &item.finder_info, "finder info")?;
        self.state.update_found_item(id, item)
    }

    pub fn delete_lost_item(&self, id: ItemId) -> Result<bool> {
        self.state.delete_lost_item(id)
    }

    pub fn delete_found_item(&self, id: ItemId) -> Result<bool> {
        self.state.delete_found_item(id)
    }
}
