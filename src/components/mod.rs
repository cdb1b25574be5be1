//! UI Components

mod add_item_form;
mod global_search;
mod inventory_panel;
mod item_card;
mod item_row;
mod location_picker;
mod location_sidebar;

pub use add_item_form::AddItemForm;
pub use global_search::GlobalSearch;
pub use inventory_panel::InventoryPanel;
pub use item_card::ItemCard;
pub use item_row::ItemRow;
pub use location_picker::LocationPicker;
pub use location_sidebar::LocationSidebar;
