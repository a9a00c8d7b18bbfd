pub mod add_item_cmd;
