pub mod advance_tick_cmd;
pub mod cancel_request_cmd;
pub mod checkout_item_cmd;
pub mod pay_fine_cmd;
pub mod request_item_cmd;
pub mod return_item_cmd;
