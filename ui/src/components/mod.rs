pub mod currency_select;
pub mod pico;
pub mod quantity_input;
pub mod result_panel;
