pub mod evaluation_panel;
pub mod header;
pub mod nav;
pub mod trip_form;
