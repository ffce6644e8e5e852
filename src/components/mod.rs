pub mod clear_button;
pub mod review_form;
pub mod reviews_list;
