pub mod dialog_mock;
