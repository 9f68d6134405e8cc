pub mod regenerate;
