pub mod overlay_file;
