pub mod mosques;
