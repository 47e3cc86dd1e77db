pub mod needle;
