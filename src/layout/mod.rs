pub mod packer;
pub mod sizer;
pub mod state;
