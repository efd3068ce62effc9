//! Discovery Test Suite
//!
//! ## Structure
//! - `module_tree` - Module reference resolution and tree construction
//! - `inheritance` - Include/exclude inheritance across descriptors
//! - `test_files` - Test file discovery inside modules

pub mod inheritance;
pub mod test_files;
