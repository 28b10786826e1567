//! Domain types shared by the editor component.

mod permission;

pub use permission::ViewPermission;
