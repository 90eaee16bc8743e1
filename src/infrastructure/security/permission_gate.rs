use crate::domain::shared::permissions::{PermissionGate, PermissionSnapshot};

/// Role-based rights mapping, standing in for the forum's authorization
/// subsystem. Guests hold neither right; restricted accounts can see likes
/// but not create them.
pub struct RolePermissionGate;

impl PermissionGate for RolePermissionGate {
    fn snapshot_for(&self, role: Option<&str>) -> PermissionSnapshot {
        match role {
            Some("admin") | Some("member") => PermissionSnapshot {
                can_create_like: true,
                can_view_likes: true,
            },
            Some("restricted") => PermissionSnapshot {
                can_create_like: false,
                can_view_likes: true,
            },
            _ => PermissionSnapshot::NONE,
        }
    }
}
