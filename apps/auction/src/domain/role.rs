//! Permission roles and the resolver that derives them from an actor.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::domain::actors::{ActorId, ActorRef, ADMIN_CAPABILITY, APP_CAPABILITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    App,
    Auctioneer,
    Competitor,
    Other,
}

impl Role {
    /// Resolution order; the first matching role wins.
    pub const PRECEDENCE: [Role; 4] = [Role::Admin, Role::App, Role::Auctioneer, Role::Competitor];

    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::App => "app",
            Role::Auctioneer => "auctioneer",
            Role::Competitor => "competitor",
            Role::Other => "other",
        }
    }

    /// Roles allowed to configure, and to finish, an auction.
    pub fn can_manage_auction(self) -> bool {
        matches!(self, Role::Admin | Role::Auctioneer)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of role membership. Implementations must be deterministic.
pub trait RoleMembership: Send + Sync {
    fn members_of(&self, role: Role) -> HashSet<ActorId>;

    fn is_member(&self, role: Role, actor: &ActorId) -> bool {
        self.members_of(role).contains(actor)
    }
}

/// Maps actors to roles: platform capabilities first, then membership.
#[derive(Clone)]
pub struct RoleResolver {
    membership: Arc<dyn RoleMembership>,
}

impl RoleResolver {
    pub fn new(membership: Arc<dyn RoleMembership>) -> Self {
        Self { membership }
    }

    pub fn resolve(&self, actor: &ActorRef) -> Role {
        for role in Role::PRECEDENCE {
            let by_capability = match role {
                Role::Admin => actor.has_capability(ADMIN_CAPABILITY),
                Role::App => actor.has_capability(APP_CAPABILITY),
                _ => false,
            };
            if by_capability || self.membership.is_member(role, &actor.id) {
                return role;
            }
        }
        Role::Other
    }
}

impl fmt::Debug for RoleResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoleResolver").finish_non_exhaustive()
    }
}
